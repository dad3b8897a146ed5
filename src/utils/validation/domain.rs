//! Closed vocabularies used by animal-abuse reports.
//!
//! Both validators are plain membership checks. A status being valid says
//! nothing about whether a report may move to it from its current status.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of abuse a report describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ReportCategory {
    ViolenciaFisica,
    Negligencia,
    Abandono,
    MausTratos,
    ComercioIlegal,
    Outro,
}

/// Lifecycle stage of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Criada,
    EmAnalise,
    EmInvestigacao,
    AguardandoInspecao,
    Resolvida,
    Concluida,
    Arquivada,
}

/// Returns true if the trimmed, lowercased `category` names a [`ReportCategory`].
pub fn is_valid_category(category: &str) -> bool {
    map_chars(category.trim(), char::to_lowercase).parse::<ReportCategory>().is_ok()
}

/// Returns true if the trimmed, uppercased `status` names a [`ReportStatus`].
pub fn is_valid_status(status: &str) -> bool {
    map_chars(status.trim(), char::to_uppercase).parse::<ReportStatus>().is_ok()
}

/// Case-maps one character at a time. A character whose mapping expands to
/// several characters (`ß` -> `SS`, `ﬆ` -> `ST`) is kept as is, so a
/// ligature can never spell out an allowed value.
fn map_chars<F, I>(input: &str, map: F) -> String
where
    F: Fn(char) -> I,
    I: Iterator<Item = char> + ExactSizeIterator,
{
    input
        .chars()
        .map(|c| {
            let mut mapped = map(c);
            match (mapped.len(), mapped.next()) {
                (1, Some(single)) => single,
                _ => c,
            }
        })
        .collect()
}
