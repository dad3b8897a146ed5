//! The closed set of validation type tags accepted on the wire.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A type tag, such as `cpf` or `file-size`. Parsing is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ValidationKind {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Protocol,
    Category,
    Status,
    FileExtension,
    FileSize,
}

impl ValidationKind {
    /// Every supported tag, in declaration order.
    pub fn supported() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }

    /// Whether the value for this tag is a file descriptor rather than a string
    pub fn expects_file(self) -> bool {
        matches!(self, Self::FileSize)
    }
}
