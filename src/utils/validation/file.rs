//! Upload policy for report attachments.
//!
//! Only the metadata the browser already knows is checked here: the file name
//! and its declared size. Content is never inspected.

use serde::{Deserialize, Serialize};

use crate::utils::validation::{MAX_FILE_SIZE, MAX_VIDEO_SIZE};

/// Name and declared size of an attachment.
///
/// Missing fields fall back to an empty name and a zero size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: i64,
}

/// Family of an accepted attachment, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    /// Classifies a lowercase extension, without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "jpg" | "jpeg" | "png" | "gif" => Some(Self::Image),
            "mp4" | "avi" | "mov" => Some(Self::Video),
            "mp3" | "wav" | "ogg" => Some(Self::Audio),
            "pdf" | "doc" | "docx" => Some(Self::Document),
            _ => None,
        }
    }

    /// Classifies a file name by its extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        file_extension(filename).as_deref().and_then(Self::from_extension)
    }

    /// Largest accepted size for this kind, in bytes
    pub fn max_size(self) -> i64 {
        match self {
            Self::Video => MAX_VIDEO_SIZE,
            Self::Image | Self::Audio | Self::Document => MAX_FILE_SIZE,
        }
    }
}

/// Extracts the lowercase extension of the last path segment of `filename`.
///
/// `"a/b.tar.GZ"` gives `Some("gz")`, `"photo."` gives `Some("")` and
/// `"README"` gives `None`.
pub fn file_extension(filename: &str) -> Option<String> {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    name.rsplit_once('.').map(|(_, extension)| extension.to_lowercase())
}

/// Returns true if `filename` carries an allowed image, video, audio or
/// document extension.
pub fn is_valid_file_extension(filename: &str) -> bool {
    MediaKind::from_filename(filename).is_some()
}

/// Returns true if `size` fits the limit for the kind of `filename`.
///
/// Videos may reach [`MAX_VIDEO_SIZE`]; everything else, including names the
/// extension allow-list rejects, is held to [`MAX_FILE_SIZE`].
pub fn is_valid_file_size(filename: &str, size: i64) -> bool {
    let limit = MediaKind::from_filename(filename).map_or(MAX_FILE_SIZE, MediaKind::max_size);
    size <= limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MIB;

    #[test]
    fn test_file_extensions() {
        let test_cases = vec![
            ("imagem.jpg", true),
            ("IMAGEM.JPEG", true),
            ("gif.animado.gif", true),
            ("video.MOV", true),
            ("audio.ogg", true),
            ("relatorio.docx", true),
            ("uploads/2025/laudo.pdf", true),
            ("arquivo.exe", false),
            ("jpg", false),              // No dot, no extension
            ("foto.", false),            // Empty extension
            ("foto.jpg.exe", false),     // Only the final extension counts
            ("pasta.jpg/arquivo", false),
            ("", false),
        ];

        for (filename, expected_valid) in test_cases {
            assert_eq!(is_valid_file_extension(filename), expected_valid,
                       "Extension of '{}' validation result was unexpected", filename);
        }
    }

    #[test]
    fn test_file_sizes() {
        let test_cases = vec![
            ("foto.jpg", 5 * MIB, true),
            ("foto.jpg", 15 * MIB, false),
            ("video.mp4", 45 * MIB, true),
            ("video.mp4", 55 * MIB, false),
            ("video.AVI", MAX_VIDEO_SIZE, true),
            ("video.mov", MAX_VIDEO_SIZE + 1, false),
            ("audio.mp3", MAX_FILE_SIZE, true),
            ("audio.mp3", MAX_FILE_SIZE + 1, false),
            ("programa.exe", 5 * MIB, true),     // Unknown kinds use the default limit
            ("programa.exe", 15 * MIB, false),
            ("sem_extensao", 0, true),
            ("foto.png", -1, true),              // No lower bound
        ];

        for (filename, size, expected_valid) in test_cases {
            assert_eq!(is_valid_file_size(filename, size), expected_valid,
                       "Size {} of '{}' validation result was unexpected", size, filename);
        }
    }

    #[test]
    fn test_file_extension_extraction() {
        assert_eq!(file_extension("a/b.tar.GZ").as_deref(), Some("gz"));
        assert_eq!(file_extension("photo.").as_deref(), Some(""));
        assert_eq!(file_extension(".hidden").as_deref(), Some("hidden"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension("dir.d/README"), None);
    }

    #[test]
    fn test_media_kind_limits() {
        assert_eq!(MediaKind::from_filename("clip.mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::Video.max_size(), 50 * MIB);
        assert_eq!(MediaKind::Document.max_size(), 10 * MIB);
    }

    #[test]
    fn test_file_descriptor_defaults() {
        let descriptor: FileDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(descriptor, FileDescriptor::default());

        let descriptor: FileDescriptor =
            serde_json::from_str(r#"{"name": "foto.jpg", "size": 1024, "type": "image/jpeg"}"#).unwrap();
        assert_eq!(descriptor.name, "foto.jpg");
        assert_eq!(descriptor.size, 1024);

        assert!(serde_json::from_str::<FileDescriptor>(r#"{"name": "foto.jpg", "size": 1.5}"#).is_err());
        assert!(serde_json::from_str::<FileDescriptor>(r#"{"name": "foto.jpg", "size": "10"}"#).is_err());
    }
}
