//! Extension-based file classification.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Broad category of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Apk,
    Text,
    Other,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Document => write!(f, "document"),
            Self::Archive => write!(f, "archive"),
            Self::Apk => write!(f, "apk"),
            Self::Text => write!(f, "text"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Known extensions with their kind and MIME label.
const EXTENSIONS: &[(&str, FileKind, &str)] = &[
    // Images
    ("jpg", FileKind::Image, "image/jpeg"),
    ("jpeg", FileKind::Image, "image/jpeg"),
    ("png", FileKind::Image, "image/png"),
    ("gif", FileKind::Image, "image/gif"),
    ("webp", FileKind::Image, "image/webp"),
    ("bmp", FileKind::Image, "image/bmp"),
    ("svg", FileKind::Image, "image/svg+xml"),
    ("ico", FileKind::Image, "image/x-icon"),
    // Videos
    ("mp4", FileKind::Video, "video/mp4"),
    ("mkv", FileKind::Video, "video/x-matroska"),
    ("avi", FileKind::Video, "video/x-msvideo"),
    ("mov", FileKind::Video, "video/quicktime"),
    ("wmv", FileKind::Video, "video/x-ms-wmv"),
    ("flv", FileKind::Video, "video/x-flv"),
    ("webm", FileKind::Video, "video/webm"),
    ("3gp", FileKind::Video, "video/3gpp"),
    // Audio
    ("mp3", FileKind::Audio, "audio/mpeg"),
    ("wav", FileKind::Audio, "audio/wav"),
    ("ogg", FileKind::Audio, "audio/ogg"),
    ("flac", FileKind::Audio, "audio/flac"),
    ("aac", FileKind::Audio, "audio/aac"),
    ("m4a", FileKind::Audio, "audio/mp4"),
    ("wma", FileKind::Audio, "audio/x-ms-wma"),
    // Documents
    ("pdf", FileKind::Document, "application/pdf"),
    ("doc", FileKind::Document, "application/msword"),
    (
        "docx",
        FileKind::Document,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", FileKind::Document, "application/vnd.ms-excel"),
    (
        "xlsx",
        FileKind::Document,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", FileKind::Document, "application/vnd.ms-powerpoint"),
    (
        "pptx",
        FileKind::Document,
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("odt", FileKind::Document, "application/vnd.oasis.opendocument.text"),
    ("ods", FileKind::Document, "application/vnd.oasis.opendocument.spreadsheet"),
    ("odp", FileKind::Document, "application/vnd.oasis.opendocument.presentation"),
    ("rtf", FileKind::Document, "application/rtf"),
    ("csv", FileKind::Document, "text/csv"),
    // Text and code
    ("txt", FileKind::Text, "text/plain"),
    ("md", FileKind::Text, "text/markdown"),
    ("html", FileKind::Text, "text/html"),
    ("htm", FileKind::Text, "text/html"),
    ("css", FileKind::Text, "text/css"),
    ("js", FileKind::Text, "text/javascript"),
    ("json", FileKind::Text, "application/json"),
    ("xml", FileKind::Text, "text/xml"),
    ("kt", FileKind::Text, "text/x-kotlin"),
    ("java", FileKind::Text, "text/x-java"),
    ("py", FileKind::Text, "text/x-python"),
    ("c", FileKind::Text, "text/x-c"),
    ("cpp", FileKind::Text, "text/x-c"),
    ("h", FileKind::Text, "text/x-c"),
    ("rs", FileKind::Text, "text/x-rust"),
    ("sh", FileKind::Text, "application/x-sh"),
    // Archives
    ("zip", FileKind::Archive, "application/zip"),
    ("rar", FileKind::Archive, "application/x-rar-compressed"),
    ("7z", FileKind::Archive, "application/x-7z-compressed"),
    ("tar", FileKind::Archive, "application/x-tar"),
    ("gz", FileKind::Archive, "application/gzip"),
    ("bz2", FileKind::Archive, "application/x-bzip2"),
    ("xz", FileKind::Archive, "application/x-xz"),
    // Android packages
    ("apk", FileKind::Apk, "application/vnd.android.package-archive"),
];

static EXTENSION_TABLE: LazyLock<HashMap<&'static str, (FileKind, &'static str)>> =
    LazyLock::new(|| {
        EXTENSIONS
            .iter()
            .map(|&(ext, kind, mime)| (ext, (kind, mime)))
            .collect()
    });

/// Classify a lowercased extension into a [`FileKind`].
///
/// Unknown extensions fall back to [`FileKind::Other`].
pub fn classify(extension: &str) -> FileKind {
    EXTENSION_TABLE
        .get(extension)
        .map(|&(kind, _)| kind)
        .unwrap_or(FileKind::Other)
}

/// MIME label for a lowercased extension.
pub fn mime_for_extension(extension: &str) -> &'static str {
    EXTENSION_TABLE
        .get(extension)
        .map(|&(_, mime)| mime)
        .unwrap_or("application/octet-stream")
}
