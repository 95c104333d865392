//! Values stored in each metadata namespace
//!
//! These are produced by external collaborators (file-type detection, stat
//! lookups, syntax configuration loading, OCR) and handed to the cache as
//! owned data. The cache clones them out on every hit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of file-type detection for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeInfo {
    /// MIME type, e.g. `text/x-rust`
    pub mime_type: String,
    /// Lower-cased extension without the dot, if any
    #[serde(default)]
    pub extension: Option<String>,
    /// Whether the content is binary
    pub is_binary: bool,
    /// Highlighting language, when the file is source code
    #[serde(default)]
    pub language: Option<String>,
}

impl FileTypeInfo {
    pub fn new(mime_type: impl Into<String>, is_binary: bool) -> Self {
        Self {
            mime_type: mime_type.into(),
            extension: None,
            is_binary,
            language: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Subset of file-system metadata for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Size in bytes
    pub size: u64,
    pub is_file: bool,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub readonly: bool,
    /// Last modification time, when the platform reports one
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

impl From<&std::fs::Metadata> for FileStats {
    fn from(meta: &std::fs::Metadata) -> Self {
        Self {
            size: meta.len(),
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
            is_symlink: meta.file_type().is_symlink(),
            readonly: meta.permissions().readonly(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        }
    }
}

/// Syntax-highlight configuration for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxConfig {
    pub language: String,
    /// Grammar or scope name used by the highlighter
    pub grammar: String,
    /// Extensions mapped to this language
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub line_comment: Option<String>,
}

/// Text recognised in an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrResult {
    pub text: String,
    /// Mean recognition confidence in `0.0..=1.0`
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub language: Option<String>,
}

impl OcrResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            language: None,
        }
    }
}
