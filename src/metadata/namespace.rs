//! Namespace identifiers for the metadata cache.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// A category of derived metadata with its own keyspace, capacity and TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Namespace {
    /// Detected file types, keyed by path
    FileType,
    /// File-system stat results, keyed by path
    FileStat,
    /// Syntax-highlight configuration, keyed by language
    SyntaxConfig,
    /// OCR text, keyed by image hash
    OcrResult,
}

impl Namespace {
    /// Every namespace, in reporting order.
    pub const ALL: [Namespace; 4] = [
        Namespace::FileType,
        Namespace::FileStat,
        Namespace::SyntaxConfig,
        Namespace::OcrResult,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::FileType => "file-type",
            Namespace::FileStat => "file-stat",
            Namespace::SyntaxConfig => "syntax-config",
            Namespace::OcrResult => "ocr-result",
        }
    }

    /// Prefix used for this namespace's environment variables.
    pub fn env_prefix(self) -> &'static str {
        match self {
            Namespace::FileType => "FILE_TYPE",
            Namespace::FileStat => "FILE_STAT",
            Namespace::SyntaxConfig => "SYNTAX_CONFIG",
            Namespace::OcrResult => "OCR_RESULT",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.as_str() == s)
            .ok_or_else(|| CacheError::UnknownNamespace(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_namespaces() {
        for ns in Namespace::ALL {
            assert_eq!(ns.as_str().parse::<Namespace>().unwrap(), ns);
        }
    }

    #[test]
    fn test_parse_unknown_namespace() {
        let err = "thumbnails".parse::<Namespace>().unwrap_err();
        assert_eq!(err, CacheError::UnknownNamespace("thumbnails".to_string()));
    }

    #[test]
    fn test_serde_matches_display() {
        for ns in Namespace::ALL {
            let json = serde_json::to_string(&ns).unwrap();
            assert_eq!(json, format!("\"{}\"", ns));
        }
    }
}
