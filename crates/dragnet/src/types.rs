//! Core data types shared across the scan pipeline.
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Extension label reported for files without an extension.
pub const NO_EXTENSION_LABEL: &str = "DATA";

/// Scan policy selected at startup.
///
/// `Fast` and `Deep` are mutually exclusive; [`ScanMode::from_flags`]
/// enforces this for callers that assemble the mode from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Structured extraction only; no size skips, no raw retries for
    /// files with a recognized extension.
    #[default]
    Normal,
    /// Skip oversized PDFs and database files without opening them.
    Fast,
    /// Retry any failed or unrecognized file as raw bytes.
    Deep,
}

impl ScanMode {
    /// Build a mode from the two CLI flags.
    ///
    /// Both flags set is a fatal configuration error, reported before any
    /// scanning starts.
    pub fn from_flags(fast: bool, deep: bool) -> Result<Self, ScanError> {
        match (fast, deep) {
            (true, true) => Err(ScanError::config(
                "--fast and --deep cannot be combined",
            )),
            (true, false) => Ok(ScanMode::Fast),
            (false, true) => Ok(ScanMode::Deep),
            (false, false) => Ok(ScanMode::Normal),
        }
    }
}

/// A single file discovered during the walk.
///
/// Targets are transient: created per directory entry, dropped once the
/// match engine has resolved the file.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub path: PathBuf,
    /// Lower-cased extension (text after the last `.`), or `None` for
    /// extension-less files.
    pub extension: Option<String>,
}

impl ScanTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        Self { path, extension }
    }

    /// Extension as reported in the output: upper-cased, `DATA` when absent.
    pub fn extension_label(&self) -> String {
        match &self.extension {
            Some(ext) => ext.to_uppercase(),
            None => NO_EXTENSION_LABEL.to_string(),
        }
    }
}

/// One confirmed keyword hit, at most one per target.
///
/// `keyword` carries the literal matched substring as it appeared in the
/// extracted text, not the pattern that produced it. Field names map
/// directly onto the report header via serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchRecord {
    pub status: String,
    pub keyword: String,
    pub extension: String,
    #[serde(rename = "SHA1")]
    pub sha1: String,
    pub path: String,
}

impl MatchRecord {
    pub const STATUS_MATCH: &'static str = "MATCH";

    pub fn new(target: &ScanTarget, keyword: String, sha1: String) -> Self {
        Self {
            status: Self::STATUS_MATCH.to_string(),
            keyword,
            extension: target.extension_label(),
            sha1,
            path: target.path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(ScanMode::from_flags(false, false).unwrap(), ScanMode::Normal);
        assert_eq!(ScanMode::from_flags(true, false).unwrap(), ScanMode::Fast);
        assert_eq!(ScanMode::from_flags(false, true).unwrap(), ScanMode::Deep);
    }

    #[test]
    fn test_mode_conflicting_flags() {
        let err = ScanMode::from_flags(true, true).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn test_target_extension_lowercased() {
        let target = ScanTarget::new("/evidence/Report.DOCX");
        assert_eq!(target.extension.as_deref(), Some("docx"));
        assert_eq!(target.extension_label(), "DOCX");
    }

    #[test]
    fn test_target_without_extension() {
        let target = ScanTarget::new("/evidence/mailbox");
        assert_eq!(target.extension, None);
        assert_eq!(target.extension_label(), "DATA");
    }

    #[test]
    fn test_target_dotfile_has_no_extension() {
        let target = ScanTarget::new("/evidence/.bashrc");
        assert_eq!(target.extension, None);
    }

    #[test]
    fn test_target_takes_last_extension_component() {
        let target = ScanTarget::new("/evidence/export.tar.gz");
        assert_eq!(target.extension.as_deref(), Some("gz"));
    }

    #[test]
    fn test_match_record_fields() {
        let target = ScanTarget::new("/evidence/ledger.xlsx");
        let record = MatchRecord::new(&target, "acct-9981".to_string(), "0".repeat(40));
        assert_eq!(record.status, "MATCH");
        assert_eq!(record.extension, "XLSX");
        assert_eq!(record.keyword, "acct-9981");
        assert!(record.path.ends_with("ledger.xlsx"));
    }
}
