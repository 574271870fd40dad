//! Format classification.
//!
//! A file's extraction strategy is a pure function of its lower-cased
//! extension. Anything unrecognized, and anything without an extension,
//! classifies as [`FormatKind::Raw`].

/// The extraction strategy families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    WordProcessing,
    Spreadsheet,
    Presentation,
    Pdf,
    /// Embedded databases. Covers `accdb`/`mdb` as well so the fast-mode
    /// size skip applies to them; the SQLite extractor rejects those at
    /// query time, which routes them through the recoverable-error path.
    Database,
    Raw,
}

impl FormatKind {
    /// Classify by lower-cased extension.
    pub fn classify(extension: Option<&str>) -> FormatKind {
        match extension {
            Some("docx") => FormatKind::WordProcessing,
            Some("xlsx") | Some("xls") => FormatKind::Spreadsheet,
            Some("pptx") => FormatKind::Presentation,
            Some("pdf") => FormatKind::Pdf,
            Some("sqlite") | Some("sqlite3") | Some("db") | Some("accdb") | Some("mdb") => {
                FormatKind::Database
            }
            _ => FormatKind::Raw,
        }
    }
}
