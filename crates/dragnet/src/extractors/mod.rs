//! Format-specific text extractors.
//!
//! Each extractor knows how to turn one family of file formats into
//! searchable text. Extractors either decode the whole file into a single
//! buffer (word-processing, raw) or search incrementally and stop at the
//! first hit (spreadsheet cells, presentation shapes, PDF pages, database
//! rows). Every failure an extractor can raise is an [`ExtractionError`];
//! the match engine decides containment and fallback, never the extractor.
use crate::error::ExtractionError;
use crate::formats::FormatKind;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

pub mod docx;
pub mod excel;
pub mod pdf;
pub mod pptx;
pub mod raw;
pub mod sqlite;

pub use docx::DocxExtractor;
pub use excel::ExcelExtractor;
pub use pdf::PdfExtractor;
pub use pptx::PptxExtractor;
pub use raw::RawExtractor;
pub use sqlite::SqliteExtractor;

/// Capability implemented by every format family.
pub trait TextExtractor: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Search the target's content, returning the first matched substring.
    ///
    /// `Ok(None)` means the file was read successfully and contains no
    /// match; an error means the file could not be turned into text.
    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError>;
}

static DOCX: DocxExtractor = DocxExtractor;
static EXCEL: ExcelExtractor = ExcelExtractor;
static PPTX: PptxExtractor = PptxExtractor;
static PDF: PdfExtractor = PdfExtractor;
static SQLITE: SqliteExtractor = SqliteExtractor;
static RAW: RawExtractor = RawExtractor;

/// Look up the structured extractor for a format kind.
///
/// `Raw` has no structured extractor: raw decoding only runs when the
/// engine's fallback conditions hold, so it is reached through [`raw`],
/// never through this table.
pub fn for_kind(kind: FormatKind) -> Option<&'static dyn TextExtractor> {
    match kind {
        FormatKind::WordProcessing => Some(&DOCX),
        FormatKind::Spreadsheet => Some(&EXCEL),
        FormatKind::Presentation => Some(&PPTX),
        FormatKind::Pdf => Some(&PDF),
        FormatKind::Database => Some(&SQLITE),
        FormatKind::Raw => None,
    }
}

/// The raw-bytes extractor used by the engine's fallback stage.
pub fn raw() -> &'static dyn TextExtractor {
    &RAW
}
