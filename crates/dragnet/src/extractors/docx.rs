//! Word-processing (DOCX) extraction.
//!
//! Text comes from docx-lite's streaming XML parser: all paragraph texts
//! in document order, newline-separated, as one buffer. The buffer is
//! searched once, so a keyword present in several paragraphs reports the
//! first occurrence only.
use crate::error::ExtractionError;
use crate::extractors::TextExtractor;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError> {
        let bytes = std::fs::read(&target.path)?;
        let text = docx_lite::extract_text_from_bytes(&bytes)
            .map_err(|e| ExtractionError::parse(format!("DOCX text extraction failed: {e}")))?;

        Ok(pattern.find(&text).map(str::to_owned))
    }
}
