//! PDF extraction.
//!
//! lopdf parses the document tree without any native rendering dependency;
//! page text comes from the text layer only. Pages are visited in page
//! order and searched one at a time, so the first matching page ends the
//! search. Pages with no extractable text (scanned images, broken content
//! streams) are skipped rather than failing the file.
use lopdf::Document;

use crate::error::ExtractionError;
use crate::extractors::TextExtractor;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError> {
        let document = Document::load(&target.path)?;

        for (&page_number, _) in document.get_pages().iter() {
            let text = match document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(
                        path = %target.path.display(),
                        page = page_number,
                        error = %e,
                        "page has no extractable text"
                    );
                    continue;
                }
            };
            if text.trim().is_empty() {
                continue;
            }
            if let Some(found) = pattern.find(&text) {
                return Ok(Some(found.to_owned()));
            }
        }

        Ok(None)
    }
}
