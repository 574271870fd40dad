//! Raw text/binary extraction.
//!
//! The last-resort view of a file: read every byte, decode as UTF-8, and
//! fall back to Latin-1 when the bytes are not valid UTF-8. Latin-1 maps
//! every byte to a scalar, so the fallback cannot fail; undecodable input
//! simply becomes mojibake that the pattern will not match. This is what
//! makes mbox spools and unknown binaries searchable at all.
use std::borrow::Cow;

use crate::error::ExtractionError;
use crate::extractors::TextExtractor;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

pub struct RawExtractor;

impl TextExtractor for RawExtractor {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError> {
        let bytes = std::fs::read(&target.path)?;

        let text: Cow<'_, str> = match std::str::from_utf8(&bytes) {
            Ok(s) => Cow::Borrowed(s),
            Err(_) => encoding_rs::mem::decode_latin1(&bytes),
        };

        Ok(pattern.find(&text).map(str::to_owned))
    }
}
