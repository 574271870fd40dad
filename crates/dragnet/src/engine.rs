//! The match engine: one file in, at most one match out.
//!
//! Per file the engine runs a fixed pipeline: fast-mode size check, format
//! classification, a primary structured-extraction attempt, then a
//! conditional raw-bytes retry. Extractor failures never leave this
//! module; a file that cannot be read resolves to no-match (or to the raw
//! retry when the fallback conditions hold) and the scan moves on.
use std::path::Path;

use tracing::debug;

use crate::extractors;
use crate::formats::FormatKind;
use crate::hash;
use crate::pattern::KeywordPattern;
use crate::types::{MatchRecord, ScanMode, ScanTarget};

/// Fast mode skips PDFs larger than this.
pub const PDF_FAST_SKIP_BYTES: u64 = 10 * 1024 * 1024;
/// Fast mode skips database-family files larger than this.
pub const DB_FAST_SKIP_BYTES: u64 = 20 * 1024 * 1024;

/// Resolve one target against the pattern.
///
/// Returns the record for the first match, or `None` for a clean miss, a
/// skipped file, or a contained per-file failure.
pub fn process(
    target: &ScanTarget,
    pattern: &KeywordPattern,
    mode: ScanMode,
) -> Option<MatchRecord> {
    let kind = FormatKind::classify(target.extension.as_deref());

    if mode == ScanMode::Fast && skip_for_size(&target.path, kind) {
        debug!(path = %target.path.display(), "skipped oversized file");
        return None;
    }

    // Stage one: the structured extractor for the classified format.
    let primary = extractors::for_kind(kind).map(|extractor| {
        extractor
            .search(target, pattern)
            .map_err(|e| (extractor.name(), e))
    });

    let found = match primary {
        // A clean structured pass is terminal, matched or not: a
        // recognized format that extracts without error is never retried.
        Some(Ok(found)) => found,
        Some(Err((name, e))) => {
            debug!(
                path = %target.path.display(),
                extractor = name,
                error = %e,
                "extraction failed"
            );
            // Stage two: raw retry, only for deep mode or extension-less
            // files.
            raw_fallback(target, pattern, mode)?
        }
        // No structured extractor applies; same fallback decision.
        None => raw_fallback(target, pattern, mode)?,
    };

    found.map(|keyword| {
        let sha1 = hash::sha1_hex_or_sentinel(&target.path);
        MatchRecord::new(target, keyword, sha1)
    })
}

/// The secondary attempt of the pipeline.
///
/// Returns `None` when the fallback conditions do not hold (the `?` in
/// [`process`] then resolves the whole file to no-match), and
/// `Some(result)` when raw extraction ran.
fn raw_fallback(
    target: &ScanTarget,
    pattern: &KeywordPattern,
    mode: ScanMode,
) -> Option<Option<String>> {
    if mode != ScanMode::Deep && target.extension.is_some() {
        return None;
    }

    match extractors::raw().search(target, pattern) {
        Ok(found) => Some(found),
        Err(e) => {
            debug!(path = %target.path.display(), error = %e, "raw fallback failed");
            Some(None)
        }
    }
}

/// Size policy for fast mode. A failed size check counts as oversized:
/// when in doubt, skip rather than stall on a huge or unreadable file.
fn skip_for_size(path: &Path, kind: FormatKind) -> bool {
    let limit = match kind {
        FormatKind::Pdf => PDF_FAST_SKIP_BYTES,
        FormatKind::Database => DB_FAST_SKIP_BYTES,
        _ => return false,
    };
    std::fs::metadata(path).map(|m| m.len() > limit).unwrap_or(true)
}
