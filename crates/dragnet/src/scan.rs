//! Scan driver: walk the evidence tree and collect matches.
//!
//! Single-threaded and sequential on purpose: one file is fully resolved
//! (extracted, searched, hashed) before the next is considered, and the
//! walk order is fixed by file name so two scans over an unchanged tree
//! produce identical reports.
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::engine;
use crate::pattern::KeywordPattern;
use crate::types::{MatchRecord, ScanMode, ScanTarget};

/// Counters for one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files visited by the walk.
    pub files_seen: u64,
    /// Files that produced a match record.
    pub matches: u64,
}

/// A configured scan: one compiled pattern, one mode.
pub struct Scanner {
    pattern: KeywordPattern,
    mode: ScanMode,
}

impl Scanner {
    pub fn new(pattern: KeywordPattern, mode: ScanMode) -> Self {
        Self { pattern, mode }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Walk `root` recursively and collect all match records.
    pub fn scan(&self, root: &Path) -> (Vec<MatchRecord>, ScanStats) {
        self.scan_with(root, |_| {})
    }

    /// Walk `root`, invoking `on_match` for each record as it is found.
    ///
    /// Unreadable directory entries are skipped; they are walk-level
    /// failures, handled the same way as per-file extraction failures.
    pub fn scan_with<F>(&self, root: &Path, mut on_match: F) -> (Vec<MatchRecord>, ScanStats)
    where
        F: FnMut(&MatchRecord),
    {
        let mut records = Vec::new();
        let mut stats = ScanStats::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "walk entry skipped");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            stats.files_seen += 1;
            let target = ScanTarget::new(entry.into_path());
            if let Some(record) = engine::process(&target, &self.pattern, self.mode) {
                stats.matches += 1;
                on_match(&record);
                records.push(record);
            }
        }

        (records, stats)
    }
}
