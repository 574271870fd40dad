//! Dragnet - Keyword Sweep Engine for Evidence Trees
//!
//! Dragnet walks a directory of collected evidence and reports every file
//! whose content matches a keyword list, together with the file's SHA-1.
//! Searchable text is pulled out of Office documents, PDFs, spreadsheets,
//! SQLite databases, and - as a fallback - raw bytes. One corrupt or
//! locked file never aborts a scan: per-file failures are contained and
//! the walk continues.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dragnet::{KeywordPattern, ScanMode, Scanner};
//!
//! # fn main() -> dragnet::Result<()> {
//! let pattern = KeywordPattern::compile(["acct*", "invoice"])?;
//! let scanner = Scanner::new(pattern, ScanMode::Normal);
//! let (records, stats) = scanner.scan(std::path::Path::new("/evidence"));
//! println!("{} matches in {} files", stats.matches, stats.files_seen);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Pattern** (`pattern`): keyword list compiled into one
//!   case-insensitive alternation; `*` is the only wildcard
//! - **Classifier** (`formats`): extension to format-family mapping
//! - **Extractors** (`extractors`): one searchable-text capability per
//!   format family, selected by a lookup table
//! - **Engine** (`engine`): size-skip policy, dispatch, raw fallback,
//!   per-file error containment, record construction
//! - **Driver** (`scan`): deterministic sequential tree walk
//! - **Reports** (`report`): BOM-prefixed text and CSV writers

#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod extractors;
pub mod formats;
pub mod hash;
pub mod pattern;
pub mod report;
pub mod scan;
pub mod types;

pub use error::{ExtractionError, Result, ScanError};
pub use formats::FormatKind;
pub use pattern::KeywordPattern;
pub use report::{ReportFormat, write_report};
pub use scan::{ScanStats, Scanner};
pub use types::{MatchRecord, ScanMode, ScanTarget};
