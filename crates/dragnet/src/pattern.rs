//! Keyword pattern compilation.
//!
//! A keyword list compiles into one case-insensitive alternation. Each
//! keyword is literal text except `*`, which matches any run of characters
//! on the same line (regex `.*`). All other regex metacharacters are
//! escaped, so `1,000.00` or `a+b` search as written.
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ScanError};

/// Compiled keyword matcher, built once at startup and shared read-only
/// across every target for the lifetime of the scan.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    /// Compile a pattern from raw keyword lines.
    ///
    /// Lines are trimmed and blank lines discarded. Yields
    /// [`ScanError::Config`] when no usable keyword remains: that is a
    /// fatal startup condition, not a per-file failure.
    pub fn compile<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pieces: Vec<String> = lines
            .into_iter()
            .filter_map(|line| {
                let keyword = line.as_ref().trim();
                if keyword.is_empty() {
                    None
                } else {
                    Some(regex::escape(keyword).replace(r"\*", ".*"))
                }
            })
            .collect();

        if pieces.is_empty() {
            return Err(ScanError::config("keyword list is empty"));
        }

        let regex = RegexBuilder::new(&pieces.join("|"))
            .case_insensitive(true)
            .build()
            .map_err(|e| ScanError::config(format!("invalid keyword pattern: {e}")))?;

        Ok(Self { regex })
    }

    /// Compile a pattern from a newline-delimited keyword file.
    ///
    /// The file is decoded lossily: undecodable bytes are ignored rather
    /// than failing the whole list. A missing or unreadable file is a
    /// fatal configuration error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            ScanError::config(format!("cannot read keyword file {}: {e}", path.display()))
        })?;
        let text = String::from_utf8_lossy(&bytes);
        Self::compile(text.lines())
    }

    /// Find the first occurrence of any keyword in `text`.
    ///
    /// Returns the matched substring as it appears in the text.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }

    /// Whether any keyword occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
