//! Error types for dragnet.
//!
//! Two tiers of failure exist and must never be confused:
//!
//! - [`ScanError`] is the library-level error. Its `Config` variant is fatal:
//!   the caller is expected to report it and terminate before any scanning
//!   starts (empty keyword list, conflicting mode flags).
//! - [`ExtractionError`] describes a failure while opening, parsing, or
//!   decoding a single file. These are always recoverable: the match engine
//!   contains them per file and the scan continues.
use thiserror::Error;

/// Result type alias using `ScanError`.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Top-level error for scan operations.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl ScanError {
    /// Create a Config error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

/// Failure raised by a format-specific extractor for a single file.
///
/// The variants declare which conditions are expected: `Parse` covers
/// corrupt or unreadable document structure, `Unsupported` covers
/// containers an extractor refuses to open at all. `Io` carries real
/// filesystem errors unchanged.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported container: {0}")]
    Unsupported(String),
}

impl ExtractionError {
    /// Create a Parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Parse error with source.
    pub fn parse_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<calamine::Error> for ExtractionError {
    fn from(err: calamine::Error) -> Self {
        ExtractionError::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        ExtractionError::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<rusqlite::Error> for ExtractionError {
    fn from(err: rusqlite::Error) -> Self {
        ExtractionError::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractionError::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
