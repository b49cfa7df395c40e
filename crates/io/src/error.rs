//! Error types for naiad-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the naiad-io crate.
///
/// This enum covers plain I/O failures, malformed rows in USGS daily-value
/// exports, and CSV serialization problems in the report writers.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a data row in a USGS export cannot be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number within the input file.
        line: usize,
        /// Description of the parsing issue.
        reason: String,
    },

    /// Wraps an error originating from the CSV writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
