//! Error types for the naiad-series crate.

/// Error type for all fallible operations in the naiad-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when observation dates are not strictly increasing.
    #[error("observation {index} is out of order: dates must be strictly increasing")]
    OutOfOrder {
        /// Index of the offending observation within the input batch.
        index: usize,
    },

    /// Returned when an observation carries a different site number than the
    /// first observation of the batch.
    #[error("observation {index} belongs to site '{found}', expected '{expected}'")]
    SiteMismatch {
        /// Site number of the first observation.
        expected: String,
        /// Site number actually found.
        found: String,
        /// Index of the offending observation within the input batch.
        index: usize,
    },

    /// Wraps an error originating from the naiad-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<naiad_calendar::CalendarError> for SeriesError {
    fn from(e: naiad_calendar::CalendarError) -> Self {
        SeriesError::Calendar {
            reason: e.to_string(),
        }
    }
}
