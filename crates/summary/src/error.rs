//! Error types for the naiad-summary crate.

/// Error type for all fallible operations in the naiad-summary crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummaryError {
    /// Returned when the configured water-year range is reversed.
    #[error("invalid water-year range: {first}..={last}")]
    InvalidRange {
        /// First water year of the range.
        first: i32,
        /// Last water year of the range.
        last: i32,
    },

    /// Wraps an error originating from the naiad-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<naiad_calendar::CalendarError> for SummaryError {
    fn from(e: naiad_calendar::CalendarError) -> Self {
        SummaryError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_range() {
        let err = SummaryError::InvalidRange {
            first: 2019,
            last: 1970,
        };
        assert_eq!(err.to_string(), "invalid water-year range: 2019..=1970");
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = naiad_calendar::CalendarError::YearOutOfRange { water_year: 1970 };
        let err: SummaryError = cal_err.into();
        assert!(matches!(err, SummaryError::Calendar { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<SummaryError>();
    }
}
