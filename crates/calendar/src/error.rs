//! Error types for the naiad-calendar crate.

/// Error type for all fallible operations in the naiad-calendar crate.
///
/// This enum covers validation failures for month numbers and for water
/// years whose window falls outside the representable date range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a water-year window cannot be represented as dates.
    #[error("water year {water_year} is out of the representable date range")]
    YearOutOfRange {
        /// The water year whose window could not be constructed.
        water_year: i32,
    },
}
