//! Month-start flooring and month sequence generation.

use chrono::{Datelike, NaiveDate};

/// Floors a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("day 1 is valid for every month")
}

/// Returns the first day of the month following `date`'s month.
///
/// December wraps to January 1 of the following year.
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("day 1 is valid for every month")
}

/// Generates the sequence of month starts covering `[start, end]`.
///
/// The first element is the month start of `start` and the last is the month
/// start of `end`, so partial boundary months are included. Returns an empty
/// vector when `start > end`.
///
/// # Example
///
/// ```ignore
/// let a = NaiveDate::from_ymd_opt(1969, 11, 15).unwrap();
/// let b = NaiveDate::from_ymd_opt(1970, 2, 3).unwrap();
/// // Nov 1969, Dec 1969, Jan 1970, Feb 1970
/// assert_eq!(month_sequence(a, b).len(), 4);
/// ```
pub fn month_sequence(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    if start > end {
        return months;
    }
    let last = month_start(end);
    let mut current = month_start(start);
    while current <= last {
        months.push(current);
        current = next_month_start(current);
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_start_mid_month() {
        assert_eq!(month_start(ymd(2000, 6, 15)), ymd(2000, 6, 1));
    }

    #[test]
    fn month_start_already_first() {
        assert_eq!(month_start(ymd(2000, 6, 1)), ymd(2000, 6, 1));
    }

    #[test]
    fn next_month_within_year() {
        assert_eq!(next_month_start(ymd(2000, 6, 15)), ymd(2000, 7, 1));
    }

    #[test]
    fn next_month_december_wraps() {
        assert_eq!(next_month_start(ymd(2000, 12, 31)), ymd(2001, 1, 1));
    }

    #[test]
    fn sequence_single_month() {
        let months = month_sequence(ymd(2000, 6, 10), ymd(2000, 6, 20));
        assert_eq!(months, vec![ymd(2000, 6, 1)]);
    }

    #[test]
    fn sequence_partial_boundary_months() {
        let months = month_sequence(ymd(1969, 11, 15), ymd(1970, 2, 3));
        assert_eq!(
            months,
            vec![
                ymd(1969, 11, 1),
                ymd(1969, 12, 1),
                ymd(1970, 1, 1),
                ymd(1970, 2, 1),
            ]
        );
    }

    #[test]
    fn sequence_empty_when_reversed() {
        assert!(month_sequence(ymd(2000, 2, 1), ymd(2000, 1, 1)).is_empty());
    }

    #[test]
    fn sequence_full_fifty_years() {
        let months = month_sequence(ymd(1969, 10, 1), ymd(2019, 9, 30));
        assert_eq!(months.len(), 600);
        assert_eq!(months[0], ymd(1969, 10, 1));
        assert_eq!(*months.last().unwrap(), ymd(2019, 9, 1));
    }

    #[test]
    fn sequence_same_day() {
        let months = month_sequence(ymd(2000, 3, 7), ymd(2000, 3, 7));
        assert_eq!(months, vec![ymd(2000, 3, 1)]);
    }
}
