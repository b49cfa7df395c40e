//! Water year labeling and window bounds.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Computes the water year for a given calendar year and month.
///
/// A water year is defined by its `start_month`. All months from `start_month`
/// onward belong to the *next* calendar year's water year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` or `start_month` is
/// outside 1..=12.
///
/// # Examples
///
/// ```ignore
/// // October-start water year (standard US hydrological convention):
/// assert_eq!(water_year(2000, 10, 10).unwrap(), 2001); // Oct 2000 -> WY 2001
/// assert_eq!(water_year(2001, 9, 10).unwrap(), 2001);  // Sep 2001 -> WY 2001
///
/// // Calendar year (start_month = 1):
/// assert_eq!(water_year(2000, 6, 1).unwrap(), 2000);
/// ```
pub fn water_year(year: i32, month: u32, start_month: u32) -> Result<i32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if !(1..=12).contains(&start_month) {
        return Err(CalendarError::InvalidMonth { month: start_month });
    }
    if start_month == 1 {
        return Ok(year);
    }
    if month >= start_month {
        Ok(year + 1)
    } else {
        Ok(year)
    }
}

/// Returns the first and last day (both inclusive) of a labeled water year.
///
/// For the October convention, water year `Y` spans `Y-1`-10-01 through
/// `Y`-09-30. With `start_month == 1` the window is the calendar year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside
/// 1..=12, or [`CalendarError::YearOutOfRange`] if the window cannot be
/// represented as `NaiveDate` values.
pub fn water_year_bounds(
    water_year: i32,
    start_month: u32,
) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    if !(1..=12).contains(&start_month) {
        return Err(CalendarError::InvalidMonth { month: start_month });
    }
    let start_year = if start_month == 1 {
        water_year
    } else {
        water_year - 1
    };
    let out_of_range = CalendarError::YearOutOfRange { water_year };
    let start =
        NaiveDate::from_ymd_opt(start_year, start_month, 1).ok_or(out_of_range.clone())?;
    let end = NaiveDate::from_ymd_opt(start_year + 1, start_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or(out_of_range)?;
    Ok((start, end))
}
