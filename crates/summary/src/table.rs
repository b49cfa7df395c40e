//! Plain row structs for the summary tables.
//!
//! These are tabular value types with no formatting opinions; report
//! serialization lives in naiad-io. The exceedance count is stored as f64 so
//! that cross-year averaging and NaN propagation work uniformly.

use chrono::NaiveDate;

/// Descriptive statistics for one water year.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualRow {
    /// Water-year label (the calendar year the water year ends in).
    pub water_year: i32,
    /// First day of the water year.
    pub start_date: NaiveDate,
    /// Gauge site number.
    pub site_no: String,
    /// Mean daily flow.
    pub mean_flow: f64,
    /// Peak (maximum) daily flow.
    pub peak_flow: f64,
    /// Median daily flow.
    pub median: f64,
    /// Coefficient of variation, percent.
    pub coeff_var: f64,
    /// Sample skewness of daily flows.
    pub skew: f64,
    /// Fraction of days with flow above the annual mean.
    pub tqmean: f64,
    /// Richards-Baker flashiness index.
    pub rb_index: f64,
    /// Minimum 7-day rolling mean flow.
    pub seven_day_low: f64,
    /// Days with flow above 3x the annual median.
    pub exceed_3x_median: f64,
}

/// Descriptive statistics for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Gauge site number.
    pub site_no: String,
    /// Mean daily flow.
    pub mean_flow: f64,
    /// Coefficient of variation, percent.
    pub coeff_var: f64,
    /// Fraction of days with flow above the monthly mean.
    pub tqmean: f64,
    /// Richards-Baker flashiness index.
    pub rb_index: f64,
}

/// Column-wise averages over the annual table.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualAverages {
    /// Gauge site number.
    pub site_no: String,
    pub mean_flow: f64,
    pub peak_flow: f64,
    pub median: f64,
    pub coeff_var: f64,
    pub skew: f64,
    pub tqmean: f64,
    pub rb_index: f64,
    pub seven_day_low: f64,
    pub exceed_3x_median: f64,
}

/// Cross-year average of the monthly table for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAverage {
    /// Calendar month number (1..=12).
    pub month: u32,
    pub mean_flow: f64,
    pub coeff_var: f64,
    pub tqmean: f64,
    pub rb_index: f64,
}
