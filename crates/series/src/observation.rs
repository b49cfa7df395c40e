//! Single daily discharge observation.

use chrono::NaiveDate;

/// One daily discharge record as produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Reporting agency code (e.g. "USGS").
    pub agency: String,
    /// Gauge site number. Kept as text: USGS ids carry leading zeros.
    pub site_no: String,
    /// Mean daily discharge in cfs. `None` when flagged as no-data.
    pub discharge: Option<f64>,
    /// Data qualification flag (e.g. "A", "A:e").
    pub quality: Option<String>,
}
