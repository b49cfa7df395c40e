//! Date-indexed daily discharge series.

use chrono::{Datelike, NaiveDate};
use naiad_calendar::water_year;

use crate::error::SeriesError;
use crate::observation::Observation;

/// A cleaned, date-indexed daily discharge series for a single gauge site.
///
/// Holds parallel vectors for the observation fields plus pre-computed
/// calendar metadata (month and water year of each step). Missing discharge
/// values are stored as NaN so they flow through arithmetic untouched.
#[derive(Debug, Clone)]
pub struct DischargeSeries {
    /// Gauge site number shared by every observation.
    site_no: String,
    /// Reporting agency code.
    agency: String,
    /// Water-year start month the calendar metadata was computed with.
    start_month: u32,
    /// Date of each time step, strictly increasing.
    dates: Vec<NaiveDate>,
    /// Discharge of each time step; NaN marks a missing value.
    discharge: Vec<f64>,
    /// Qualification flag of each time step.
    quality: Vec<Option<String>>,
    /// Month of each time step (1..=12).
    months: Vec<u32>,
    /// Water year of each time step.
    water_years: Vec<i32>,
}

impl DischargeSeries {
    /// Builds a series from parsed observations.
    ///
    /// This is the cleaning step: observations with negative discharge are
    /// removed outright, and no-data observations are kept with their
    /// discharge stored as NaN. An empty batch yields an empty series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::OutOfOrder`] if the retained dates are not
    /// strictly increasing, [`SeriesError::SiteMismatch`] if the batch mixes
    /// site numbers, or [`SeriesError::Calendar`] if `start_month` is
    /// invalid.
    pub fn from_records(
        records: Vec<Observation>,
        start_month: u32,
    ) -> Result<Self, SeriesError> {
        let n = records.len();
        let mut site_no = String::new();
        let mut agency = String::new();
        let mut dates = Vec::with_capacity(n);
        let mut discharge = Vec::with_capacity(n);
        let mut quality = Vec::with_capacity(n);
        let mut months = Vec::with_capacity(n);
        let mut water_years = Vec::with_capacity(n);

        for (index, record) in records.into_iter().enumerate() {
            if let Some(q) = record.discharge {
                if q < 0.0 {
                    continue;
                }
            }
            if dates.is_empty() {
                site_no = record.site_no.clone();
                agency = record.agency.clone();
            } else if record.site_no != site_no {
                return Err(SeriesError::SiteMismatch {
                    expected: site_no,
                    found: record.site_no,
                    index,
                });
            }
            if let Some(&prev) = dates.last() {
                if record.date <= prev {
                    return Err(SeriesError::OutOfOrder { index });
                }
            }
            months.push(record.date.month());
            water_years.push(water_year(
                record.date.year(),
                record.date.month(),
                start_month,
            )?);
            dates.push(record.date);
            discharge.push(record.discharge.unwrap_or(f64::NAN));
            quality.push(record.quality);
        }

        Ok(Self {
            site_no,
            agency,
            start_month,
            dates,
            discharge,
            quality,
            months,
            water_years,
        })
    }

    /// Restricts the series to observations dated within `[start, end]`,
    /// both endpoints inclusive.
    ///
    /// Produces a new owned series; ranges outside the data simply yield an
    /// empty one.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> DischargeSeries {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (lo, lo) };
        Self {
            site_no: self.site_no.clone(),
            agency: self.agency.clone(),
            start_month: self.start_month,
            dates: self.dates[lo..hi].to_vec(),
            discharge: self.discharge[lo..hi].to_vec(),
            quality: self.quality[lo..hi].to_vec(),
            months: self.months[lo..hi].to_vec(),
            water_years: self.water_years[lo..hi].to_vec(),
        }
    }

    /// Returns the number of observations with a missing discharge value.
    pub fn missing_values(&self) -> usize {
        self.discharge.iter().filter(|q| !q.is_finite()).count()
    }

    /// Returns the gauge site number.
    pub fn site_no(&self) -> &str {
        &self.site_no
    }

    /// Returns the reporting agency code.
    pub fn agency(&self) -> &str {
        &self.agency
    }

    /// Returns the water-year start month the series was built with.
    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns the date sequence.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the discharge values; NaN marks a missing value.
    pub fn discharge(&self) -> &[f64] {
        &self.discharge
    }

    /// Returns the qualification flags.
    pub fn quality(&self) -> &[Option<String>] {
        &self.quality
    }

    /// Returns the month of each time step.
    pub fn months(&self) -> &[u32] {
        &self.months
    }

    /// Returns the water year of each time step.
    pub fn water_years(&self) -> &[i32] {
        &self.water_years
    }

    /// Returns the first observation date, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Returns the last observation date, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the series contains no observations.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
