//! Per-water-year summary statistics.

use naiad_calendar::water_year_bounds;
use naiad_series::DischargeSeries;

use crate::config::SummaryConfig;
use crate::error::SummaryError;
use crate::table::AnnualRow;

/// Extract the discharge values belonging to one water year.
fn extract_water_year(discharge: &[f64], water_years: &[i32], target: i32) -> Vec<f64> {
    discharge
        .iter()
        .zip(water_years.iter())
        .filter(|&(_, wy)| *wy == target)
        .map(|(&q, _)| q)
        .collect()
}

/// Computes descriptive statistics for every water year in the configured
/// range, one [`AnnualRow`] per year regardless of data density.
///
/// Water years with no observations produce NaN statistics (exceedance
/// count 0), never an error. Rows are indexed by the water-year label and
/// its start date (Oct 1 of the preceding calendar year under the standard
/// convention).
///
/// # Errors
///
/// Returns [`SummaryError::InvalidRange`] if the configured range is
/// reversed, or [`SummaryError::Calendar`] if a window cannot be
/// represented as dates.
pub fn water_year_statistics(
    series: &DischargeSeries,
    config: &SummaryConfig,
) -> Result<Vec<AnnualRow>, SummaryError> {
    let first = config.first_water_year();
    let last = config.last_water_year();
    if first > last {
        return Err(SummaryError::InvalidRange { first, last });
    }

    let site_no = series.site_no().to_string();
    let mut rows = Vec::with_capacity((last - first + 1) as usize);
    for wy in first..=last {
        let (start_date, _) = water_year_bounds(wy, series.start_month())?;
        let window = extract_water_year(series.discharge(), series.water_years(), wy);
        let q = naiad_stats::finite_values(&window);
        let mut sorted = q.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        rows.push(AnnualRow {
            water_year: wy,
            start_date,
            site_no: site_no.clone(),
            mean_flow: naiad_stats::mean(&q),
            peak_flow: naiad_stats::maximum(&q),
            median: naiad_stats::median(&sorted),
            coeff_var: naiad_stats::coeff_var(&q),
            skew: naiad_stats::skewness(&q),
            tqmean: naiad_stats::tqmean(&q),
            rb_index: naiad_stats::rb_index(&q),
            seven_day_low: naiad_stats::seven_day_low(&q),
            exceed_3x_median: naiad_stats::exceed_3x_median(&q) as f64,
        });
    }
    Ok(rows)
}
