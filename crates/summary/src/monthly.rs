//! Per-calendar-month summary statistics.

use naiad_calendar::{month_sequence, next_month_start};
use naiad_series::DischargeSeries;

use crate::table::MonthlyRow;

/// Computes descriptive statistics for every calendar month spanned by the
/// series, one [`MonthlyRow`] per month.
///
/// The span runs from the month of the first observation through the month
/// of the last one; months inside the span with no observations produce NaN
/// statistics. An empty series yields an empty table.
pub fn monthly_statistics(series: &DischargeSeries) -> Vec<MonthlyRow> {
    let (Some(first), Some(last)) = (series.first_date(), series.last_date()) else {
        return Vec::new();
    };

    let site_no = series.site_no().to_string();
    let dates = series.dates();
    let discharge = series.discharge();

    month_sequence(first, last)
        .into_iter()
        .map(|month_start| {
            let month_end = next_month_start(month_start);
            let lo = dates.partition_point(|d| *d < month_start);
            let hi = dates.partition_point(|d| *d < month_end);
            let q = naiad_stats::finite_values(&discharge[lo..hi]);

            MonthlyRow {
                month_start,
                site_no: site_no.clone(),
                mean_flow: naiad_stats::mean(&q),
                coeff_var: naiad_stats::coeff_var(&q),
                tqmean: naiad_stats::tqmean(&q),
                rb_index: naiad_stats::rb_index(&q),
            }
        })
        .collect()
}
