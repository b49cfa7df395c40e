//! Column-wise average reductions over the summary tables.

use chrono::Datelike;

use crate::table::{AnnualAverages, AnnualRow, MonthlyAverage, MonthlyRow};

/// Mean of the finite values in the iterator; NaN if there are none.
fn nan_mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        if v.is_finite() {
            sum += v;
            n += 1;
        }
    }
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

/// Collapses the annual table into one column-wise average row.
///
/// NaN entries (empty water years) are skipped per column, matching
/// null-skipping mean semantics.
pub fn annual_averages(rows: &[AnnualRow]) -> AnnualAverages {
    AnnualAverages {
        site_no: rows.first().map(|r| r.site_no.clone()).unwrap_or_default(),
        mean_flow: nan_mean(rows.iter().map(|r| r.mean_flow)),
        peak_flow: nan_mean(rows.iter().map(|r| r.peak_flow)),
        median: nan_mean(rows.iter().map(|r| r.median)),
        coeff_var: nan_mean(rows.iter().map(|r| r.coeff_var)),
        skew: nan_mean(rows.iter().map(|r| r.skew)),
        tqmean: nan_mean(rows.iter().map(|r| r.tqmean)),
        rb_index: nan_mean(rows.iter().map(|r| r.rb_index)),
        seven_day_low: nan_mean(rows.iter().map(|r| r.seven_day_low)),
        exceed_3x_median: nan_mean(rows.iter().map(|r| r.exceed_3x_median)),
    }
}

/// Groups monthly rows by calendar month and averages each column within
/// the group.
///
/// Always returns exactly 12 rows ordered by month number; a month with no
/// rows yields NaN statistics.
pub fn monthly_averages(rows: &[MonthlyRow]) -> Vec<MonthlyAverage> {
    (1..=12)
        .map(|month| {
            let group = rows.iter().filter(move |r| r.month_start.month() == month);
            MonthlyAverage {
                month,
                mean_flow: nan_mean(group.clone().map(|r| r.mean_flow)),
                coeff_var: nan_mean(group.clone().map(|r| r.coeff_var)),
                tqmean: nan_mean(group.clone().map(|r| r.tqmean)),
                rb_index: nan_mean(group.map(|r| r.rb_index)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn annual_row(wy: i32, base: f64) -> AnnualRow {
        AnnualRow {
            water_year: wy,
            start_date: ymd(wy - 1, 10, 1),
            site_no: "03335000".to_string(),
            mean_flow: base,
            peak_flow: base * 10.0,
            median: base * 0.9,
            coeff_var: 50.0,
            skew: 1.0,
            tqmean: 0.4,
            rb_index: 0.2,
            seven_day_low: base * 0.5,
            exceed_3x_median: 3.0,
        }
    }

    fn monthly_row(y: i32, m: u32, mean_flow: f64) -> MonthlyRow {
        MonthlyRow {
            month_start: ymd(y, m, 1),
            site_no: "03335000".to_string(),
            mean_flow,
            coeff_var: 30.0,
            tqmean: 0.5,
            rb_index: 0.1,
        }
    }

    #[test]
    fn nan_mean_skips_nan() {
        assert_relative_eq!(
            nan_mean([1.0, f64::NAN, 3.0]),
            2.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn nan_mean_all_nan_is_nan() {
        assert!(nan_mean([f64::NAN, f64::NAN]).is_nan());
        assert!(nan_mean(std::iter::empty()).is_nan());
    }

    #[test]
    fn single_row_average_is_that_row() {
        let row = annual_row(2000, 120.0);
        let avg = annual_averages(std::slice::from_ref(&row));
        assert_eq!(avg.site_no, row.site_no);
        assert_relative_eq!(avg.mean_flow, row.mean_flow, epsilon = 1e-10);
        assert_relative_eq!(avg.peak_flow, row.peak_flow, epsilon = 1e-10);
        assert_relative_eq!(avg.median, row.median, epsilon = 1e-10);
        assert_relative_eq!(avg.coeff_var, row.coeff_var, epsilon = 1e-10);
        assert_relative_eq!(avg.skew, row.skew, epsilon = 1e-10);
        assert_relative_eq!(avg.tqmean, row.tqmean, epsilon = 1e-10);
        assert_relative_eq!(avg.rb_index, row.rb_index, epsilon = 1e-10);
        assert_relative_eq!(avg.seven_day_low, row.seven_day_low, epsilon = 1e-10);
        assert_relative_eq!(avg.exceed_3x_median, row.exceed_3x_median, epsilon = 1e-10);
    }

    #[test]
    fn annual_average_skips_nan_years() {
        let mut rows = vec![annual_row(2000, 100.0), annual_row(2001, 200.0)];
        rows[1].mean_flow = f64::NAN;
        let avg = annual_averages(&rows);
        // mean_flow averages the single finite year; peak averages both.
        assert_relative_eq!(avg.mean_flow, 100.0, epsilon = 1e-10);
        assert_relative_eq!(avg.peak_flow, 1500.0, epsilon = 1e-10);
    }

    #[test]
    fn annual_average_of_empty_table() {
        let avg = annual_averages(&[]);
        assert_eq!(avg.site_no, "");
        assert!(avg.mean_flow.is_nan());
    }

    #[test]
    fn monthly_average_groups_across_years() {
        let rows = vec![
            monthly_row(2000, 1, 10.0),
            monthly_row(2001, 1, 30.0),
            monthly_row(2000, 6, 5.0),
        ];
        let averages = monthly_averages(&rows);
        assert_eq!(averages.len(), 12);
        assert_relative_eq!(averages[0].mean_flow, 20.0, epsilon = 1e-10);
        assert_relative_eq!(averages[5].mean_flow, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn monthly_average_rows_ordered_by_month() {
        let averages = monthly_averages(&[]);
        assert_eq!(averages.len(), 12);
        for (i, avg) in averages.iter().enumerate() {
            assert_eq!(avg.month, i as u32 + 1);
            assert!(avg.mean_flow.is_nan());
        }
    }
}
