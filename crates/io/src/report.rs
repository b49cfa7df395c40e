//! CSV/TSV report writers for the summary tables.
//!
//! Writers append so that multi-station runs share one report file; the
//! header row is emitted only when the file is new or empty. NaN statistics
//! serialize as empty fields.

use std::fs::OpenOptions;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::IoError;
use naiad_summary::{AnnualAverages, AnnualRow, MonthlyAverage, MonthlyRow};

/// Maps NaN/infinite statistics to `None` so they serialize as empty fields.
fn field(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

fn open_writer(
    path: &Path,
    delimiter: u8,
) -> Result<csv::Writer<std::fs::File>, IoError> {
    let fresh = !path.exists()
        || std::fs::metadata(path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(fresh)
        .from_writer(file))
}

#[derive(Debug, Serialize)]
struct AnnualRecord<'a> {
    #[serde(rename = "Station")]
    station: &'a str,
    #[serde(rename = "Water Year")]
    water_year: i32,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "site_no")]
    site_no: &'a str,
    #[serde(rename = "Mean Flow")]
    mean_flow: Option<f64>,
    #[serde(rename = "Peak Flow")]
    peak_flow: Option<f64>,
    #[serde(rename = "Median")]
    median: Option<f64>,
    #[serde(rename = "Coeff Var")]
    coeff_var: Option<f64>,
    #[serde(rename = "Skew")]
    skew: Option<f64>,
    #[serde(rename = "TQmean")]
    tqmean: Option<f64>,
    #[serde(rename = "R-B Index")]
    rb_index: Option<f64>,
    #[serde(rename = "7Q")]
    seven_day_low: Option<f64>,
    #[serde(rename = "3xMedian")]
    exceed_3x_median: Option<f64>,
}

#[derive(Debug, Serialize)]
struct MonthlyRecord<'a> {
    #[serde(rename = "Station")]
    station: &'a str,
    #[serde(rename = "Month")]
    month: NaiveDate,
    #[serde(rename = "site_no")]
    site_no: &'a str,
    #[serde(rename = "Mean Flow")]
    mean_flow: Option<f64>,
    #[serde(rename = "Coeff Var")]
    coeff_var: Option<f64>,
    #[serde(rename = "TQmean")]
    tqmean: Option<f64>,
    #[serde(rename = "R-B Index")]
    rb_index: Option<f64>,
}

#[derive(Debug, Serialize)]
struct AverageRecord<'a> {
    #[serde(rename = "Station")]
    station: &'a str,
    #[serde(rename = "Metric")]
    metric: &'a str,
    #[serde(rename = "Value")]
    value: Option<f64>,
}

#[derive(Debug, Serialize)]
struct MonthlyAverageRecord<'a> {
    #[serde(rename = "Station")]
    station: &'a str,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Mean Flow")]
    mean_flow: Option<f64>,
    #[serde(rename = "Coeff Var")]
    coeff_var: Option<f64>,
    #[serde(rename = "TQmean")]
    tqmean: Option<f64>,
    #[serde(rename = "R-B Index")]
    rb_index: Option<f64>,
}

/// Appends the annual metrics table to a comma-separated report.
pub fn write_annual_csv(
    path: &Path,
    station: &str,
    rows: &[AnnualRow],
) -> Result<(), IoError> {
    let mut writer = open_writer(path, b',')?;
    for row in rows {
        writer.serialize(AnnualRecord {
            station,
            water_year: row.water_year,
            date: row.start_date,
            site_no: &row.site_no,
            mean_flow: field(row.mean_flow),
            peak_flow: field(row.peak_flow),
            median: field(row.median),
            coeff_var: field(row.coeff_var),
            skew: field(row.skew),
            tqmean: field(row.tqmean),
            rb_index: field(row.rb_index),
            seven_day_low: field(row.seven_day_low),
            exceed_3x_median: field(row.exceed_3x_median),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends the monthly metrics table to a comma-separated report.
pub fn write_monthly_csv(
    path: &Path,
    station: &str,
    rows: &[MonthlyRow],
) -> Result<(), IoError> {
    let mut writer = open_writer(path, b',')?;
    for row in rows {
        writer.serialize(MonthlyRecord {
            station,
            month: row.month_start,
            site_no: &row.site_no,
            mean_flow: field(row.mean_flow),
            coeff_var: field(row.coeff_var),
            tqmean: field(row.tqmean),
            rb_index: field(row.rb_index),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends the annual averages to a tab-separated report, one metric per row.
pub fn write_annual_averages(
    path: &Path,
    station: &str,
    averages: &AnnualAverages,
) -> Result<(), IoError> {
    let metrics = [
        ("Mean Flow", averages.mean_flow),
        ("Peak Flow", averages.peak_flow),
        ("Median", averages.median),
        ("Coeff Var", averages.coeff_var),
        ("Skew", averages.skew),
        ("TQmean", averages.tqmean),
        ("R-B Index", averages.rb_index),
        ("7Q", averages.seven_day_low),
        ("3xMedian", averages.exceed_3x_median),
    ];
    let mut writer = open_writer(path, b'\t')?;
    for (metric, value) in metrics {
        writer.serialize(AverageRecord {
            station,
            metric,
            value: field(value),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends the twelve monthly averages to a tab-separated report.
pub fn write_monthly_averages(
    path: &Path,
    station: &str,
    rows: &[MonthlyAverage],
) -> Result<(), IoError> {
    let mut writer = open_writer(path, b'\t')?;
    for row in rows {
        writer.serialize(MonthlyAverageRecord {
            station,
            month: row.month,
            mean_flow: field(row.mean_flow),
            coeff_var: field(row.coeff_var),
            tqmean: field(row.tqmean),
            rb_index: field(row.rb_index),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual_row(wy: i32) -> AnnualRow {
        AnnualRow {
            water_year: wy,
            start_date: NaiveDate::from_ymd_opt(wy - 1, 10, 1).unwrap(),
            site_no: "03335000".to_string(),
            mean_flow: 228.5,
            peak_flow: 4950.0,
            median: 120.0,
            coeff_var: 143.2,
            skew: 4.1,
            tqmean: 0.33,
            rb_index: 0.25,
            seven_day_low: 15.5,
            exceed_3x_median: 28.0,
        }
    }

    #[test]
    fn annual_csv_has_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annual.csv");
        write_annual_csv(&path, "Wildcat", &[annual_row(1970)]).unwrap();
        write_annual_csv(&path, "Tippe", &[annual_row(1970)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Station,Water Year,Date,site_no,Mean Flow"));
        assert!(lines[1].starts_with("Wildcat,1970,1969-10-01,03335000,228.5"));
        assert!(lines[2].starts_with("Tippe,1970,"));
    }

    #[test]
    fn nan_serializes_as_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annual.csv");
        let mut row = annual_row(1970);
        row.mean_flow = f64::NAN;
        write_annual_csv(&path, "Wildcat", &[row]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let data_line = content.lines().nth(1).unwrap();
        assert!(data_line.contains("03335000,,4950"));
    }

    #[test]
    fn monthly_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monthly.csv");
        let rows = vec![MonthlyRow {
            month_start: NaiveDate::from_ymd_opt(1969, 10, 1).unwrap(),
            site_no: "03335000".to_string(),
            mean_flow: 64.3,
            coeff_var: 81.0,
            tqmean: 0.4,
            rb_index: 0.1,
        }];
        write_monthly_csv(&path, "Wildcat", &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Station,Month,site_no,Mean Flow,Coeff Var,TQmean,R-B Index"));
        assert!(content.contains("Wildcat,1969-10-01,03335000,64.3,81.0,0.4,0.1"));
    }

    #[test]
    fn annual_averages_one_metric_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("averages.txt");
        let averages = AnnualAverages {
            site_no: "03335000".to_string(),
            mean_flow: 228.5,
            peak_flow: 4950.0,
            median: 120.0,
            coeff_var: 143.2,
            skew: 4.1,
            tqmean: 0.33,
            rb_index: 0.25,
            seven_day_low: 15.5,
            exceed_3x_median: 28.0,
        };
        write_annual_averages(&path, "Wildcat", &averages).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10); // header + 9 metrics
        assert_eq!(lines[0], "Station\tMetric\tValue");
        assert_eq!(lines[1], "Wildcat\tMean Flow\t228.5");
        assert_eq!(lines[9], "Wildcat\t3xMedian\t28.0");
    }

    #[test]
    fn monthly_averages_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monthly_averages.txt");
        let rows: Vec<MonthlyAverage> = (1..=12)
            .map(|month| MonthlyAverage {
                month,
                mean_flow: month as f64 * 10.0,
                coeff_var: 50.0,
                tqmean: 0.5,
                rb_index: 0.2,
            })
            .collect();
        write_monthly_averages(&path, "Tippe", &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Station\tMonth\tMean Flow\tCoeff Var\tTQmean\tR-B Index");
        assert_eq!(lines[1], "Tippe\t1\t10.0\t50.0\t0.5\t0.2");
    }
}
