use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level Naiad configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NaiadConfig {
    /// Gauge stations to analyze, in order.
    #[serde(default)]
    pub stations: Vec<StationToml>,

    /// Clip range settings.
    #[serde(default)]
    pub clip: ClipToml,

    /// Summary settings.
    #[serde(default)]
    pub summary: SummaryToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// One gauge station entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationToml {
    /// Display label used in reports (e.g. river name).
    pub name: String,
    /// Path to the USGS daily-values text export.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipToml {
    #[serde(default = "default_clip_start")]
    pub start: NaiveDate,
    #[serde(default = "default_clip_end")]
    pub end: NaiveDate,
}

impl Default for ClipToml {
    fn default() -> Self {
        Self {
            start: default_clip_start(),
            end: default_clip_end(),
        }
    }
}

fn default_clip_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1969, 10, 1).expect("valid literal date")
}
fn default_clip_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 9, 30).expect("valid literal date")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryToml {
    #[serde(default = "default_first_water_year")]
    pub first_water_year: i32,
    #[serde(default = "default_last_water_year")]
    pub last_water_year: i32,
    #[serde(default = "default_start_month")]
    pub start_month: u32,
}

impl Default for SummaryToml {
    fn default() -> Self {
        Self {
            first_water_year: default_first_water_year(),
            last_water_year: default_last_water_year(),
            start_month: default_start_month(),
        }
    }
}

fn default_first_water_year() -> i32 {
    1970
}
fn default_last_water_year() -> i32 {
    2019
}
fn default_start_month() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_annual_csv")]
    pub annual_csv: String,
    #[serde(default = "default_monthly_csv")]
    pub monthly_csv: String,
    #[serde(default = "default_annual_averages")]
    pub annual_averages: String,
    #[serde(default = "default_monthly_averages")]
    pub monthly_averages: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            annual_csv: default_annual_csv(),
            monthly_csv: default_monthly_csv(),
            annual_averages: default_annual_averages(),
            monthly_averages: default_monthly_averages(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_annual_csv() -> String {
    "Annual_Metrics.csv".to_string()
}
fn default_monthly_csv() -> String {
    "Monthly_Metrics.csv".to_string()
}
fn default_annual_averages() -> String {
    "Average_Annual_Metrics.txt".to_string()
}
fn default_monthly_averages() -> String {
    "Average_Monthly_Metrics.txt".to_string()
}
