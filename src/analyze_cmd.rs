//! Analyze command: compute streamflow metrics for each configured station.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, info_span};

use naiad_io::{
    read_usgs_daily, write_annual_averages, write_annual_csv, write_monthly_averages,
    write_monthly_csv,
};
use naiad_series::DischargeSeries;
use naiad_summary::{
    annual_averages, monthly_averages, monthly_statistics, water_year_statistics,
    AnnualAverages, SummaryConfig,
};

use crate::cli::AnalyzeArgs;
use crate::config::NaiadConfig;

/// Run the full analysis pipeline, once per configured station.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: NaiadConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    if config.stations.is_empty() {
        bail!("no stations configured: add at least one [[stations]] entry");
    }

    let out_dir = args.output_dir.unwrap_or_else(|| config.output.dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let annual_path = out_dir.join(&config.output.annual_csv);
    let monthly_path = out_dir.join(&config.output.monthly_csv);
    let annual_avg_path = out_dir.join(&config.output.annual_averages);
    let monthly_avg_path = out_dir.join(&config.output.monthly_averages);

    // 2. Start each run with fresh report files; writers append per station.
    for path in [
        &annual_path,
        &monthly_path,
        &annual_avg_path,
        &monthly_avg_path,
    ] {
        remove_if_present(path)?;
    }

    let summary_config = SummaryConfig::default().with_water_years(
        config.summary.first_water_year,
        config.summary.last_water_year,
    );

    // 3. Per-station pipeline, explicitly parameterized (no shared state).
    for station in &config.stations {
        let _station = info_span!("station", name = %station.name).entered();

        info!(path = %station.path.display(), "reading daily discharge data");
        let records = read_usgs_daily(&station.path)
            .with_context(|| format!("failed to read {}", station.path.display()))?;

        let series = DischargeSeries::from_records(records, config.summary.start_month)
            .with_context(|| format!("invalid record batch for station '{}'", station.name))?;
        info!(
            site_no = series.site_no(),
            n_obs = series.len(),
            missing = series.missing_values(),
            "raw series cleaned"
        );

        let clipped = series.clip(config.clip.start, config.clip.end);
        info!(
            start = %config.clip.start,
            end = %config.clip.end,
            n_obs = clipped.len(),
            missing = clipped.missing_values(),
            "series clipped"
        );

        let annual = water_year_statistics(&clipped, &summary_config)
            .with_context(|| format!("annual statistics failed for '{}'", station.name))?;
        let averages = annual_averages(&annual);

        let monthly = monthly_statistics(&clipped);
        let monthly_avg = monthly_averages(&monthly);

        write_annual_csv(&annual_path, &station.name, &annual)
            .with_context(|| format!("failed to write {}", annual_path.display()))?;
        write_monthly_csv(&monthly_path, &station.name, &monthly)
            .with_context(|| format!("failed to write {}", monthly_path.display()))?;
        write_annual_averages(&annual_avg_path, &station.name, &averages)
            .with_context(|| format!("failed to write {}", annual_avg_path.display()))?;
        write_monthly_averages(&monthly_avg_path, &station.name, &monthly_avg)
            .with_context(|| format!("failed to write {}", monthly_avg_path.display()))?;

        print_station_summary(station.name.as_str(), &clipped, &averages, &summary_config);
    }

    info!(dir = %out_dir.display(), "reports written");
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("failed to remove stale report: {}", path.display()))?;
    }
    Ok(())
}

/// Console summary of one station's clipped series and annual averages.
fn print_station_summary(
    name: &str,
    series: &DischargeSeries,
    averages: &AnnualAverages,
    config: &SummaryConfig,
) {
    println!("{}", "=".repeat(60));
    println!("  {name} (site {})", series.site_no());
    println!("{}", "=".repeat(60));
    match (series.first_date(), series.last_date()) {
        (Some(first), Some(last)) => println!(
            "  period: {first} .. {last} ({} days, {} missing)",
            series.len(),
            series.missing_values()
        ),
        _ => println!("  period: no observations in clip range"),
    }
    println!(
        "  annual averages, water years {}..={}:",
        config.first_water_year(),
        config.last_water_year()
    );
    for (label, value) in [
        ("Mean Flow", averages.mean_flow),
        ("Peak Flow", averages.peak_flow),
        ("Median", averages.median),
        ("Coeff Var", averages.coeff_var),
        ("Skew", averages.skew),
        ("TQmean", averages.tqmean),
        ("R-B Index", averages.rb_index),
        ("7Q", averages.seven_day_low),
        ("3xMedian", averages.exceed_3x_median),
    ] {
        if value.is_finite() {
            println!("    {label:<10} {value:>12.3}");
        } else {
            println!("    {label:<10} {:>12}", "n/a");
        }
    }
    println!();
}
