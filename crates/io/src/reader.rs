//! Reader for USGS daily-discharge text exports.

use std::path::Path;

use chrono::NaiveDate;
use naiad_series::Observation;

use crate::error::IoError;

/// USGS remark codes that mark a day as having no usable discharge value.
const NO_DATA_FLAGS: &[&str] = &["Eqp", "Ice", "Ssn"];

/// Reads a USGS daily-values text export into observation records.
///
/// The format is whitespace-delimited with `#`-prefixed comment lines, one
/// header row, one column-type row (`5s 15s 20d ...`), then data rows of
/// `agency_cd  site_no  datetime  discharge  qualifiers`. No-data remark
/// codes in the discharge column become missing values; negative discharges
/// are passed through untouched for the series cleaner to drop.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, or
/// [`IoError::Parse`] (with the 1-based line number) for rows with missing
/// columns, unparseable dates, or unparseable discharge values.
pub fn read_usgs_daily(path: &Path) -> Result<Vec<Observation>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_usgs_daily(&content)
}

/// Parses the body of a USGS daily-values export.
fn parse_usgs_daily(content: &str) -> Result<Vec<Observation>, IoError> {
    let mut records = Vec::new();
    let mut preamble_rows = 0; // header row + column-type row

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if preamble_rows < 2 {
            preamble_rows += 1;
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(IoError::Parse {
                line: line_no,
                reason: format!("expected at least 3 columns, got {}", fields.len()),
            });
        }

        let date = NaiveDate::parse_from_str(fields[2], "%Y-%m-%d").map_err(|e| {
            IoError::Parse {
                line: line_no,
                reason: format!("invalid date '{}': {e}", fields[2]),
            }
        })?;

        let discharge = match fields.get(3) {
            None => None,
            Some(&raw) if NO_DATA_FLAGS.contains(&raw) => None,
            Some(&raw) => Some(raw.parse::<f64>().map_err(|_| IoError::Parse {
                line: line_no,
                reason: format!("invalid discharge value '{raw}'"),
            })?),
        };

        let quality = if fields.len() > 4 {
            Some(fields[4..].join(" "))
        } else {
            None
        };

        records.push(Observation {
            date,
            agency: fields[0].to_string(),
            site_no: fields[1].to_string(),
            discharge,
            quality,
        });
    }

    Ok(records)
}
