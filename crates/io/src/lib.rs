//! File I/O for naiad: USGS daily-discharge text parsing and CSV/TSV report
//! writing.

mod error;
mod reader;
mod report;

pub use error::IoError;
pub use reader::read_usgs_daily;
pub use report::{
    write_annual_averages, write_annual_csv, write_monthly_averages, write_monthly_csv,
};
