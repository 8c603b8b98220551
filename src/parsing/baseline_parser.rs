//! Baseline table parser.

use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;

use crate::error::{DashboardError, Result};
use crate::time;

/// Parse the baseline table from a file into `[date, <label>]`.
///
/// Fails with [`DashboardError::DataAccess`] when the file cannot be read
/// and with [`DashboardError::DataFormat`] when a row is malformed.
pub fn parse_baseline_file(path: &Path, label: &str) -> Result<DataFrame> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        DashboardError::access(format!("cannot read {}: {err}", path.display()))
    })?;
    parse_baseline_str(&text, label)
}

/// Parse the baseline table from text.
///
/// Comment lines (`#`) and blank lines are skipped. Each data row must carry
/// at least year, month and day integer columns; the value is the last
/// column. Values `<= 0` are sentinels and become missing.
pub fn parse_baseline_str(text: &str, label: &str) -> Result<DataFrame> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut values: Vec<Option<f64>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(DashboardError::format(format!(
                "line {line_no}: expected at least 4 columns, found {}",
                fields.len()
            )));
        }

        let year: i32 = parse_field(fields[0], line_no, "year")?;
        let month: u32 = parse_field(fields[1], line_no, "month")?;
        let day: u32 = parse_field(fields[2], line_no, "day")?;
        let value: f64 = parse_field(fields[fields.len() - 1], line_no, "value")?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DashboardError::format(format!(
                "line {line_no}: invalid date {year:04}-{month:02}-{day:02}"
            ))
        })?;

        dates.push(date);
        values.push(clean_value(value));
    }

    let date_col = time::date_series("date", &dates).into_column();
    let value_col = Series::new(label.into(), values).into_column();
    Ok(DataFrame::new(vec![date_col, value_col])?)
}

fn parse_field<T: std::str::FromStr>(field: &str, line_no: usize, name: &str) -> Result<T> {
    field.parse::<T>().map_err(|_| {
        DashboardError::format(format!("line {line_no}: unparsable {name} '{field}'"))
    })
}

fn clean_value(value: f64) -> Option<f64> {
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}
