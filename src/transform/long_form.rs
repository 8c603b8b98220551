//! Wide-to-long reshaping for the chart.

use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use serde::Serialize;

use crate::time::date_from_days;

/// One plottable observation: a (timestamp, series, value) triple.
///
/// Missing values never appear here; a row exists only where a series has a
/// present value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongFormRow {
    pub timestamp: NaiveDateTime,
    pub series: String,
    pub value: f64,
}

/// Melt a wide table (`index_col` plus one column per series) into long-form
/// rows, row-major: all visible series of the first timestamp, then the
/// next.
///
/// Series whose name is not in `visible` are dropped entirely, and rows with
/// a missing value are never emitted. Works over both the `date` index of
/// the joined table and the raw `time` index of the sub-daily variant.
pub fn to_long_form(
    table: &DataFrame,
    index_col: &str,
    visible: &[String],
) -> PolarsResult<Vec<LongFormRow>> {
    let timestamps = index_timestamps(table, index_col)?;

    // Materialize the visible series columns once, in table column order.
    let mut series_cols: Vec<(String, Vec<Option<f64>>)> = Vec::new();
    for column in table.get_columns() {
        let name = column.name().as_str();
        if name == index_col || !visible.iter().any(|v| v == name) {
            continue;
        }
        let values = column.cast(&DataType::Float64)?.f64()?.to_vec();
        series_cols.push((name.to_string(), values));
    }

    let mut rows = Vec::new();
    for (row_idx, timestamp) in timestamps.iter().enumerate() {
        let Some(timestamp) = timestamp else { continue };
        for (name, values) in &series_cols {
            let Some(value) = values[row_idx] else { continue };
            if value.is_nan() {
                continue;
            }
            rows.push(LongFormRow {
                timestamp: *timestamp,
                series: name.clone(),
                value,
            });
        }
    }
    Ok(rows)
}

/// Decode the index column into per-row timestamps.
fn index_timestamps(
    table: &DataFrame,
    index_col: &str,
) -> PolarsResult<Vec<Option<NaiveDateTime>>> {
    let column = table.column(index_col)?;
    let dtype = column.dtype().clone();
    let physical = column.cast(&DataType::Int64)?;
    let raw = physical.i64()?.to_vec();

    let decoded = raw
        .into_iter()
        .map(|value| {
            let value = value?;
            match &dtype {
                DataType::Date => date_from_days(value as i32).and_hms_opt(0, 0, 0),
                DataType::Datetime(tu, _) => {
                    let millis = match tu {
                        TimeUnit::Milliseconds => value,
                        TimeUnit::Microseconds => value / 1_000,
                        TimeUnit::Nanoseconds => value / 1_000_000,
                    };
                    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
                }
                _ => None,
            }
        })
        .collect::<Vec<_>>();

    if decoded.iter().any(|d| d.is_none()) && table.height() > 0 && column.null_count() == 0 {
        return Err(PolarsError::ComputeError(
            format!("column '{index_col}' is not a time index").into(),
        ));
    }
    Ok(decoded)
}
