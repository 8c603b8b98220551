//! Primary series loading.
//!
//! Reads the configured measurement and timestamp variables from an
//! [`ArraySource`], decodes the timestamps according to the configured
//! encoding, and produces a two-column DataFrame in source storage order:
//! `time` (millisecond datetimes) and one value column named after the
//! series label.

use chrono::{DateTime, NaiveDate};
use polars::prelude::*;
use std::path::Path;

use crate::config::{PrimarySeriesConfig, TimeEncoding};
use crate::error::{DashboardError, Result};
use crate::io::source::ArraySource;
use crate::time;

/// Magnitude at and above which a sample is the netCDF float fill value.
const FILL_THRESHOLD: f64 = 9.9e36;

/// Open the array source backing a data file.
///
/// With the `netcdf-files` feature this opens the file through the NetCDF
/// library; without it, selecting a file reports a data access error so the
/// rest of the dashboard keeps working.
pub fn open_source(path: &Path) -> Result<Box<dyn ArraySource>> {
    #[cfg(feature = "netcdf-files")]
    {
        Ok(Box::new(crate::io::netcdf_source::NetcdfSource::open(
            path,
        )?))
    }
    #[cfg(not(feature = "netcdf-files"))]
    {
        Err(DashboardError::access(format!(
            "cannot open {}: built without the 'netcdf-files' feature",
            path.display()
        )))
    }
}

/// Load the primary measurement series from an array source.
///
/// Timestamps are decoded per `profile.time_encoding`; day-serial values
/// carry no time-of-day component and land on midnight. Non-finite samples
/// and netCDF fill values become missing, not errors.
pub fn load_primary_series(
    source: &dyn ArraySource,
    profile: &PrimarySeriesConfig,
) -> Result<DataFrame> {
    let raw_times = source.variable(&profile.time_variable)?;
    let raw_values = source.variable(&profile.value_variable)?;

    if raw_times.len() != raw_values.len() {
        return Err(DashboardError::access(format!(
            "variables '{}' and '{}' have different lengths ({} vs {})",
            profile.time_variable,
            profile.value_variable,
            raw_times.len(),
            raw_values.len()
        )));
    }

    let mut timestamps = Vec::with_capacity(raw_times.len());
    let mut values: Vec<Option<f64>> = Vec::with_capacity(raw_values.len());

    for (&t, &v) in raw_times.iter().zip(raw_values.iter()) {
        let decoded = match profile.time_encoding {
            TimeEncoding::EpochSeconds => time::decode_epoch_seconds(t),
            TimeEncoding::DaySerial => {
                time::decode_day_serial(t).and_then(|d| d.and_hms_opt(0, 0, 0))
            }
        };
        let Some(ts) = decoded else {
            return Err(DashboardError::access(format!(
                "undecodable timestamp {t} in variable '{}'",
                profile.time_variable
            )));
        };
        timestamps.push(ts);
        values.push(clean_sample(v));
    }

    let time_col = time::datetime_series("time", &timestamps).into_column();
    let value_col = Series::new(profile.label.as_str().into(), values).into_column();
    let df = DataFrame::new(vec![time_col, value_col])?;

    tracing::debug!(
        rows = df.height(),
        series = %profile.label,
        "loaded primary series"
    );
    Ok(df)
}

fn clean_sample(value: f64) -> Option<f64> {
    if value.is_finite() && value.abs() < FILL_THRESHOLD {
        Some(value)
    } else {
        None
    }
}

/// First and last calendar day covered by a frame's time index column.
///
/// Works for both the raw `Datetime` index and the resampled `Date` index.
/// An empty frame has no bounds.
pub fn series_day_bounds(df: &DataFrame, index_col: &str) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let col = df.column(index_col)?;
    let dtype = col.dtype().clone();
    let physical = col.cast(&DataType::Int64)?;
    let ca = physical.i64()?;

    let (Some(lo), Some(hi)) = (ca.min(), ca.max()) else {
        return Ok(None);
    };

    let to_day = |raw: i64| -> Option<NaiveDate> {
        match &dtype {
            DataType::Date => Some(time::date_from_days(raw as i32)),
            DataType::Datetime(tu, _) => {
                let millis = match tu {
                    TimeUnit::Milliseconds => raw,
                    TimeUnit::Microseconds => raw / 1_000,
                    TimeUnit::Nanoseconds => raw / 1_000_000,
                };
                DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
            }
            _ => None,
        }
    };

    match (to_day(lo), to_day(hi)) {
        (Some(first), Some(last)) => Ok(Some((first, last))),
        _ => Err(PolarsError::ComputeError(
            format!("column '{index_col}' is not a time index").into(),
        )
        .into()),
    }
}
