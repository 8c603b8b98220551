//! Inclusive date-range selection.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::time::{days_since_epoch, millis_at_midnight};

/// Keep rows of a day-indexed table whose `date` falls inside
/// `[start, end]`, inclusive on both bounds.
///
/// With `start`/`end` equal to the table's first/last day this is the
/// identity. An empty selection is a valid result, not an error.
pub fn filter_date_range(
    table: &DataFrame,
    start: NaiveDate,
    end: NaiveDate,
) -> PolarsResult<DataFrame> {
    let start = days_since_epoch(start);
    let end = days_since_epoch(end);

    table
        .clone()
        .lazy()
        .filter(
            col("date")
                .cast(DataType::Int32)
                .gt_eq(lit(start))
                .and(col("date").cast(DataType::Int32).lt_eq(lit(end))),
        )
        .collect()
}

/// Keep rows of a `time`-indexed (sub-daily) table whose timestamp falls on
/// a day inside `[start, end]`, inclusive: the whole end day is kept.
pub fn filter_time_range(
    table: &DataFrame,
    start: NaiveDate,
    end: NaiveDate,
) -> PolarsResult<DataFrame> {
    let start_ms = millis_at_midnight(start);
    let end_ms_exclusive = millis_at_midnight(end) + 86_400_000;

    table
        .clone()
        .lazy()
        .filter(
            col("time")
                .cast(DataType::Int64)
                .gt_eq(lit(start_ms))
                .and(col("time").cast(DataType::Int64).lt(lit(end_ms_exclusive))),
        )
        .collect()
}
