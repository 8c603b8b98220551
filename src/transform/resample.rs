//! Daily resampling of the raw series.

use polars::prelude::*;

/// Group a raw `[time, <value>]` series into calendar-day buckets and take
/// the arithmetic mean of the present values per day.
///
/// The output is `[date, <value>]`, sorted by day, with at most one row per
/// day. Missing samples never enter the mean; a day whose samples are all
/// missing keeps a missing mean rather than collapsing to zero. Days with no
/// samples at all simply have no row. The calendar day is the date portion
/// of the decoded timestamp; no timezone conversion is applied.
pub fn resample_daily(raw: &DataFrame, value_col: &str) -> PolarsResult<DataFrame> {
    raw.clone()
        .lazy()
        .group_by([col("time").dt().date().alias("date")])
        .agg([col(value_col).mean()])
        .sort(["date"], SortMultipleOptions::default())
        .collect()
}
