//! Baseline alignment onto the primary day index.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::time::days_since_epoch;

/// Left-join the baseline onto the primary daily series by calendar day.
///
/// The baseline is first clamped to the inclusive
/// `[overlap_start, overlap_end]` window: outside it the joined baseline
/// column is missing even when the baseline source has data there. The
/// window marks the period over which the two instruments are comparable,
/// which is why it is a configured constant rather than derived from data
/// availability. Only the primary's day range survives the join.
pub fn join_baseline(
    primary_daily: &DataFrame,
    baseline: &DataFrame,
    overlap_start: NaiveDate,
    overlap_end: NaiveDate,
) -> PolarsResult<DataFrame> {
    let start = days_since_epoch(overlap_start);
    let end = days_since_epoch(overlap_end);

    let clamped = baseline.clone().lazy().filter(
        col("date")
            .cast(DataType::Int32)
            .gt_eq(lit(start))
            .and(col("date").cast(DataType::Int32).lt_eq(lit(end))),
    );

    primary_daily
        .clone()
        .lazy()
        .join(clamped, [col("date")], [col("date")], JoinArgs::new(JoinType::Left))
        .sort(["date"], SortMultipleOptions::default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::time::date_series;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn frame(name: &str, rows: &[(&str, Option<f64>)]) -> DataFrame {
        let dates: Vec<NaiveDate> = rows.iter().map(|(d, _)| day(d)).collect();
        let values: Vec<Option<f64>> = rows.iter().map(|(_, v)| *v).collect();
        DataFrame::new(vec![
            date_series("date", &dates).into_column(),
            Series::new(name.into(), values).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_join_keeps_primary_day_range_only() {
        let primary = frame(
            "karlsruhe",
            &[("2021-01-01", Some(410.2)), ("2021-01-02", Some(411.0))],
        );
        let baseline = frame(
            "global",
            &[
                ("2020-12-31", Some(413.9)),
                ("2021-01-01", Some(409.5)),
                ("2021-01-03", Some(414.3)),
            ],
        );

        let joined = join_baseline(&primary, &baseline, day("2010-04-18"), day("2021-12-31"))
            .unwrap();

        assert_eq!(joined.height(), 2);
        let global = joined.column("global").unwrap().f64().unwrap().to_vec();
        assert_eq!(global, vec![Some(409.5), None]);
    }

    #[test]
    fn test_baseline_outside_overlap_window_is_missing() {
        let primary = frame(
            "karlsruhe",
            &[("2020-11-29", Some(412.0)), ("2020-12-01", Some(412.5))],
        );
        // Baseline has a valid value on 2020-12-01, after the window closes.
        let baseline = frame(
            "global",
            &[("2020-11-29", Some(414.0)), ("2020-12-01", Some(414.2))],
        );

        let joined = join_baseline(&primary, &baseline, day("2010-04-18"), day("2020-11-29"))
            .unwrap();

        let global = joined.column("global").unwrap().f64().unwrap().to_vec();
        assert_eq!(global, vec![Some(414.0), None]);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let primary = frame(
            "karlsruhe",
            &[
                ("2010-04-17", Some(388.0)),
                ("2010-04-18", Some(388.5)),
                ("2020-11-29", Some(412.0)),
            ],
        );
        let baseline = frame(
            "global",
            &[
                ("2010-04-17", Some(390.0)),
                ("2010-04-18", Some(390.5)),
                ("2020-11-29", Some(414.0)),
            ],
        );

        let joined = join_baseline(&primary, &baseline, day("2010-04-18"), day("2020-11-29"))
            .unwrap();

        let global = joined.column("global").unwrap().f64().unwrap().to_vec();
        assert_eq!(global, vec![None, Some(390.5), Some(414.0)]);
    }

    #[test]
    fn test_missing_baseline_values_survive_the_join_as_missing() {
        let primary = frame("karlsruhe", &[("2021-01-02", Some(411.0))]);
        let baseline = frame("global", &[("2021-01-02", None)]);

        let joined = join_baseline(&primary, &baseline, day("2010-04-18"), day("2021-12-31"))
            .unwrap();
        let global = joined.column("global").unwrap().f64().unwrap().to_vec();
        assert_eq!(global, vec![None]);
    }
}
