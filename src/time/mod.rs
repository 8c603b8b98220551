//! Timestamp decoding and calendar helpers.
//!
//! The two data file variants encode time differently: one stores Unix epoch
//! seconds, the other a 1-based day count from 1970-01-01. Both decoders
//! live here, together with the date/series constructors shared by the
//! loader, the baseline parser, and the transform steps.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Day-serial epoch: serial 1 maps to this date.
pub const UNIX_EPOCH_DATE: NaiveDate = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();

/// Decode Unix epoch seconds into a naive date-time.
///
/// Returns `None` for values outside the representable range.
pub fn decode_epoch_seconds(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Decode a 1-based day-serial number into a calendar date.
///
/// Serial 1 is 1970-01-01; there is no time-of-day component.
pub fn decode_day_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let offset = serial.round() as i64 - 1;
    UNIX_EPOCH_DATE.checked_add_signed(Duration::days(offset))
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
pub fn days_since_epoch(date: NaiveDate) -> i32 {
    (date - UNIX_EPOCH_DATE).num_days() as i32
}

/// Inverse of [`days_since_epoch`].
pub fn date_from_days(days: i32) -> NaiveDate {
    UNIX_EPOCH_DATE + Duration::days(days as i64)
}

/// Milliseconds since the epoch for midnight of `date`.
pub fn millis_at_midnight(date: NaiveDate) -> i64 {
    days_since_epoch(date) as i64 * 86_400_000
}

/// Build a polars `Date` series from calendar dates.
pub fn date_series(name: &str, dates: &[NaiveDate]) -> Series {
    let days: Vec<i32> = dates.iter().map(|d| days_since_epoch(*d)).collect();
    Int32Chunked::from_vec(name.into(), days)
        .into_date()
        .into_series()
}

/// Build a polars millisecond `Datetime` series from naive date-times.
pub fn datetime_series(name: &str, timestamps: &[NaiveDateTime]) -> Series {
    let millis: Vec<i64> = timestamps
        .iter()
        .map(|ts| ts.and_utc().timestamp_millis())
        .collect();
    Int64Chunked::from_vec(name.into(), millis)
        .into_datetime(TimeUnit::Milliseconds, None)
        .into_series()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_epoch_seconds() {
        // 2021-06-15 12:00:00 UTC
        let dt = decode_epoch_seconds(1_623_758_400.0).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2021, 6, 15).unwrap());
        assert_eq!(dt.time().to_string(), "12:00:00");
    }

    #[test]
    fn test_decode_epoch_seconds_rejects_non_finite() {
        assert!(decode_epoch_seconds(f64::NAN).is_none());
        assert!(decode_epoch_seconds(f64::INFINITY).is_none());
    }

    #[test]
    fn test_decode_day_serial_is_one_based() {
        assert_eq!(decode_day_serial(1.0).unwrap(), UNIX_EPOCH_DATE);
        assert_eq!(
            decode_day_serial(2.0).unwrap(),
            NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()
        );
        // Serial 14718 = 2010-04-18
        assert_eq!(
            decode_day_serial(14_718.0).unwrap(),
            NaiveDate::from_ymd_opt(2010, 4, 18).unwrap()
        );
    }

    #[test]
    fn test_days_since_epoch_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2020, 11, 29).unwrap();
        assert_eq!(date_from_days(days_since_epoch(date)), date);
        assert_eq!(days_since_epoch(UNIX_EPOCH_DATE), 0);
    }

    #[test]
    fn test_date_series_dtype() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
        ];
        let series = date_series("date", &dates);
        assert_eq!(series.dtype(), &DataType::Date);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_datetime_series_dtype() {
        let ts = vec![NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()];
        let series = datetime_series("time", &ts);
        assert_eq!(
            series.dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
    }
}
