//! Temporal alignment and reshaping of the measurement series.
//!
//! All steps are pure DataFrame derivations: the same inputs always produce
//! the same output, so the presentation layer can recompute freely on every
//! control change.
//!
//! # Modules
//!
//! - [`resample`]: Reduce a sub-daily series to one mean value per day
//! - [`join`]: Attach the baseline over the instrument-comparability window
//! - [`filtering`]: Inclusive date-range selection
//! - [`long_form`]: Wide table to (timestamp, series, value) triples

pub mod filtering;
pub mod join;
pub mod long_form;
pub mod resample;

pub use filtering::{filter_date_range, filter_time_range};
pub use join::join_baseline;
pub use long_form::{to_long_form, LongFormRow};
pub use resample::resample_daily;
