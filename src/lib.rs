//! XCO2 comparison dashboard backend.
//!
//! Loads column-averaged CO2 dry-air mixing ratios from NetCDF array files,
//! resamples them to daily means, aligns them against a global baseline
//! series over a fixed instrument-comparability window, and composes an
//! interactive comparison chart specification for the frontend.
//!
//! # Modules
//!
//! - [`catalog`]: Enumerate available data files
//! - [`io`]: Load the primary measurement series from an array source
//! - [`parsing`]: Parse the plain-text baseline table
//! - [`transform`]: Daily resampling, baseline join, range filter, long form
//! - [`chart`]: Interactive chart specification composition
//! - [`services`]: Session-scoped derivation pipeline with caching
//! - [`http`]: REST presentation surface (feature `http-server`)

pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod services;
pub mod time;
pub mod transform;

#[cfg(feature = "http-server")]
pub mod http;

pub use catalog::Catalog;
pub use config::{BaselineConfig, DashboardConfig, PrimarySeriesConfig, TimeEncoding};
pub use error::{DashboardError, Result};
pub use services::{DashboardService, DashboardView, ViewRequest};
