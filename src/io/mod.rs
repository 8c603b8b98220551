//! Array-data sources and the primary series loader.
//!
//! The on-disk array format is consumed through the narrow [`ArraySource`]
//! trait: named one-dimensional numeric variables, nothing more. The real
//! NetCDF reader lives behind the `netcdf-files` feature because it needs
//! the system NetCDF library; [`MemorySource`] is always available and backs
//! the tests.

pub mod loader;
pub mod source;

#[cfg(feature = "netcdf-files")]
pub mod netcdf_source;


pub use loader::{load_primary_series, open_source, series_day_bounds};
pub use source::{ArraySource, MemorySource};

#[cfg(feature = "netcdf-files")]
pub use netcdf_source::NetcdfSource;
