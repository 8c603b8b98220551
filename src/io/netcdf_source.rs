//! NetCDF-backed array source.
//!
//! Requires the system NetCDF library; enabled by the `netcdf-files`
//! feature. The [`netcdf::File`] handle is owned by the source and closed
//! when the source drops, which gives the loader scoped acquisition for
//! free.

use std::path::Path;

use crate::error::{DashboardError, Result};
use crate::io::source::ArraySource;

pub struct NetcdfSource {
    file: netcdf::File,
}

impl NetcdfSource {
    /// Open a NetCDF file read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let file = netcdf::open(path).map_err(|err| {
            DashboardError::access(format!("cannot open {}: {err}", path.display()))
        })?;
        Ok(Self { file })
    }
}

impl ArraySource for NetcdfSource {
    fn variable(&self, name: &str) -> Result<Vec<f64>> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| DashboardError::access(format!("variable '{name}' not found")))?;
        var.get_values::<f64, _>(..)
            .map_err(|err| DashboardError::access(format!("cannot read variable '{name}': {err}")))
    }
}
