//! Error types for the dashboard pipeline.
//!
//! Two error kinds carry domain meaning: [`DashboardError::DataAccess`] for
//! files that cannot be opened or lack the expected variables, and
//! [`DashboardError::DataFormat`] for malformed baseline tables. Both abort
//! only the affected series; an empty catalog or an empty filter result is a
//! state, not an error, and never appears here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Source file missing, unreadable, or lacking the expected variables.
    #[error("data access error: {0}")]
    DataAccess(String),

    /// Baseline table malformed or a date/value failed to parse.
    #[error("data format error: {0}")]
    DataFormat(String),

    /// DataFrame operation failed inside a derivation step.
    #[error("dataframe error: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

impl DashboardError {
    pub fn access(msg: impl Into<String>) -> Self {
        DashboardError::DataAccess(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        DashboardError::DataFormat(msg.into())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::DataAccess(err.to_string())
    }
}
