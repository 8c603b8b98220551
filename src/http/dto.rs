//! Request and response types for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::{DashboardView, RawPoint};

/// Catalog listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    pub title: String,
    /// Sorted file identifiers; empty when no data files are available.
    pub files: Vec<String>,
}

/// Query parameters of the chart endpoint. All optional: defaults are the
/// full day range with both series visible.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub primary: bool,
    #[serde(default = "default_true")]
    pub baseline: bool,
}

fn default_true() -> bool {
    true
}

/// Chart endpoint response: the derived view, as-is.
pub type ChartResponse = DashboardView;

/// Query parameters of the raw-table endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TableQuery {
    pub limit: Option<usize>,
}

/// Raw-table response.
#[derive(Debug, Clone, Serialize)]
pub struct TableResponse {
    pub file_id: String,
    pub points: Vec<RawPoint>,
}
