//! HTTP presentation surface.
//!
//! A thin axum layer over [`crate::services::DashboardService`]: the browser
//! owns the selection state (file, range, toggles) and every request derives
//! a fresh view from those parameters. The landing page embeds the chart via
//! vega-embed and drives the `/v1` endpoints.

pub mod dto;
pub mod error;
pub mod handlers;
mod landing;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
