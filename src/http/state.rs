//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::DashboardService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DashboardService>,
}

impl AppState {
    pub fn new(service: Arc<DashboardService>) -> Self {
        Self { service }
    }
}
