//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
///
/// A failed series load aborts only the request for that series; the coded
/// body lets the page show a message without tearing down the session.
#[derive(Debug)]
pub enum AppError {
    /// Unknown file identifier
    NotFound(String),
    /// Invalid request parameters
    BadRequest(String),
    /// Pipeline error (data access/format)
    Pipeline(DashboardError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Pipeline(err) => match err {
                DashboardError::DataAccess(msg) => {
                    if msg.starts_with("unknown data file") {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                    } else {
                        (
                            StatusCode::UNPROCESSABLE_ENTITY,
                            ApiError::new("DATA_ACCESS", msg),
                        )
                    }
                }
                DashboardError::DataFormat(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiError::new("DATA_FORMAT", msg),
                ),
                DashboardError::Frame(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", err.to_string()),
                ),
            },
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Pipeline(err)
    }
}
