//! HTTP handlers for the dashboard API.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde_json::json;

use super::dto::{ChartQuery, ChartResponse, FileListResponse, TableQuery, TableResponse};
use super::error::AppError;
use super::landing;
use super::state::AppState;
use crate::services::ViewRequest;

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// GET / — static page embedding the interactive chart.
pub async fn landing_page() -> Html<&'static str> {
    Html(landing::PAGE)
}

/// GET /v1/files — the session catalog.
pub async fn list_files(State(state): State<AppState>) -> Json<FileListResponse> {
    Json(FileListResponse {
        title: state.service.title().to_string(),
        files: state.service.catalog().files().to_vec(),
    })
}

/// GET /v1/files/{file_id}/chart — derive the view for the given selection.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResponse>, AppError> {
    if let (Some(start), Some(end)) = (query.start, query.end) {
        if start > end {
            return Err(AppError::BadRequest(format!(
                "range start {start} is after range end {end}"
            )));
        }
    }

    let request = ViewRequest {
        file_id,
        start: query.start,
        end: query.end,
        show_primary: query.primary,
        show_baseline: query.baseline,
    };
    let view = state.service.view(&request)?;
    tracing::debug!(
        file_id = %view.file_id,
        points = view.points_plotted,
        "derived chart view"
    );
    Ok(Json(view))
}

/// GET /v1/files/{file_id}/table — raw loaded points for the table toggle.
pub async fn get_table(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
    Query(query): Query<TableQuery>,
) -> Result<Json<TableResponse>, AppError> {
    let points = state.service.raw_points(&file_id, query.limit)?;
    Ok(Json(TableResponse { file_id, points }))
}
