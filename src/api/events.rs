//! Event catalog handlers

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;

use super::{require_student, ApiError, AppState};
use crate::services::EventBoard;

/// The full catalog partitioned into upcoming and past, the way the home page
/// renders it. The reference instant is captured once per fetch.
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<EventBoard>, ApiError> {
    require_student(&state, &headers).await?;

    let now = Utc::now();
    let board = state.services.catalog_service.board(now).await?;

    Ok(Json(board))
}
