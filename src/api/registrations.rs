//! Registration handlers

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;

use super::{require_student, ApiError, AppState};
use crate::models::registration::{RegisteredEvent, Registration};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub event_id: i64,
    #[serde(default)]
    pub sub_event: Option<String>,
}

/// Register the logged-in student for an event
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    let student_id = require_student(&state, &headers).await?;

    let registration = state
        .services
        .registration_service
        .register(student_id, payload.event_id, payload.sub_event)
        .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// The logged-in student's registrations, most recent first
pub async fn list_registrations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RegisteredEvent>>, ApiError> {
    let student_id = require_student(&state, &headers).await?;

    let registrations = state
        .services
        .registration_service
        .list_for_student(student_id)
        .await?;

    Ok(Json(registrations))
}

/// Cancel one of the logged-in student's registrations
pub async fn cancel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(registration_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let student_id = require_student(&state, &headers).await?;

    state
        .services
        .registration_service
        .cancel(registration_id, student_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
