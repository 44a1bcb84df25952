//! Login, signup, and logout handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{session_token, ApiError, AppState};
use crate::models::student::{CreateStudentRequest, Student};
use crate::utils::helpers::generate_session_token;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Issued token plus the student snapshot the client keeps for display
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub student: Student,
}

/// Log in by email lookup. Unknown emails get 404 and the client directs the
/// user to sign up; no account is auto-created.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let token = generate_session_token();
    let student = state
        .services
        .account_service
        .login(&token, &payload.email)
        .await?;

    Ok(Json(SessionResponse { token, student }))
}

/// Create an account and establish a session exactly like login
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let token = generate_session_token();
    let student = state
        .services
        .account_service
        .signup(&token, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse { token, student })))
}

/// Clear the session. Idempotent: requests without a live session succeed too.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    if let Some(token) = session_token(&headers) {
        state.services.account_service.logout(token).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
