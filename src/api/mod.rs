//! HTTP API module
//!
//! One thin handler per portal page action. Handlers translate HTTP to the
//! service contracts and back; all business rules live in the services.

pub mod auth;
pub mod events;
pub mod registrations;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::database::{self, DatabasePool};
use crate::services::ServiceFactory;
use crate::utils::errors::{ErrorClass, EventraError};

/// Header carrying the opaque session token issued at login/signup
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub pool: DatabasePool,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/login", post(auth::login))
        .route("/api/signup", post(auth::signup))
        .route("/api/logout", post(auth::logout))
        .route("/api/events", get(events::list_events))
        .route(
            "/api/registrations",
            get(registrations::list_registrations).post(registrations::register),
        )
        .route("/api/registrations/{id}", delete(registrations::cancel))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    database::health_check(&state.pool).await?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// Error wrapper that renders the application error taxonomy as HTTP
#[derive(Debug)]
pub struct ApiError(pub EventraError);

impl From<EventraError> for ApiError {
    fn from(err: EventraError) -> Self {
        ApiError(err)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// Map the error taxonomy onto HTTP status codes
pub fn status_for(err: &EventraError) -> StatusCode {
    match err.class() {
        ErrorClass::Validation => match err {
            EventraError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        },
        ErrorClass::Conflict => StatusCode::CONFLICT,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::Forbidden => StatusCode::FORBIDDEN,
        ErrorClass::Store => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = ErrorBody {
            error: self.0.code(),
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Read the session token header, if present
pub(crate) fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Resolve the logged-in student for this request, or fail as unauthenticated.
/// Pages gate access on this; a missing or stale session sends the caller back
/// to the login entry point.
pub(crate) async fn require_student(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<i64, ApiError> {
    let token = session_token(headers).ok_or(EventraError::NotAuthenticated)?;

    state
        .services
        .account_service
        .current(token)
        .await?
        .ok_or_else(|| ApiError(EventraError::NotAuthenticated))
}
