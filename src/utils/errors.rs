//! Error handling for Eventra
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Eventra application
#[derive(Error, Debug)]
pub enum EventraError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No student account for email: {email}")]
    StudentNotFound { email: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Registration not found: {registration_id}")]
    RegistrationNotFound { registration_id: i64 },

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Event {event_id} requires choosing one of its sub-events")]
    SubEventRequired { event_id: i64 },

    #[error("Student {student_id} is already registered for event {event_id}")]
    AlreadyRegistered { student_id: i64, event_id: i64 },

    #[error("A student account with email {email} already exists")]
    EmailExists { email: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Eventra operations
pub type Result<T> = std::result::Result<T, EventraError>;

/// The error taxonomy callers branch on when presenting a failure.
///
/// `Validation` and `Conflict` are recoverable by the user correcting input,
/// `NotFound` redirects to an alternate flow, `Store` is surfaced verbatim
/// with no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Conflict,
    NotFound,
    Forbidden,
    Store,
}

impl EventraError {
    /// Classify the error for presentation
    pub fn class(&self) -> ErrorClass {
        match self {
            EventraError::NotAuthenticated
            | EventraError::SubEventRequired { .. }
            | EventraError::InvalidInput(_) => ErrorClass::Validation,
            EventraError::AlreadyRegistered { .. } | EventraError::EmailExists { .. } => {
                ErrorClass::Conflict
            }
            EventraError::StudentNotFound { .. }
            | EventraError::EventNotFound { .. }
            | EventraError::RegistrationNotFound { .. } => ErrorClass::NotFound,
            EventraError::PermissionDenied(_) => ErrorClass::Forbidden,
            EventraError::Database(_)
            | EventraError::Migration(_)
            | EventraError::Redis(_)
            | EventraError::Serialization(_)
            | EventraError::Io(_)
            | EventraError::Config(_) => ErrorClass::Store,
        }
    }

    /// Check if the error is recoverable by the user adjusting their request
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.class(), ErrorClass::Store)
    }

    /// Stable machine-readable code included in API error payloads
    pub fn code(&self) -> &'static str {
        match self {
            EventraError::Database(_) => "database_error",
            EventraError::Migration(_) => "migration_error",
            EventraError::Redis(_) => "session_store_error",
            EventraError::Serialization(_) => "serialization_error",
            EventraError::Io(_) => "io_error",
            EventraError::Config(_) => "config_error",
            EventraError::StudentNotFound { .. } => "student_not_found",
            EventraError::EventNotFound { .. } => "event_not_found",
            EventraError::RegistrationNotFound { .. } => "registration_not_found",
            EventraError::NotAuthenticated => "not_authenticated",
            EventraError::SubEventRequired { .. } => "sub_event_required",
            EventraError::AlreadyRegistered { .. } => "already_registered",
            EventraError::EmailExists { .. } => "email_exists",
            EventraError::PermissionDenied(_) => "permission_denied",
            EventraError::InvalidInput(_) => "invalid_input",
        }
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorClass::Validation => write!(f, "validation"),
            ErrorClass::Conflict => write!(f, "conflict"),
            ErrorClass::NotFound => write!(f, "not_found"),
            ErrorClass::Forbidden => write!(f, "forbidden"),
            ErrorClass::Store => write!(f, "store"),
        }
    }
}
