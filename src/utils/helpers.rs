//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use uuid::Uuid;

/// Generate an opaque session token
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}
