//! Eventra backend service
//!
//! Backend for a college event-management portal: students sign up and log in
//! by email lookup, browse events bucketed into upcoming and past, register
//! for events (choosing a sub-event where the event defines them), and manage
//! their registrations.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ErrorClass, EventraError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;
pub use session::SessionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
