//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{create_pool, health_check, run_migrations, DatabasePool, PoolConfig};
pub use repositories::{EventRepository, RegistrationRepository, StudentRepository};
pub use service::DatabaseService;
