//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Eventra application.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must stay alive for the lifetime of the process,
/// otherwise the file layer stops flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, "eventra.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log account actions with structured data
pub fn log_account_action(student_id: i64, action: &str, details: Option<&str>) {
    info!(
        student_id = student_id,
        action = action,
        details = details,
        "Account action performed"
    );
}

/// Log registration actions against an event
pub fn log_registration_action(event_id: i64, action: &str, student_id: i64, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        student_id = student_id,
        details = details,
        "Registration action performed"
    );
}

/// Log rejected registration attempts
pub fn log_registration_conflict(event_id: i64, student_id: i64) {
    warn!(
        event_id = event_id,
        student_id = student_id,
        "Duplicate registration attempt rejected"
    );
}
