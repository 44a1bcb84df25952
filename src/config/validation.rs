//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{EventraError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_redis_config(&settings.redis)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(EventraError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(EventraError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(EventraError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(EventraError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(EventraError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(EventraError::Config("Redis URL is required".to_string()));
    }

    if config.session_ttl_seconds == 0 {
        return Err(EventraError::Config(
            "Session TTL must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventraError::Config("Log level is required".to_string()));
    }

    if config.directory.is_empty() {
        return Err(EventraError::Config(
            "Log directory is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings_pass() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let mut settings = Settings::default();
        settings.database.url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_inverted_connection_bounds_rejected() {
        let mut settings = Settings::default();
        settings.database.min_connections = 20;
        settings.database.max_connections = 5;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_zero_session_ttl_rejected() {
        let mut settings = Settings::default();
        settings.redis.session_ttl_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }
}
