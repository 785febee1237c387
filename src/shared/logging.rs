//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info, warn};

use crate::config::app_config::LoggingConfig;
use crate::shared::error::{AppError, AppResult};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize the global subscriber from the logging section
    pub fn initialize(config: &LoggingConfig) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(config.structured)
            .with_line_number(config.structured)
            .with_ansi(false);

        let result = match config.format.as_str() {
            "compact" => tracing::subscriber::set_global_default(builder.compact().finish()),
            "pretty" => tracing::subscriber::set_global_default(builder.pretty().finish()),
            _ => tracing::subscriber::set_global_default(builder.finish()),
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log the outcome of a validation pass
    pub fn log_validation(request_id: &str, operation: &str, violations: usize) {
        if violations == 0 {
            info!(
                request_id = %request_id,
                operation = %operation,
                "Request parameters accepted"
            );
        } else {
            warn!(
                request_id = %request_id,
                operation = %operation,
                violations = violations,
                "Request parameters rejected"
            );
        }
    }

    /// Log a request leaving for the payments service
    pub fn log_dispatch(request_id: &str, operation: &str) {
        info!(
            request_id = %request_id,
            operation = %operation,
            "Dispatching payments request"
        );
    }

    /// Log a completed call
    pub fn log_success(request_id: &str, operation: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            operation = %operation,
            duration_ms = %duration_ms,
            "Payments request completed"
        );
    }

    /// Log a failed call
    pub fn log_error(request_id: &str, operation: &str, error: &AppError, duration_ms: u64) {
        error!(
            request_id = %request_id,
            operation = %operation,
            error = %error,
            duration_ms = %duration_ms,
            "Payments request failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
