//! Error handling module
//!
//! This module provides centralized error handling for the payments client.

use thiserror::Error;
use serde_json::Value;

use crate::domain::payments::Operation;
use crate::domain::validation::types::Violation;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings failed their checks; rejected request parameters are `Rejected`.
    #[error("Configuration validation error: {0}")]
    ConfigValidation(String),

    /// The engine was asked for an operation it has no rules for.
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("Request for {operation} rejected: {}", summarize(.violations))]
    Rejected {
        operation: Operation,
        violations: Vec<Violation>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} from payments service: {body}")]
    Http { status: u16, body: String },

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    /// Whether the error was caused by caller-supplied input rather than the
    /// client itself being misconfigured or the remote end failing.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::Rejected { .. } => true,
            AppError::Http { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Violations carried by a rejection, empty for every other error.
    pub fn violations(&self) -> &[Violation] {
        match self {
            AppError::Rejected { violations, .. } => violations,
            _ => &[],
        }
    }

    /// Structured form used by the CLI and logs
    pub fn to_json(&self) -> Value {
        match self {
            AppError::Rejected { operation, violations } => serde_json::json!({
                "error": {
                    "kind": "rejected",
                    "operation": operation.as_str(),
                    "violations": violations,
                }
            }),
            AppError::Http { status, body } => serde_json::json!({
                "error": {
                    "kind": "http",
                    "status": status,
                    "body": body,
                }
            }),
            other => serde_json::json!({
                "error": {
                    "kind": other.kind(),
                    "message": other.to_string(),
                }
            }),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::ConfigValidation(_) => "config_validation",
            AppError::UnknownOperation { .. } => "unknown_operation",
            AppError::Rejected { .. } => "rejected",
            AppError::Transport(_) => "transport",
            AppError::Http { .. } => "http",
            AppError::Json(_) => "json",
            AppError::Internal(_) => "internal",
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ConfigValidation(err.to_string())
    }
}
