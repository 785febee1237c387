//! Application configuration structures
//!
//! This module contains the main configuration structures for the client.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::{AppError, AppResult};

/// Payments service account configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClientConfig {
    /// Account username, sent in every request body
    #[validate(length(min = 1))]
    pub username: String,

    /// API key, sent in the `apiKey` header
    #[validate(length(min = 1))]
    pub api_key: String,

    /// Target environment: "sandbox" or "production"
    #[validate(length(min = 1))]
    pub environment: String,

    /// Base URL used in the sandbox environment
    #[validate(url)]
    pub sandbox_url: String,

    /// Base URL used in the production environment
    #[validate(url)]
    pub production_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            username: "sandbox".to_string(),
            api_key: "sandbox-api-key".to_string(),
            environment: "sandbox".to_string(),
            sandbox_url: "https://payments.sandbox.africastalking.com".to_string(),
            production_url: "https://payments.africastalking.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ClientConfig {
    pub fn is_sandbox(&self) -> bool {
        self.environment == "sandbox"
    }

    /// Base URL for the configured environment
    pub fn base_url(&self) -> &str {
        if self.is_sandbox() {
            &self.sandbox_url
        } else {
            &self.production_url
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format: "full", "compact" or "pretty"
    #[validate(length(min = 1))]
    pub format: String,

    /// Include file and line in log records
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "full".to_string(),
            structured: true,
        }
    }
}

/// Metrics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MetricsConfig {
    /// Record validation and transport metrics
    pub enabled: bool,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Payments service account
    pub client: ClientConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Metrics configuration
    pub metrics: MetricsConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `Payments.toml` and environment variables
    pub fn load() -> AppResult<Self> {
        Self::load_from("Payments")
    }

    /// Load configuration using `file` (without extension) as the optional file source
    pub fn load_from(file: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("PAYMENTS_CLIENT").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config
            .validate_config()
            .map_err(|e| AppError::ConfigValidation(format!("Configuration validation failed: {}", e)))?;
        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate every section
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.client.validate()?;
        self.logging.validate()?;
        self.metrics.validate()?;

        Ok(())
    }
}
