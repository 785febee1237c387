//! Configuration validation module
//!
//! Cross-field checks that the validator derive on each section cannot express.

use crate::config::app_config::{AppConfig, ClientConfig, LoggingConfig};
use crate::shared::error::{AppError, AppResult};

const ENVIRONMENTS: [&str; 2] = ["sandbox", "production"];
const LOG_FORMATS: [&str; 3] = ["full", "compact", "pretty"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        Self::validate_client_config(&config.client)?;
        Self::validate_logging_config(&config.logging)?;

        Ok(())
    }

    fn validate_client_config(client: &ClientConfig) -> AppResult<()> {
        if !ENVIRONMENTS.contains(&client.environment.as_str()) {
            return Err(AppError::ConfigValidation(format!(
                "Unknown environment '{}': expected one of {:?}",
                client.environment, ENVIRONMENTS
            )));
        }

        if !client.production_url.starts_with("https://") {
            return Err(AppError::ConfigValidation(
                "Production payments URL must use HTTPS".to_string(),
            ));
        }

        if client.is_sandbox() && client.username != "sandbox" {
            tracing::warn!(
                username = %client.username,
                "Sandbox environment selected with a non-sandbox username"
            );
        }

        Ok(())
    }

    fn validate_logging_config(logging: &LoggingConfig) -> AppResult<()> {
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::ConfigValidation(format!(
                "Invalid log format '{}': expected one of {:?}",
                logging.format, LOG_FORMATS
            )));
        }

        Ok(())
    }
}
