//! HTTP transport for the payments service
//!
//! Maps each operation to its endpoint, adds account credentials and posts the
//! accepted parameters as JSON. Requests are attempted once.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::AppConfig,
    domain::{payments::Operation, ports::PaymentsTransport},
    shared::error::{AppError, AppResult},
};

/// Transport backed by `reqwest`
pub struct HttpTransport {
    config: Arc<AppConfig>,
    client: Client,
}

impl HttpTransport {
    /// Create a new transport using the client section of `config`
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.client.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Path of the endpoint serving `operation`
    pub fn endpoint(operation: Operation) -> &'static str {
        match operation {
            Operation::Checkout => "/mobile/checkout/request",
            Operation::PayConsumer => "/mobile/b2c/request",
            Operation::PayBusiness => "/mobile/b2b/request",
            Operation::BankCheckout => "/bank/checkout/charge",
            Operation::ValidateBankCheckout => "/bank/checkout/validate",
            Operation::BankTransfer => "/bank/transfer",
            Operation::CardCheckout => "/card/checkout/charge",
            Operation::ValidateCardCheckout => "/card/checkout/validate",
        }
    }

    pub fn url_for(&self, operation: Operation) -> String {
        format!(
            "{}{}",
            self.config.client.base_url().trim_end_matches('/'),
            Self::endpoint(operation)
        )
    }

    /// Request body: the accepted parameters plus the account username
    pub fn build_body(&self, params: &Value) -> AppResult<Value> {
        let mut body = params
            .as_object()
            .cloned()
            .ok_or_else(|| AppError::Internal("Request parameters must be an object".to_string()))?;
        body.insert(
            "username".to_string(),
            Value::String(self.config.client.username.clone()),
        );
        Ok(Value::Object(body))
    }

    /// Error for a non-2xx reply; an unreadable body becomes a transport error
    fn status_error<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> AppError {
        match body {
            Ok(body) => AppError::Http { status, body },
            Err(e) => {
                debug!(status, error = %e, "Failed to read error response body");
                AppError::Transport(format!("HTTP {} with unreadable body: {}", status, e))
            }
        }
    }
}

#[async_trait]
impl PaymentsTransport for HttpTransport {
    async fn send(&self, operation: Operation, params: &Value) -> AppResult<Value> {
        let url = self.url_for(operation);
        let body = self.build_body(params)?;

        debug!(operation = %operation, url = %url, "Posting payments request");

        let response = self
            .client
            .post(&url)
            .header("apiKey", &self.config.client.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), response.text().await));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Json(format!("Failed to parse response: {}", e)))
    }
}
