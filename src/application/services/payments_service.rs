//! Payments service orchestrating validation and dispatch
//!
//! Every entry point validates first. A rejected request becomes
//! `AppError::Rejected` and never reaches the transport.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::{
    config::AppConfig,
    domain::{
        payments::Operation,
        ports::PaymentsTransport,
        validation::{ValidationResult, Validator},
    },
    infrastructure::adapters::{HttpTransport, MonitoringAdapter},
    shared::{
        error::AppResult,
        logging::LoggingUtils,
    },
};

/// Payments service exposing one method per operation
pub struct PaymentsService {
    validator: Validator,
    transport: Arc<dyn PaymentsTransport>,
    monitoring: Option<Arc<MonitoringAdapter>>,
}

impl PaymentsService {
    /// Create a service that talks HTTP to the configured environment
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let monitoring = if config.metrics.enabled {
            Some(Arc::new(MonitoringAdapter::new()?))
        } else {
            None
        };
        let transport = Arc::new(HttpTransport::new(config)?);
        Ok(Self::new_with_dependencies(Validator::new(), transport, monitoring))
    }

    /// Create a service with injected dependencies (for testing/DI)
    pub fn new_with_dependencies(
        validator: Validator,
        transport: Arc<dyn PaymentsTransport>,
        monitoring: Option<Arc<MonitoringAdapter>>,
    ) -> Self {
        Self {
            validator,
            transport,
            monitoring,
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn monitoring(&self) -> Option<&MonitoringAdapter> {
        self.monitoring.as_deref()
    }

    /// Validate without sending
    pub fn validate(&self, operation: Operation, params: &Value) -> AppResult<ValidationResult> {
        let result = self.validator.validate_operation(operation, params)?;
        if let Some(monitoring) = &self.monitoring {
            monitoring.record_validation(operation, result.violations());
        }
        Ok(result)
    }

    /// Validate `params` for `operation` and send them if accepted
    pub async fn execute(&self, operation: Operation, params: Value) -> AppResult<Value> {
        let request_id = LoggingUtils::generate_request_id();
        let result = self.validate(operation, &params)?;
        LoggingUtils::log_validation(&request_id, operation.as_str(), result.violations().len());
        let accepted = result.into_result(operation)?;

        let started = Instant::now();
        LoggingUtils::log_dispatch(&request_id, operation.as_str());
        let response = self.transport.send(operation, &accepted).await;
        let elapsed = started.elapsed();

        if let Some(monitoring) = &self.monitoring {
            monitoring.record_transport(elapsed.as_secs_f64());
        }

        match &response {
            Ok(_) => LoggingUtils::log_success(&request_id, operation.as_str(), elapsed.as_millis() as u64),
            Err(e) => LoggingUtils::log_error(&request_id, operation.as_str(), e, elapsed.as_millis() as u64),
        }

        response
    }

    /// Mobile checkout
    pub async fn checkout(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::Checkout, params).await
    }

    /// Business to consumer payment, at most ten recipients
    pub async fn pay_consumer(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::PayConsumer, params).await
    }

    pub async fn pay_business(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::PayBusiness, params).await
    }

    pub async fn bank_checkout(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::BankCheckout, params).await
    }

    pub async fn validate_bank_checkout(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::ValidateBankCheckout, params).await
    }

    pub async fn bank_transfer(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::BankTransfer, params).await
    }

    /// Card checkout; metadata is refused
    pub async fn card_checkout(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::CardCheckout, params).await
    }

    pub async fn validate_card_checkout(&self, params: Value) -> AppResult<Value> {
        self.execute(Operation::ValidateCardCheckout, params).await
    }
}
