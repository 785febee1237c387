//! Monitoring adapter for metrics
//!
//! Prometheus counters for validation outcomes and a histogram of transport
//! latency.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::payments::Operation;
use crate::domain::validation::types::Violation;
use crate::shared::error::{AppError, AppResult};

/// Adapter for monitoring and metrics services
pub struct MonitoringAdapter {
    registry: Registry,
    validations: IntCounterVec,
    violations: IntCounterVec,
    transport_seconds: Histogram,
}

impl MonitoringAdapter {
    /// Create a new monitoring adapter with its own registry
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let validations = IntCounterVec::new(
            Opts::new("payments_validations_total", "Validated payment requests"),
            &["operation", "outcome"],
        )
        .map_err(metrics_error)?;

        let violations = IntCounterVec::new(
            Opts::new("payments_violations_total", "Rule violations by kind"),
            &["kind"],
        )
        .map_err(metrics_error)?;

        let transport_seconds = Histogram::with_opts(HistogramOpts::new(
            "payments_transport_seconds",
            "Payments service round trip time in seconds",
        ))
        .map_err(metrics_error)?;

        registry.register(Box::new(validations.clone())).map_err(metrics_error)?;
        registry.register(Box::new(violations.clone())).map_err(metrics_error)?;
        registry.register(Box::new(transport_seconds.clone())).map_err(metrics_error)?;

        Ok(Self {
            registry,
            validations,
            violations,
            transport_seconds,
        })
    }

    /// Record one validation pass
    pub fn record_validation(&self, operation: Operation, violations: &[Violation]) {
        let outcome = if violations.is_empty() { "accepted" } else { "rejected" };
        self.validations
            .with_label_values(&[operation.as_str(), outcome])
            .inc();
        for violation in violations {
            self.violations
                .with_label_values(&[violation.kind.as_str()])
                .inc();
        }
    }

    pub fn record_transport(&self, seconds: f64) {
        self.transport_seconds.observe(seconds);
    }

    pub fn validation_count(&self, operation: Operation, outcome: &str) -> u64 {
        self.validations
            .with_label_values(&[operation.as_str(), outcome])
            .get()
    }

    /// Prometheus text exposition of every metric
    pub fn gather_metrics(&self) -> AppResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(metrics_error)?;
        String::from_utf8(buffer).map_err(|e| AppError::Internal(e.to_string()))
    }
}

fn metrics_error(err: prometheus::Error) -> AppError {
    AppError::Internal(format!("Metrics error: {}", err))
}
