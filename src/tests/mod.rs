//! Test suite for the payments client
//!
//! - fixtures: well-formed parameters for every operation
//! - unit: rule behaviour per operation
//! - integration: the payments service against an in-memory transport

pub mod fixtures;
pub mod integration;
pub mod unit;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.client.timeout_seconds = 5;
        config.metrics.enabled = true;
        config
    }
}

/// Assertion helpers shared by the suites
pub mod assertions {
    use crate::domain::validation::{ValidationResult, ViolationKind};

    /// Assert the result is a rejection carrying `kind` at `field`
    pub fn assert_violation(result: &ValidationResult, field: &str, kind: ViolationKind) {
        assert!(
            result
                .violations()
                .iter()
                .any(|v| v.field == field && v.kind == kind),
            "expected {:?} at {}, got {:?}",
            kind,
            field,
            result
        );
    }

    pub fn assert_accepted(result: &ValidationResult) {
        assert!(result.is_accepted(), "expected acceptance, got {:?}", result);
    }
}
