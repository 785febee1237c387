//! Payments client - request validation and dispatch for a payments API
//!
//! Parameters for mobile checkout, consumer and business disbursements, bank
//! and card checkouts are checked against declarative per-operation rules
//! before anything is sent. Rejections list every violated constraint.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::PaymentsService;
pub use config::AppConfig;
pub use domain::{Operation, RuleRegistry, ValidationResult, Validator, Violation, ViolationKind};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;
