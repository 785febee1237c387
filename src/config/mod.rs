//! Configuration management module
//!
//! Loading and validation of client settings, plus the constant sets the
//! payment rules refer to.

pub mod app_config;
pub mod constants;
pub mod validation;

pub use app_config::AppConfig;
pub use constants::{Provider, Reason, TransferType};
pub use validation::ConfigValidator;
