//! Shared utilities and common functionality
//!
//! Error handling and logging used across the client.

pub mod error;
pub mod logging;

pub use error::{AppError, AppResult};
pub use logging::LoggingUtils;
