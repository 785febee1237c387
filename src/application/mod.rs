//! Application layer - Use cases and application services
//!
//! Orchestrates validation and dispatch of payment requests.

pub mod services;

pub use services::*;
