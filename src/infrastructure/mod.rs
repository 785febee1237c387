//! Infrastructure layer - External concerns
//!
//! Network transport and monitoring.

pub mod adapters;

pub use adapters::{HttpTransport, MonitoringAdapter};
