//! Infrastructure adapters module
//!
//! Adapters for the payments service and for metrics.

pub mod http_transport;
pub mod monitoring;

pub use http_transport::HttpTransport;
pub use monitoring::MonitoringAdapter;
