//! Ports the payments service depends on

use async_trait::async_trait;
use serde_json::Value;

use super::payments::Operation;
use crate::shared::error::AppResult;

/// Delivers an accepted request to the payments service.
///
/// Implementations receive parameters exactly as the validator accepted them
/// and own the mapping to the wire format.
#[async_trait]
pub trait PaymentsTransport: Send + Sync {
    async fn send(&self, operation: Operation, params: &Value) -> AppResult<Value>;
}
