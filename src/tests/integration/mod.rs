//! Payments service against an in-memory transport

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::{
    application::PaymentsService,
    domain::{
        payments::Operation,
        ports::PaymentsTransport,
        validation::{Validator, ViolationKind},
    },
    infrastructure::adapters::MonitoringAdapter,
    shared::error::{AppError, AppResult},
    tests::{config, fixtures},
};

/// Records every call and answers with a canned response
struct RecordingTransport {
    calls: Mutex<Vec<(Operation, Value)>>,
    fail_with: Option<AppError>,
}

impl RecordingTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        })
    }

    fn failing(error: AppError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(error),
        })
    }

    async fn calls(&self) -> Vec<(Operation, Value)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl PaymentsTransport for RecordingTransport {
    async fn send(&self, operation: Operation, params: &Value) -> AppResult<Value> {
        self.calls.lock().await.push((operation, params.clone()));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(json!({"status": "PendingConfirmation", "operation": operation.as_str()})),
        }
    }
}

fn service(transport: Arc<RecordingTransport>) -> PaymentsService {
    config::init();
    let monitoring = MonitoringAdapter::new().map(Arc::new).ok();
    PaymentsService::new_with_dependencies(Validator::new(), transport, monitoring)
}

#[tokio::test]
async fn accepted_params_are_forwarded_unchanged() {
    let transport = RecordingTransport::new();
    let service = service(transport.clone());
    let params = fixtures::with(
        &fixtures::valid_params(Operation::Checkout),
        "clientReference",
        json!("order-17"),
    );

    let response = service.checkout(params.clone()).await.unwrap();
    assert_eq!(response["status"], "PendingConfirmation");
    assert_eq!(transport.calls().await, vec![(Operation::Checkout, params)]);
}

#[tokio::test]
async fn rejected_params_never_reach_the_transport() {
    let transport = RecordingTransport::new();
    let service = service(transport.clone());

    let err = service
        .pay_consumer(json!({"productName": "Joe", "recipients": fixtures::recipients(11)}))
        .await
        .unwrap_err();

    match &err {
        AppError::Rejected { operation, violations } => {
            assert_eq!(*operation, Operation::PayConsumer);
            assert_eq!(violations[0].kind, ViolationKind::CountOutOfRange);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(err.is_client_error());
    assert!(transport.calls().await.is_empty());
}

#[tokio::test]
async fn entry_points_dispatch_their_own_operation() {
    let transport = RecordingTransport::new();
    let service = service(transport.clone());

    service.checkout(fixtures::valid_params(Operation::Checkout)).await.unwrap();
    service.pay_consumer(fixtures::valid_params(Operation::PayConsumer)).await.unwrap();
    service.pay_business(fixtures::valid_params(Operation::PayBusiness)).await.unwrap();
    service.bank_checkout(fixtures::valid_params(Operation::BankCheckout)).await.unwrap();
    service
        .validate_bank_checkout(fixtures::valid_params(Operation::ValidateBankCheckout))
        .await
        .unwrap();
    service.bank_transfer(fixtures::valid_params(Operation::BankTransfer)).await.unwrap();
    service.card_checkout(fixtures::valid_params(Operation::CardCheckout)).await.unwrap();
    service
        .validate_card_checkout(fixtures::valid_params(Operation::ValidateCardCheckout))
        .await
        .unwrap();

    let dispatched: Vec<_> = transport.calls().await.into_iter().map(|(op, _)| op).collect();
    assert_eq!(dispatched, Operation::ALL.to_vec());
}

#[tokio::test]
async fn card_checkout_with_metadata_is_rejected_before_dispatch() {
    let transport = RecordingTransport::new();
    let service = service(transport.clone());
    let params = fixtures::with(
        &fixtures::valid_params(Operation::CardCheckout),
        "metadata",
        json!({"Joe": "Biden"}),
    );

    let err = service.card_checkout(params).await.unwrap_err();
    assert_eq!(err.violations()[0].kind, ViolationKind::DisallowedField);
    assert!(transport.calls().await.is_empty());
}

#[tokio::test]
async fn transport_errors_propagate() {
    let transport = RecordingTransport::failing(AppError::Http {
        status: 401,
        body: "The supplied authentication is invalid".to_string(),
    });
    let service = service(transport.clone());

    let err = service
        .validate_card_checkout(fixtures::valid_params(Operation::ValidateCardCheckout))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Http { status: 401, .. }));
    assert_eq!(transport.calls().await.len(), 1);
}

#[tokio::test]
async fn outcomes_are_counted() {
    let transport = RecordingTransport::new();
    let service = service(transport);

    service.bank_checkout(fixtures::valid_params(Operation::BankCheckout)).await.unwrap();
    let _ = service.bank_checkout(json!({})).await;
    let _ = service.bank_checkout(json!({"productName": "Joe", "metadata": "Joe"})).await;

    let monitoring = service.monitoring().unwrap();
    assert_eq!(monitoring.validation_count(Operation::BankCheckout, "accepted"), 1);
    assert_eq!(monitoring.validation_count(Operation::BankCheckout, "rejected"), 2);
}

#[test]
fn http_service_builds_from_config() {
    let service = PaymentsService::new(Arc::new(config::test_config())).unwrap();
    assert!(service.monitoring().is_some());
    assert!(service.validator().registry().rules_for(Operation::Checkout).is_ok());
}
