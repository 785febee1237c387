//! Rule behaviour per operation

use serde_json::json;

use crate::{
    domain::{
        payments::Operation,
        validation::{ValidationResult, Validator, ViolationKind},
    },
    tests::{
        assertions::{assert_accepted, assert_violation},
        fixtures,
    },
};

fn validate(operation: Operation, params: &serde_json::Value) -> ValidationResult {
    Validator::new().validate_operation(operation, params).unwrap()
}

/// Behaviour shared by every operation
pub mod common {
    use super::*;

    #[test]
    fn every_operation_rejects_empty_params() {
        for op in Operation::ALL {
            let result = validate(op, &json!({}));
            assert!(!result.is_accepted(), "{} accepted {{}}", op);
            assert!(
                result.violations().iter().any(|v| v.kind == ViolationKind::MissingField),
                "{} reported no MissingField",
                op
            );
        }
    }

    #[test]
    fn every_fixture_is_accepted_unchanged() {
        for op in Operation::ALL {
            let params = fixtures::valid_params(op);
            assert_eq!(validate(op, &params), ValidationResult::Accepted(params.clone()), "{}", op);
        }
    }

    #[test]
    fn string_metadata_is_a_type_mismatch() {
        for op in [Operation::Checkout, Operation::PayBusiness, Operation::BankCheckout] {
            let params = fixtures::with(&fixtures::valid_params(op), "metadata", json!("Joe"));
            let result = validate(op, &params);
            assert_eq!(result.violations().len(), 1, "{}", op);
            assert_violation(&result, "metadata", ViolationKind::TypeMismatch);

            let sparse = json!({"productName": "Joe", "metadata": "Joe"});
            assert_violation(&validate(op, &sparse), "metadata", ViolationKind::TypeMismatch);
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = Validator::new();
        for op in Operation::ALL {
            for params in [fixtures::valid_params(op), json!({"productName": "Joe", "metadata": "Joe"})] {
                let first = validator.validate_operation(op, &params).unwrap();
                let second = validator.validate_operation(op, &params).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn parallel_validation_agrees_with_sequential() {
        let validator = Validator::new();
        let expected: Vec<_> = Operation::ALL
            .iter()
            .map(|op| validator.validate_operation(*op, &json!({"productName": 1})).unwrap())
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = Operation::ALL
                .iter()
                .map(|op| {
                    let validator = validator.clone();
                    scope.spawn(move || validator.validate_operation(*op, &json!({"productName": 1})).unwrap())
                })
                .collect();

            for (handle, expected) in handles.into_iter().zip(expected) {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

/// Mobile checkout, consumer and business payments
pub mod mobile {
    use super::*;

    #[test]
    fn checkout_accept_scenario() {
        let params = json!({
            "productName": "TestProduct",
            "phoneNumber": "0718769882",
            "currencyCode": "KES",
            "metadata": {"Joe": "Biden", "id": "VP"},
            "amount": 234.5
        });
        assert_accepted(&validate(Operation::Checkout, &params));
    }

    #[test]
    fn checkout_rejects_unrelated_fields_without_required_ones() {
        let params = json!({"username": "+254718769882", "from": null, "message": null});
        let result = validate(Operation::Checkout, &params);
        for field in ["productName", "phoneNumber", "currencyCode", "amount"] {
            assert_violation(&result, field, ViolationKind::MissingField);
        }
    }

    #[test]
    fn pay_consumer_accept_scenario() {
        let params = json!({
            "productName": "TestProduct",
            "recipients": [{
                "phoneNumber": "254718769882",
                "currencyCode": "KES",
                "reason": "SALARY",
                "metadata": {"Joe": "Biden", "id": "VP"},
                "amount": 234.5
            }]
        });
        assert_accepted(&validate(Operation::PayConsumer, &params));
    }

    #[test]
    fn pay_consumer_requires_recipients() {
        let result = validate(Operation::PayConsumer, &json!({"productName": "Joe"}));
        assert_eq!(result.violations().len(), 1);
        assert_violation(&result, "recipients", ViolationKind::MissingField);
    }

    #[test]
    fn pay_consumer_accepts_one_to_ten_recipients() {
        for n in 1..=10 {
            let params = json!({"productName": "TestProduct", "recipients": fixtures::recipients(n)});
            assert_accepted(&validate(Operation::PayConsumer, &params));
        }
    }

    #[test]
    fn pay_consumer_rejects_eleven_recipients() {
        let valid = json!({"productName": "Joe", "recipients": fixtures::recipients(11)});
        let result = validate(Operation::PayConsumer, &valid);
        assert_eq!(result.violations().len(), 1);
        assert_violation(&result, "recipients", ViolationKind::CountOutOfRange);

        let junk = json!({"productName": "Joe", "recipients": [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 11]});
        let result = validate(Operation::PayConsumer, &junk);
        assert_violation(&result, "recipients", ViolationKind::CountOutOfRange);
        assert_violation(&result, "recipients[10]", ViolationKind::TypeMismatch);
    }

    #[test]
    fn pay_consumer_rejects_empty_recipients() {
        let result = validate(Operation::PayConsumer, &json!({"productName": "Joe", "recipients": []}));
        assert_violation(&result, "recipients", ViolationKind::CountOutOfRange);
    }

    #[test]
    fn reason_accepts_key_or_wire_value() {
        for reason in ["SALARY", "SalaryPayment", "PROMOTION", "BusinessPaymentWithWithdrawalChargePaid"] {
            let mut recipient = fixtures::mobile_recipient();
            recipient["reason"] = json!(reason);
            let params = json!({"productName": "TestProduct", "recipients": [recipient]});
            assert_accepted(&validate(Operation::PayConsumer, &params));
        }
    }

    #[test]
    fn pay_business_checks_provider_and_transfer_type() {
        let base = fixtures::valid_params(Operation::PayBusiness);
        let params = fixtures::with(&base, "provider", json!("ATHENA"));
        assert_accepted(&validate(Operation::PayBusiness, &params));

        let params = fixtures::with(&base, "provider", json!("Paypal"));
        assert_violation(&validate(Operation::PayBusiness, &params), "provider", ViolationKind::InvalidEnumValue);

        let params = fixtures::with(&base, "transferType", json!(3));
        assert_violation(&validate(Operation::PayBusiness, &params), "transferType", ViolationKind::TypeMismatch);
    }
}

/// Bank checkout, OTP confirmation and transfers
pub mod bank {
    use super::*;

    #[test]
    fn bank_checkout_reject_scenario() {
        let result = validate(Operation::BankCheckout, &json!({"productName": "Joe"}));
        let missing: Vec<_> = result.violations().iter().map(|v| (v.field.as_str(), v.kind)).collect();
        assert_eq!(
            missing,
            vec![
                ("bankAccount", ViolationKind::MissingField),
                ("currencyCode", ViolationKind::MissingField),
                ("amount", ViolationKind::MissingField),
                ("narration", ViolationKind::MissingField),
            ]
        );
    }

    #[test]
    fn otp_confirmations_require_transaction_id() {
        for op in [Operation::ValidateBankCheckout, Operation::ValidateCardCheckout] {
            let result = validate(op, &json!({"otp": "1234"}));
            assert_eq!(result.violations().len(), 1);
            assert_violation(&result, "transactionId", ViolationKind::MissingField);
        }
    }

    #[test]
    fn bank_transfer_requires_recipients() {
        let result = validate(Operation::BankTransfer, &json!({"productName": "Jollof"}));
        assert_violation(&result, "recipients", ViolationKind::MissingField);
    }
}

/// Card checkout and OTP confirmation
pub mod card {
    use super::*;

    #[test]
    fn card_checkout_refuses_any_metadata() {
        let base = fixtures::valid_params(Operation::CardCheckout);
        for metadata in [json!("Joe"), json!({"Joe": "Biden"}), json!({}), json!(null)] {
            let result = validate(Operation::CardCheckout, &fixtures::with(&base, "metadata", metadata));
            assert_eq!(result.violations().len(), 1);
            assert_violation(&result, "metadata", ViolationKind::DisallowedField);
        }
    }

    #[test]
    fn card_checkout_requires_card_fields() {
        let result = validate(Operation::CardCheckout, &json!({"productName": "Joe"}));
        for field in ["paymentCard", "currencyCode", "amount", "narration"] {
            assert_violation(&result, field, ViolationKind::MissingField);
        }

        let mut card = fixtures::payment_card();
        card["expiryMonth"] = json!(13);
        card["countryCode"] = json!("Nigeria");
        let params = fixtures::with(&fixtures::valid_params(Operation::CardCheckout), "paymentCard", card);
        let result = validate(Operation::CardCheckout, &params);
        assert_violation(&result, "paymentCard.expiryMonth", ViolationKind::ValueOutOfRange);
        assert_violation(&result, "paymentCard.countryCode", ViolationKind::InvalidFormat);
    }
}
