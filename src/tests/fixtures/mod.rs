//! Well-formed request parameters for every operation

use serde_json::{json, Value};

use crate::domain::payments::Operation;

pub fn mobile_recipient() -> Value {
    json!({
        "phoneNumber": "254718769882",
        "currencyCode": "KES",
        "reason": "SALARY",
        "metadata": {"Joe": "Biden", "id": "VP"},
        "amount": 234.5
    })
}

pub fn bank_account() -> Value {
    json!({
        "accountName": "Test Bank Account",
        "accountNumber": "1234567890",
        "bankCode": 234001,
        "dateOfBirth": "2017-11-22"
    })
}

pub fn bank_recipient() -> Value {
    json!({
        "bankAccount": bank_account(),
        "currencyCode": "NGN",
        "amount": 1000.5,
        "narration": "May Salary",
        "metadata": {"ID": "GG-19"}
    })
}

pub fn payment_card() -> Value {
    json!({
        "number": "123456789000",
        "cvvNumber": 654,
        "expiryMonth": 7,
        "expiryYear": 2030,
        "countryCode": "NG",
        "authToken": "2345"
    })
}

pub fn recipients(n: usize) -> Value {
    Value::Array((0..n).map(|_| mobile_recipient()).collect())
}

/// Parameters the validator accepts for `operation`
pub fn valid_params(operation: Operation) -> Value {
    match operation {
        Operation::Checkout => json!({
            "productName": "TestProduct",
            "phoneNumber": "0718769882",
            "currencyCode": "KES",
            "metadata": {"Joe": "Biden", "id": "VP"},
            "amount": 234.5
        }),
        Operation::PayConsumer => json!({
            "productName": "TestProduct",
            "recipients": [mobile_recipient()]
        }),
        Operation::PayBusiness => json!({
            "productName": "TestProduct",
            "provider": "Athena",
            "transferType": "BusinessToBusinessTransfer",
            "currencyCode": "KES",
            "amount": 100,
            "destinationChannel": "456789",
            "destinationAccount": "octopus",
            "metadata": {"notes": "Account top-up for July 2017"}
        }),
        Operation::BankCheckout => json!({
            "productName": "TestProduct",
            "bankAccount": bank_account(),
            "currencyCode": "NGN",
            "amount": 50,
            "narration": "Test checkout",
            "metadata": {"Joe": "Biden"}
        }),
        Operation::ValidateBankCheckout | Operation::ValidateCardCheckout => json!({
            "transactionId": "ATPid_SampleTxnId123",
            "otp": "1234"
        }),
        Operation::BankTransfer => json!({
            "productName": "TestProduct",
            "recipients": [bank_recipient()]
        }),
        Operation::CardCheckout => json!({
            "productName": "TestProduct",
            "paymentCard": payment_card(),
            "currencyCode": "NGN",
            "amount": 50,
            "narration": "Test card checkout"
        }),
    }
}

/// Copy of `params` with `key` set to `value`
pub fn with(params: &Value, key: &str, value: Value) -> Value {
    let mut params = params.clone();
    if let Some(obj) = params.as_object_mut() {
        obj.insert(key.to_string(), value);
    }
    params
}
