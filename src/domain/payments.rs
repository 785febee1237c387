//! Payments domain models and types

use serde::{Deserialize, Serialize};

/// Payment operation exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Checkout,
    PayConsumer,
    PayBusiness,
    BankCheckout,
    ValidateBankCheckout,
    BankTransfer,
    CardCheckout,
    ValidateCardCheckout,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Checkout,
        Operation::PayConsumer,
        Operation::PayBusiness,
        Operation::BankCheckout,
        Operation::ValidateBankCheckout,
        Operation::BankTransfer,
        Operation::CardCheckout,
        Operation::ValidateCardCheckout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Checkout => "checkout",
            Operation::PayConsumer => "payConsumer",
            Operation::PayBusiness => "payBusiness",
            Operation::BankCheckout => "bankCheckout",
            Operation::ValidateBankCheckout => "validateBankCheckout",
            Operation::BankTransfer => "bankTransfer",
            Operation::CardCheckout => "cardCheckout",
            Operation::ValidateCardCheckout => "validateCardCheckout",
        }
    }

    /// Short human description, used in rule set listings
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Checkout => "Mobile checkout charged to a subscriber",
            Operation::PayConsumer => "Business to consumer disbursement",
            Operation::PayBusiness => "Business to business transfer",
            Operation::BankCheckout => "Bank account checkout charge",
            Operation::ValidateBankCheckout => "OTP confirmation of a bank checkout",
            Operation::BankTransfer => "Transfer to one or more bank accounts",
            Operation::CardCheckout => "Card checkout charge",
            Operation::ValidateCardCheckout => "OTP confirmation of a card checkout",
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unsupported operation: {}", s))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
