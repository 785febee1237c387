//! Process-wide enumerations referenced by the payment rules
//!
//! Every member is known under a symbolic key (`SALARY`) and the value the
//! payments service expects on the wire (`SalaryPayment`). Both spellings are
//! members of the accepted set.

use serde::{Deserialize, Serialize};

macro_rules! payment_constants {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal, $wire:literal;)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent to the payments service
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Symbolic constant name
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Membership set used by the validation rules
            pub fn accepted_values() -> Vec<String> {
                Self::ALL
                    .iter()
                    .flat_map(|v| [v.key().to_string(), v.as_str().to_string()])
                    .collect()
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.key() == s || v.as_str() == s)
                    .ok_or_else(|| format!("unsupported {}: {}", stringify!($name), s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

payment_constants! {
    /// Disbursement reason for a consumer payment
    Reason {
        Salary => "SALARY", "SalaryPayment";
        SalaryWithCharge => "SALARY_WITH_CHARGE", "SalaryPaymentWithWithdrawalChargePaid";
        Business => "BUSINESS", "BusinessPayment";
        BusinessWithCharge => "BUSINESS_WITH_CHARGE", "BusinessPaymentWithWithdrawalChargePaid";
        Promotion => "PROMOTION", "PromotionPayment";
    }
}

payment_constants! {
    /// Mobile money provider for business transfers
    Provider {
        Mpesa => "MPESA", "Mpesa";
        TigoTanzania => "TIGO_TANZANIA", "TigoTanzania";
        Athena => "ATHENA", "Athena";
    }
}

payment_constants! {
    /// Business transfer type
    TransferType {
        BuyGoods => "BUY_GOODS", "BusinessBuyGoods";
        PayBill => "PAYBILL", "BusinessPayBill";
        DisburseFunds => "DISBURSE_FUNDS", "DisbursementFundsToBusiness";
        B2bTransfer => "B2B_TRANSFER", "BusinessToBusinessTransfer";
    }
}

/// Upper bound on recipients in a single consumer disbursement
pub const MAX_CONSUMER_RECIPIENTS: usize = 10;
