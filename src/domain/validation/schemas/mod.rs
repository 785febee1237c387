//! Rule sets for each payment operation family
//!
//! Each submodule registers its operations and the sub-entities they embed.

pub mod bank;
pub mod card;
pub mod mobile;

use super::types::{Constraint, FieldKind, FieldRule, StringFormat};

pub(crate) fn product_name() -> FieldRule {
    FieldRule::required("productName", FieldKind::String).with(Constraint::MinLength(1))
}

pub(crate) fn currency_code() -> FieldRule {
    FieldRule::required("currencyCode", FieldKind::String)
        .with(Constraint::Format(StringFormat::CurrencyCode))
}

pub(crate) fn amount() -> FieldRule {
    FieldRule::required("amount", FieldKind::Number).with(Constraint::GreaterThan(0.0))
}

pub(crate) fn narration() -> FieldRule {
    FieldRule::required("narration", FieldKind::String).with(Constraint::MinLength(1))
}

pub(crate) fn metadata() -> FieldRule {
    FieldRule::optional("metadata", FieldKind::StringMap)
}

pub(crate) fn non_empty(name: &str) -> FieldRule {
    FieldRule::required(name, FieldKind::String).with(Constraint::MinLength(1))
}
