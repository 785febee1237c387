use crate::domain::payments::Operation;
use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{Constraint, Entity, FieldKind, FieldRule, RuleSet, StringFormat};

use super::{amount, currency_code, narration, non_empty, product_name};

pub fn register_card(registry: &mut RuleRegistry) {
    // Card charges never carry metadata, even a well-formed map.
    registry.register_operation(
        Operation::CardCheckout,
        RuleSet::new(
            Operation::CardCheckout.as_str(),
            Operation::CardCheckout.description(),
            vec![
                product_name(),
                FieldRule::required("paymentCard", FieldKind::Entity(Entity::PaymentCard)),
                currency_code(),
                amount(),
                narration(),
                FieldRule::disallowed("metadata"),
            ],
        ),
    );

    registry.register_operation(
        Operation::ValidateCardCheckout,
        RuleSet::new(
            Operation::ValidateCardCheckout.as_str(),
            Operation::ValidateCardCheckout.description(),
            vec![non_empty("transactionId"), non_empty("otp")],
        ),
    );

    registry.register_entity(
        Entity::PaymentCard,
        RuleSet::new(
            "paymentCard",
            "Card details for a card checkout",
            vec![
                FieldRule::required("number", FieldKind::String)
                    .with(Constraint::Format(StringFormat::Digits))
                    .with(Constraint::MinLength(12))
                    .with(Constraint::MaxLength(19)),
                FieldRule::required("cvvNumber", FieldKind::Number)
                    .with(Constraint::MinValue(0.0))
                    .with(Constraint::MaxValue(9999.0)),
                FieldRule::required("expiryMonth", FieldKind::Number)
                    .with(Constraint::MinValue(1.0))
                    .with(Constraint::MaxValue(12.0)),
                FieldRule::required("expiryYear", FieldKind::Number).with(Constraint::MinValue(1970.0)),
                FieldRule::required("countryCode", FieldKind::String)
                    .with(Constraint::Format(StringFormat::CountryCode)),
                non_empty("authToken"),
            ],
        ),
    );
}
