use crate::config::constants::{Provider, Reason, TransferType, MAX_CONSUMER_RECIPIENTS};
use crate::domain::payments::Operation;
use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{Constraint, Entity, FieldKind, FieldRule, RuleSet, StringFormat};

use super::{amount, currency_code, metadata, non_empty, product_name};

fn phone_number(name: &str) -> FieldRule {
    FieldRule::required(name, FieldKind::String).with(Constraint::Format(StringFormat::PhoneNumber))
}

pub fn register_mobile(registry: &mut RuleRegistry) {
    registry.register_operation(
        Operation::Checkout,
        RuleSet::new(
            Operation::Checkout.as_str(),
            Operation::Checkout.description(),
            vec![
                product_name(),
                phone_number("phoneNumber"),
                currency_code(),
                amount(),
                FieldRule::optional("providerChannel", FieldKind::String),
                metadata(),
            ],
        ),
    );

    registry.register_operation(
        Operation::PayConsumer,
        RuleSet::new(
            Operation::PayConsumer.as_str(),
            Operation::PayConsumer.description(),
            vec![
                product_name(),
                FieldRule::required("recipients", FieldKind::ArrayOf(Entity::MobileRecipient)).with(
                    Constraint::Count {
                        min: 1,
                        max: Some(MAX_CONSUMER_RECIPIENTS),
                    },
                ),
            ],
        ),
    );

    registry.register_operation(
        Operation::PayBusiness,
        RuleSet::new(
            Operation::PayBusiness.as_str(),
            Operation::PayBusiness.description(),
            vec![
                product_name(),
                FieldRule::required("provider", FieldKind::Enum(Provider::accepted_values())),
                FieldRule::required("transferType", FieldKind::Enum(TransferType::accepted_values())),
                currency_code(),
                amount(),
                non_empty("destinationChannel"),
                non_empty("destinationAccount"),
                FieldRule::optional("requester", FieldKind::String)
                    .with(Constraint::Format(StringFormat::PhoneNumber)),
                metadata(),
            ],
        ),
    );

    registry.register_entity(
        Entity::MobileRecipient,
        RuleSet::new(
            "mobileRecipient",
            "Consumer receiving a disbursement",
            vec![
                phone_number("phoneNumber"),
                currency_code(),
                amount(),
                FieldRule::optional("reason", FieldKind::Enum(Reason::accepted_values())),
                FieldRule::optional("name", FieldKind::String),
                FieldRule::optional("providerChannel", FieldKind::String),
                metadata(),
            ],
        ),
    );
}
