use crate::domain::payments::Operation;
use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{Constraint, Entity, FieldKind, FieldRule, RuleSet, StringFormat};

use super::{amount, currency_code, metadata, narration, non_empty, product_name};

pub fn register_bank(registry: &mut RuleRegistry) {
    registry.register_operation(
        Operation::BankCheckout,
        RuleSet::new(
            Operation::BankCheckout.as_str(),
            Operation::BankCheckout.description(),
            vec![
                product_name(),
                FieldRule::required("bankAccount", FieldKind::Entity(Entity::BankAccount)),
                currency_code(),
                amount(),
                narration(),
                metadata(),
            ],
        ),
    );

    registry.register_operation(
        Operation::ValidateBankCheckout,
        RuleSet::new(
            Operation::ValidateBankCheckout.as_str(),
            Operation::ValidateBankCheckout.description(),
            vec![non_empty("transactionId"), non_empty("otp")],
        ),
    );

    registry.register_operation(
        Operation::BankTransfer,
        RuleSet::new(
            Operation::BankTransfer.as_str(),
            Operation::BankTransfer.description(),
            vec![
                product_name(),
                FieldRule::required("recipients", FieldKind::ArrayOf(Entity::BankRecipient))
                    .with(Constraint::Count { min: 1, max: None }),
            ],
        ),
    );

    registry.register_entity(
        Entity::BankAccount,
        RuleSet::new(
            "bankAccount",
            "Bank account being charged or credited",
            vec![
                non_empty("accountName"),
                non_empty("accountNumber"),
                FieldRule::required("bankCode", FieldKind::Number).with(Constraint::MinValue(0.0)),
                FieldRule::optional("dateOfBirth", FieldKind::String)
                    .with(Constraint::Format(StringFormat::Date)),
            ],
        ),
    );

    registry.register_entity(
        Entity::BankRecipient,
        RuleSet::new(
            "bankRecipient",
            "Bank account receiving a transfer",
            vec![
                FieldRule::required("bankAccount", FieldKind::Entity(Entity::BankAccount)),
                currency_code(),
                amount(),
                narration(),
                metadata(),
            ],
        ),
    );
}
