//! Domain layer - Core business logic and domain models
//!
//! Payment operations, the rules that decide whether a request may be sent,
//! and the ports the application layer drives.

pub mod payments;
pub mod ports;
pub mod validation;

pub use payments::Operation;
pub use ports::PaymentsTransport;
pub use validation::{
    Entity, FieldKind, FieldRule, Presence, RuleRegistry, RuleSet, ValidationResult, Validator,
    Violation, ViolationKind,
};
