//! Domain validation module
//!
//! Declarative rule sets per payment operation, the registry that owns them,
//! and the validator that applies them to request parameters.

pub mod registry;
pub mod schemas;
pub mod types;
pub mod validator;

pub use self::registry::RuleRegistry;
pub use self::types::{
    Constraint, Entity, FieldKind, FieldRule, Presence, RuleSet, StringFormat, ValidationResult,
    Violation, ViolationKind,
};
pub use self::validator::Validator;
