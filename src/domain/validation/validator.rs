use std::sync::Arc;

use serde_json::{Map, Value};

use super::registry::RuleRegistry;
use super::types::{
    Constraint, Entity, FieldKind, FieldRule, Presence, RuleSet, ValidationResult, Violation,
    ViolationKind,
};
use crate::domain::payments::Operation;
use crate::shared::error::AppResult;

/// Path reported for violations of the parameter object itself
pub const ROOT_FIELD: &str = "params";

/// Evaluates rule sets against request parameters.
///
/// Every rule is evaluated; a rejection lists all violations in rule order.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
}

impl Validator {
    /// Validator backed by the global registry
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::global())
    }

    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate parameters for an operation given by its wire name
    pub fn validate(&self, operation: &str, params: &Value) -> AppResult<ValidationResult> {
        let rules = self.registry.get_rules(operation)?;
        self.evaluate(rules, params)
    }

    pub fn validate_operation(&self, operation: Operation, params: &Value) -> AppResult<ValidationResult> {
        let rules = self.registry.rules_for(operation)?;
        self.evaluate(rules, params)
    }

    fn evaluate(&self, rules: &RuleSet, params: &Value) -> AppResult<ValidationResult> {
        let mut violations = Vec::new();

        match params.as_object() {
            None => violations.push(Violation::new(
                ROOT_FIELD,
                ViolationKind::TypeMismatch,
                "parameters must be an object",
            )),
            Some(obj) => {
                if obj.is_empty() {
                    violations.push(Violation::new(
                        ROOT_FIELD,
                        ViolationKind::MissingField,
                        "parameters cannot be empty",
                    ));
                }
                self.check_fields(rules, obj, "", &mut violations)?;
            }
        }

        if violations.is_empty() {
            Ok(ValidationResult::Accepted(params.clone()))
        } else {
            Ok(ValidationResult::Rejected(violations))
        }
    }

    fn check_fields(
        &self,
        rules: &RuleSet,
        obj: &Map<String, Value>,
        prefix: &str,
        out: &mut Vec<Violation>,
    ) -> AppResult<()> {
        for rule in &rules.fields {
            let path = join(prefix, &rule.name);

            // A disallowed key is refused even when its value is null.
            if rule.presence == Presence::Disallowed {
                if obj.contains_key(&rule.name) {
                    out.push(Violation::new(
                        &path,
                        ViolationKind::DisallowedField,
                        format!("{} is not allowed for {}", path, rules.name),
                    ));
                }
                continue;
            }

            // null counts as absent
            match (rule.presence, obj.get(&rule.name).filter(|v| !v.is_null())) {
                (Presence::Required, None) => out.push(Violation::new(
                    &path,
                    ViolationKind::MissingField,
                    format!("{} is required", path),
                )),
                (_, None) => {}
                (_, Some(value)) => self.check_value(rule, value, &path, out)?,
            }
        }

        Ok(())
    }

    fn check_value(&self, rule: &FieldRule, value: &Value, path: &str, out: &mut Vec<Violation>) -> AppResult<()> {
        if !rule.kind.matches(value) {
            out.push(Violation::new(
                path,
                ViolationKind::TypeMismatch,
                format!("{} must be {}", path, rule.kind.describe()),
            ));
            return Ok(());
        }

        for constraint in &rule.constraints {
            if let Some(violation) = apply_constraint(constraint, value, path) {
                out.push(violation);
            }
        }

        match &rule.kind {
            FieldKind::Enum(allowed) => {
                if let Some(s) = value.as_str() {
                    if !allowed.iter().any(|a| a == s) {
                        out.push(Violation::new(
                            path,
                            ViolationKind::InvalidEnumValue,
                            format!("{} must be one of: {}", path, allowed.join(", ")),
                        ));
                    }
                }
            }
            FieldKind::StringMap => {
                if let Some(map) = value.as_object() {
                    for (key, v) in map {
                        if !v.is_string() {
                            let entry = join(path, key);
                            out.push(Violation::new(
                                &entry,
                                ViolationKind::TypeMismatch,
                                format!("{} must be a string", entry),
                            ));
                        }
                    }
                }
            }
            FieldKind::Entity(entity) => self.check_entity(*entity, value, path, out)?,
            FieldKind::ArrayOf(entity) => {
                if let Some(items) = value.as_array() {
                    for (i, item) in items.iter().enumerate() {
                        self.check_entity(*entity, item, &format!("{}[{}]", path, i), out)?;
                    }
                }
            }
            FieldKind::Any | FieldKind::String | FieldKind::Number => {}
        }

        Ok(())
    }

    fn check_entity(&self, entity: Entity, value: &Value, path: &str, out: &mut Vec<Violation>) -> AppResult<()> {
        let rules = self.registry.entity_rules(entity)?;
        match value.as_object() {
            Some(obj) => self.check_fields(rules, obj, path, out),
            None => {
                out.push(Violation::new(
                    path,
                    ViolationKind::TypeMismatch,
                    format!("{} must be an object", path),
                ));
                Ok(())
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn apply_constraint(constraint: &Constraint, value: &Value, path: &str) -> Option<Violation> {
    match constraint {
        Constraint::MinLength(min) => value
            .as_str()
            .filter(|s| s.chars().count() < *min)
            .map(|_| {
                let msg = if *min == 1 {
                    format!("{} cannot be empty", path)
                } else {
                    format!("{} must be at least {} characters", path, min)
                };
                Violation::new(path, ViolationKind::InvalidFormat, msg)
            }),
        Constraint::MaxLength(max) => value
            .as_str()
            .filter(|s| s.chars().count() > *max)
            .map(|_| {
                Violation::new(
                    path,
                    ViolationKind::InvalidFormat,
                    format!("{} must be at most {} characters", path, max),
                )
            }),
        Constraint::Format(format) => value
            .as_str()
            .filter(|s| !format.is_match(s))
            .map(|_| {
                Violation::new(
                    path,
                    ViolationKind::InvalidFormat,
                    format!("{} must be {}", path, format.describe()),
                )
            }),
        Constraint::GreaterThan(bound) => value
            .as_f64()
            .filter(|n| n <= bound)
            .map(|_| {
                Violation::new(
                    path,
                    ViolationKind::ValueOutOfRange,
                    format!("{} must be greater than {}", path, bound),
                )
            }),
        Constraint::MinValue(bound) => value
            .as_f64()
            .filter(|n| n < bound)
            .map(|_| {
                Violation::new(
                    path,
                    ViolationKind::ValueOutOfRange,
                    format!("{} must be at least {}", path, bound),
                )
            }),
        Constraint::MaxValue(bound) => value
            .as_f64()
            .filter(|n| n > bound)
            .map(|_| {
                Violation::new(
                    path,
                    ViolationKind::ValueOutOfRange,
                    format!("{} must be at most {}", path, bound),
                )
            }),
        Constraint::Count { min, max } => {
            let len = value.as_array()?.len();
            let too_many = max.is_some_and(|max| len > max);
            if len < *min || too_many {
                let expected = match max {
                    Some(max) => format!("between {} and {}", min, max),
                    None => format!("at least {}", min),
                };
                Some(Violation::new(
                    path,
                    ViolationKind::CountOutOfRange,
                    format!("{} must contain {} entries, got {}", path, expected, len),
                ))
            } else {
                None
            }
        }
    }
}
