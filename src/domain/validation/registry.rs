use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use super::schemas::{bank::register_bank, card::register_card, mobile::register_mobile};
use super::types::{Entity, RuleSet};
use crate::domain::payments::Operation;
use crate::shared::error::{AppError, AppResult};

static GLOBAL: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| Arc::new(RuleRegistry::new()));

/// Rule sets for every operation and sub-entity
#[derive(Debug)]
pub struct RuleRegistry {
    operations: HashMap<Operation, RuleSet>,
    entities: HashMap<Entity, RuleSet>,
}

impl RuleRegistry {
    /// Build a registry holding every supported operation
    pub fn new() -> Self {
        let mut registry = Self {
            operations: HashMap::new(),
            entities: HashMap::new(),
        };

        register_mobile(&mut registry);
        register_bank(&mut registry);
        register_card(&mut registry);

        registry
    }

    /// Shared process-wide registry, built on first use
    pub fn global() -> Arc<RuleRegistry> {
        Arc::clone(&GLOBAL)
    }

    pub(crate) fn register_operation(&mut self, operation: Operation, rules: RuleSet) {
        self.operations.insert(operation, rules);
    }

    pub(crate) fn register_entity(&mut self, entity: Entity, rules: RuleSet) {
        self.entities.insert(entity, rules);
    }

    /// Rules for an operation given by its wire name
    pub fn get_rules(&self, operation: &str) -> AppResult<&RuleSet> {
        let op: Operation = operation.parse().map_err(|_| AppError::UnknownOperation {
            operation: operation.to_string(),
        })?;
        self.rules_for(op)
    }

    pub fn rules_for(&self, operation: Operation) -> AppResult<&RuleSet> {
        self.operations
            .get(&operation)
            .ok_or_else(|| AppError::UnknownOperation {
                operation: operation.as_str().to_string(),
            })
    }

    pub fn entity_rules(&self, entity: Entity) -> AppResult<&RuleSet> {
        self.entities
            .get(&entity)
            .ok_or_else(|| AppError::Internal(format!("No rules registered for {:?}", entity)))
    }

    /// Registered operations in declaration order
    pub fn operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.operations.contains_key(op))
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
