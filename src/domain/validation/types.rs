use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payments::Operation;
use crate::shared::error::{AppError, AppResult};

/// Declarative rules for one operation or sub-entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub description: String,
    /// Evaluated in order; violations are reported in the same order.
    pub fields: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, description: impl Into<String>, fields: Vec<FieldRule>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.presence == Presence::Required)
            .map(|f| f.name.as_str())
    }
}

/// Rule for a single named field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,
    pub presence: Presence,
    pub kind: FieldKind,
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn required(name: &str, kind: FieldKind) -> Self {
        Self::with_presence(name, Presence::Required, kind)
    }

    pub fn optional(name: &str, kind: FieldKind) -> Self {
        Self::with_presence(name, Presence::Optional, kind)
    }

    pub fn disallowed(name: &str) -> Self {
        Self::with_presence(name, Presence::Disallowed, FieldKind::Any)
    }

    fn with_presence(name: &str, presence: Presence, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            presence,
            kind,
            constraints: Vec::new(),
        }
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Whether a field must, may, or must not appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Required,
    Optional,
    Disallowed,
}

/// Expected shape of a field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    Any,
    String,
    Number,
    /// String drawn from a fixed membership set
    Enum(Vec<String>),
    /// Object whose values are all strings
    StringMap,
    Entity(Entity),
    ArrayOf(Entity),
}

impl FieldKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Any => true,
            FieldKind::String | FieldKind::Enum(_) => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::StringMap | FieldKind::Entity(_) => value.is_object(),
            FieldKind::ArrayOf(_) => value.is_array(),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Any => "any value",
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
            FieldKind::Enum(_) => "a string",
            FieldKind::StringMap => "a map of strings",
            FieldKind::Entity(_) => "an object",
            FieldKind::ArrayOf(_) => "an array",
        }
    }
}

/// Structured sub-entities referenced by operation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    MobileRecipient,
    BankRecipient,
    BankAccount,
    PaymentCard,
}

impl Entity {
    pub const ALL: [Entity; 4] = [
        Entity::MobileRecipient,
        Entity::BankRecipient,
        Entity::BankAccount,
        Entity::PaymentCard,
    ];
}

/// Value constraints applied after the kind check passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    MinLength(usize),
    MaxLength(usize),
    Format(StringFormat),
    /// Strict lower bound
    GreaterThan(f64),
    MinValue(f64),
    MaxValue(f64),
    /// Inclusive element count bounds for arrays
    Count { min: usize, max: Option<usize> },
}

/// Named string shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringFormat {
    PhoneNumber,
    CurrencyCode,
    CountryCode,
    Digits,
    Date,
}

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("phone number pattern"));
static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency code pattern"));
static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("country code pattern"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern"));
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern"));

impl StringFormat {
    pub fn is_match(&self, s: &str) -> bool {
        match self {
            StringFormat::PhoneNumber => PHONE_NUMBER.is_match(s),
            StringFormat::CurrencyCode => CURRENCY_CODE.is_match(s),
            StringFormat::CountryCode => COUNTRY_CODE.is_match(s),
            StringFormat::Digits => DIGITS.is_match(s),
            StringFormat::Date => DATE.is_match(s),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            StringFormat::PhoneNumber => "a phone number",
            StringFormat::CurrencyCode => "a 3-letter ISO currency code",
            StringFormat::CountryCode => "a 2-letter ISO country code",
            StringFormat::Digits => "digits only",
            StringFormat::Date => "a YYYY-MM-DD date",
        }
    }
}

/// Category of a rejected constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    MissingField,
    TypeMismatch,
    InvalidFormat,
    ValueOutOfRange,
    CountOutOfRange,
    InvalidEnumValue,
    DisallowedField,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "MissingField",
            ViolationKind::TypeMismatch => "TypeMismatch",
            ViolationKind::InvalidFormat => "InvalidFormat",
            ViolationKind::ValueOutOfRange => "ValueOutOfRange",
            ViolationKind::CountOutOfRange => "CountOutOfRange",
            ViolationKind::InvalidEnumValue => "InvalidEnumValue",
            ViolationKind::DisallowedField => "DisallowedField",
        }
    }
}

/// One violated constraint, addressed by field path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of validating one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum ValidationResult {
    /// Parameters exactly as supplied
    Accepted(Value),
    Rejected(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Accepted(_) => &[],
            ValidationResult::Rejected(violations) => violations,
        }
    }

    /// Turn a rejection into `AppError::Rejected`
    pub fn into_result(self, operation: Operation) -> AppResult<Value> {
        match self {
            ValidationResult::Accepted(params) => Ok(params),
            ValidationResult::Rejected(violations) => Err(AppError::Rejected { operation, violations }),
        }
    }
}
