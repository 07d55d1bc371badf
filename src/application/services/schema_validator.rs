use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::ContractAnalysis;

const STRING_FIELDS: [&str; 3] = ["contract_type", "risk_level", "summary"];
const LIST_FIELDS: [&str; 3] = ["parties", "key_dates", "key_terms"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    StringType,
    ListType,
    ExtraForbidden,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::StringType => "string_type",
            Self::ListType => "list_type",
            Self::ExtraForbidden => "extra_forbidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("analysis did not match expected schema: {}", summarize(.0))]
pub struct SchemaViolations(pub Vec<FieldViolation>);

impl SchemaViolations {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.field, v.kind))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a parsed model reply against the six-field analysis shape.
///
/// All violations are collected before failing so the caller sees every
/// offending field at once.
pub fn validate_contract_analysis(
    object: &Map<String, Value>,
) -> Result<ContractAnalysis, SchemaViolations> {
    let mut violations = Vec::new();

    for key in object.keys() {
        if !ContractAnalysis::FIELDS.contains(&key.as_str()) {
            violations.push(FieldViolation::new(
                key.as_str(),
                ViolationKind::ExtraForbidden,
                "Extra inputs are not permitted",
            ));
        }
    }

    let [contract_type, risk_level, summary] =
        STRING_FIELDS.map(|field| string_field(object, field, &mut violations));
    let [parties, key_dates, key_terms] =
        LIST_FIELDS.map(|field| list_field(object, field, &mut violations));

    if !violations.is_empty() {
        return Err(SchemaViolations(violations));
    }

    match (
        contract_type,
        parties,
        key_dates,
        key_terms,
        risk_level,
        summary,
    ) {
        (
            Some(contract_type),
            Some(parties),
            Some(key_dates),
            Some(key_terms),
            Some(risk_level),
            Some(summary),
        ) => Ok(ContractAnalysis {
            contract_type,
            parties,
            key_dates,
            key_terms,
            risk_level,
            summary,
        }),
        _ => Err(SchemaViolations(violations)),
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            violations.push(FieldViolation::new(
                field,
                ViolationKind::StringType,
                "Input should be a valid string",
            ));
            None
        }
        None => {
            violations.push(FieldViolation::new(
                field,
                ViolationKind::Missing,
                "Field required",
            ));
            None
        }
    }
}

fn list_field(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<String>> {
    let items = match object.get(field) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            violations.push(FieldViolation::new(
                field,
                ViolationKind::ListType,
                "Input should be a valid list",
            ));
            return None;
        }
        None => {
            violations.push(FieldViolation::new(
                field,
                ViolationKind::Missing,
                "Field required",
            ));
            return None;
        }
    };

    let before = violations.len();
    let values: Vec<String> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::String(value) => Some(value.clone()),
            _ => {
                violations.push(FieldViolation::new(
                    format!("{field}.{index}"),
                    ViolationKind::StringType,
                    "Input should be a valid string",
                ));
                None
            }
        })
        .collect();

    (violations.len() == before).then_some(values)
}
