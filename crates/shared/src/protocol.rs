use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single payload entry: raw text for inputs and selects, 0/1 for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(u8),
    Text(String),
}

impl FieldValue {
    pub fn checked(checked: bool) -> Self {
        FieldValue::Flag(u8::from(checked))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Request body for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload {
    pub fields: BTreeMap<String, FieldValue>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later writes to the same name replace earlier ones.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Response body of `POST /predict`. Only `probability` drives rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

impl PredictionResult {
    pub fn with_probability(probability: f64) -> Self {
        Self {
            probability,
            class: None,
            risk_level: None,
        }
    }
}
