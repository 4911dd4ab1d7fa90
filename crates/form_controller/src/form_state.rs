//! Form collection and payload construction.

use std::collections::HashSet;

use shared::protocol::{FieldValue, FormPayload};

/// One successful control as the form reports it: name plus raw value.
/// Unchecked checkboxes never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEntry {
    pub name: String,
    pub value: String,
}

impl FormEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builds the `/predict` body from collected entries.
///
/// Entries whose name belongs to a checkbox become `1`; every other entry keeps its raw
/// text. Any checkbox name missing from the collection is then filled in as `0`, so each
/// checkbox appears exactly once no matter what the form reported.
pub fn build_payload<S: AsRef<str>>(entries: &[FormEntry], checkbox_names: &[S]) -> FormPayload {
    let checkboxes: HashSet<&str> = checkbox_names.iter().map(AsRef::as_ref).collect();
    let mut payload = FormPayload::new();

    for entry in entries {
        let value = if checkboxes.contains(entry.name.as_str()) {
            FieldValue::checked(true)
        } else {
            FieldValue::Text(entry.value.clone())
        };
        payload.insert(entry.name.clone(), value);
    }

    for name in checkbox_names {
        let name = name.as_ref();
        if !payload.contains(name) {
            payload.insert(name, FieldValue::checked(false));
        }
    }

    payload
}
