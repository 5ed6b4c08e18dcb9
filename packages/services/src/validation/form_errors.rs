use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by field name, in the order the rules added them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the list for `field`, creating the list if needed.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message.into());
    }

    /// The first message recorded for `field`, or an empty string.
    pub fn get(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of fields that have at least one message.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.fields
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}
