use super::field_validators::{is_blank, FieldValidator};
use super::form_errors::FormErrors;
use serde::Serialize;
use std::collections::BTreeMap;

/// Submitted field values. A field may be submitted more than once, so each
/// name maps to every value in submission order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<String, Vec<String>>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the values already submitted under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(key.into())
            .or_insert_with(Vec::new)
            .push(value.into());
    }

    /// Replace every value under `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// The first value submitted under `key`, or an empty string.
    pub fn get(&self, key: &str) -> &str {
        self.values(key).first().map(String::as_str).unwrap_or("")
    }

    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (key, value) in iter {
            data.add(key, value);
        }
        data
    }
}

/// One validation pass over a request's submitted values.
///
/// Rules only ever add messages, so once a rule has failed the form stays
/// invalid until it is dropped.
#[derive(Debug)]
pub struct Form<'a> {
    values: &'a FormData,
    errors: FormErrors,
}

impl<'a> Form<'a> {
    pub fn new(values: &'a FormData) -> Self {
        Form {
            values,
            errors: FormErrors::new(),
        }
    }

    pub fn values(&self) -> &'a FormData {
        self.values
    }

    /// The first submitted value for `field`, for re-displaying user input.
    pub fn get(&self, field: &str) -> &'a str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Hand the collected messages to the caller once the rules have run.
    pub fn into_errors(self) -> FormErrors {
        self.errors
    }

    /// Record a message from a check the built-in rules do not cover.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Whether `field` was submitted with a non-blank value. Records nothing.
    pub fn has(&self, field: &str) -> bool {
        !is_blank(self.values.get(field))
    }

    /// Record a blank-field message for every listed field that is missing
    /// or whitespace-only.
    pub fn required(&mut self, fields: &[&str]) {
        for field in fields {
            FieldValidator::validate_required(self.values.get(field), field, &mut self.errors);
        }
    }

    /// Check that `field` has at least `min` characters. A missing field is
    /// treated as empty. The return value only helps callers skip dependent
    /// checks; [`Form::valid`] remains the overall answer.
    pub fn min_length(&mut self, field: &str, min: usize) -> bool {
        let value = self.values.get(field);
        FieldValidator::validate_min_length(value, field, min, &mut self.errors)
    }

    /// Record an invalid-address message unless `field` holds a well-formed
    /// email address. A missing or empty field is not well-formed.
    pub fn is_email(&mut self, field: &str) {
        let value = self.values.get(field);
        FieldValidator::validate_email(value, field, &mut self.errors);
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }
}
