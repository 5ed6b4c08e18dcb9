//! Single-value checks shared by the [`Form`](super::Form) rules.

use super::form_errors::FormErrors;
use lazy_static::lazy_static;
use regex::Regex;

pub const BLANK_MESSAGE: &str = "This field cannot be blank";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

lazy_static! {
    /// Local part of printable ASCII without spaces or '@', then a domain of
    /// dot-separated labels with at least one dot.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap();
}

pub fn min_length_message(min: usize) -> String {
    format!("This field must be at least {} characters long", min)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_email_address(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_required(value: &str, field_name: &str, errors: &mut FormErrors) {
        if is_blank(value) {
            tracing::debug!(field = %field_name, "required field is blank");
            errors.add(field_name, BLANK_MESSAGE);
        }
    }

    /// Length is counted in characters so multi-byte input is not penalised.
    pub fn validate_min_length(
        value: &str,
        field_name: &str,
        min: usize,
        errors: &mut FormErrors,
    ) -> bool {
        if value.chars().count() < min {
            tracing::debug!(field = %field_name, min, "field is too short");
            errors.add(field_name, min_length_message(min));
            return false;
        }
        true
    }

    pub fn validate_email(value: &str, field_name: &str, errors: &mut FormErrors) {
        if !is_email_address(value) {
            tracing::debug!(field = %field_name, "field is not an email address");
            errors.add(field_name, INVALID_EMAIL_MESSAGE);
        }
    }
}
