pub mod field_validators;
pub mod form;
pub mod form_errors;

// Re-export common types
pub use field_validators::FieldValidator;
pub use form::{Form, FormData};
pub use form_errors::FormErrors;
