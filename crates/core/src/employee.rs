//! Employee field rules.
//!
//! Write requests must carry a non-empty `name` and `email`. Values are kept
//! as sent, whitespace included. `phone` is free-form and optional, `salary`
//! has no range constraint, and email uniqueness is left to the store schema.

use crate::error::CoreError;

/// Entity label used in not-found errors and log fields.
pub const ENTITY_NAME: &str = "Employee";

/// Validate that an employee name is not empty.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_required("name", name)
}

/// Validate that an employee email is not empty.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_required("email", email)
}

fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
