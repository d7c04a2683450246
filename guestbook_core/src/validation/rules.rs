//! Validation rules and custom validators

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // The valid-email-address production browsers apply to <input type="email">.
    static ref FORM_EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Same acceptance as a browser's email input: required and address-shaped.
pub fn validate_form_email(email: &str) -> Result<(), ValidationError> {
    validate_not_blank(email)?;

    if !FORM_EMAIL_REGEX.is_match(email.trim()) {
        return Err(ValidationError::new("email"));
    }

    Ok(())
}
