//! Input rules shared by the submit endpoint and the page's form constraints

pub mod rules;

pub use rules::*;

use validator::ValidationErrors;

/// Field names that failed, sorted so callers can report them stably.
pub fn failed_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}
