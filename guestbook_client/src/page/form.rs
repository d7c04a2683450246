use guestbook_core::{validation::validate_form_email, Submission};
use validator::Validate;

/// The contact form's three inputs, with the constraints a browser enforces
/// before it lets the form submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct FormFields {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "validate_form_email"))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl FormFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// The values as posted. Email inputs drop surrounding whitespace.
    pub fn to_submission(&self) -> Submission {
        Submission::new(self.name.clone(), self.email.trim(), self.message.clone())
    }
}
