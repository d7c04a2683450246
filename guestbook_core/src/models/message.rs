//! Wire types shared by the API and the page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_not_blank;

/// A guestbook entry.
///
/// Entries read back from the API carry a server-assigned `id`. Entries
/// built by the page right after a submission do not, and their `created_at`
/// is the visitor's clock rather than the server's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Stamps an accepted submission with a fresh id and the current time.
    pub fn accept(submission: Submission) -> Self {
        Self::accept_at(submission, Utc::now())
    }

    pub fn accept_at(submission: Submission, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            created_at: Some(created_at),
        }
    }

    /// Local stand-in for an entry the server has accepted but not echoed back.
    pub fn provisional(submission: Submission, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: submission.name,
            email: submission.email,
            message: submission.message,
            created_at: Some(created_at),
        }
    }
}

/// Body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Submission {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub message: String,
}

impl Submission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// `{ "message": ... }`, the body of the submit acknowledgement and of every
/// error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
