//! JSON extractor for `POST /submit`
//!
//! Any body that cannot be read as a submission (not JSON, wrong content
//! type, missing fields) is answered like a submission with blank fields.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    Json,
};
use tracing::warn;

use crate::error::AppError;
use crate::models::Submission;

pub struct SubmissionJson(pub Submission);

#[async_trait]
impl<S> FromRequest<S> for SubmissionJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Submission>::from_request(req, state).await {
            Ok(Json(submission)) => Ok(SubmissionJson(submission)),
            Err(rejection) => {
                warn!(reason = %rejection.body_text(), "unreadable submission body");
                Err(AppError::missing_fields())
            }
        }
    }
}
