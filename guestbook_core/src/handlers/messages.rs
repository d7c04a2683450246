//! `GET /messages` and `POST /submit`

use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::{
    error::Result,
    extractors::SubmissionJson,
    models::ApiMessage,
    AppState,
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

pub async fn handle_get_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    info!("GET /messages");

    let messages = state.guestbook.list_messages().await?;
    Ok(Json(messages))
}

pub async fn handle_submit(
    State(state): State<AppState>,
    SubmissionJson(submission): SubmissionJson,
) -> Result<impl IntoResponse> {
    info!("POST /submit - name: {}", submission.name);

    state.guestbook.submit(submission).await?;
    Ok(Json(ApiMessage::new(SUBMIT_SUCCESS_MESSAGE)))
}
