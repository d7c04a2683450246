//! The two requests the page makes

use async_trait::async_trait;
use guestbook_core::{Message, Submission};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;

#[async_trait]
pub trait GuestbookApi: Send + Sync {
    /// `GET /messages`. Any non-success status is an error.
    async fn fetch_messages(&self) -> Result<Vec<Message>, ApiError>;

    /// `POST /submit`. The body of a success response is not used.
    async fn submit(&self, submission: &Submission) -> Result<(), ApiError>;
}

/// [`GuestbookApi`] over HTTP. No retries and no timeout beyond the client's.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl GuestbookApi for HttpApi {
    async fn fetch_messages(&self) -> Result<Vec<Message>, ApiError> {
        let url = self.config.messages_url();
        debug!(%url, "fetching messages");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        let messages: Vec<Message> = response.json().await?;
        Ok(messages)
    }

    async fn submit(&self, submission: &Submission) -> Result<(), ApiError> {
        let url = self.config.submit_url();
        debug!(%url, "submitting message");

        let response = self.client.post(&url).json(submission).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // The page reads `message` off the error body. A body that is not
        // JSON, or is JSON `null`, never gets that far.
        let body = response.bytes().await?;
        let message = match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Null) => {
                return Err(ApiError::Decode("error body is null".to_string()));
            }
            Ok(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => return Err(ApiError::Decode(format!("error body: {}", e))),
        };

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
