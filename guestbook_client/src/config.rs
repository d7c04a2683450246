//! Where the page finds the guestbook API

/// Base URL of the guestbook API the page talks to.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim().trim_end_matches('/').to_string();
        Self { api_base_url }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.api_base_url)
    }

    pub fn submit_url(&self) -> String {
        format!("{}/submit", self.api_base_url)
    }
}
