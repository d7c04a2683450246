//! Page state and the two page events.

pub mod card;
pub mod feed;
pub mod form;

pub use card::{format_date_in, MessageCard, INVALID_DATE};
pub use feed::{Feed, EMPTY_TEXT, LOADING_TEXT, LOAD_ERROR_TEXT};
pub use form::FormFields;

use chrono::Utc;
use guestbook_core::{validation::failed_fields, Message, Submission};
use tracing::{error, info};
use validator::Validate;

use crate::api::GuestbookApi;
use crate::error::ApiError;

pub const SENDING_TEXT: &str = "Sending...";
pub const SENT_TEXT: &str = "Message sent successfully!";
pub const FALLBACK_ERROR_TEXT: &str = "Something went wrong.";
pub const UNREACHABLE_TEXT: &str = "Error: Could not connect to the server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    fn set(&mut self, text: impl Into<String>, tone: Tone) {
        self.text = text.into();
        self.tone = tone;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form constraints failed for these fields; nothing was sent.
    Blocked(Vec<String>),
    Sent,
    /// The API refused the submission; carries the status text shown.
    Rejected(String),
    /// No usable answer: the request failed, or the error body was unreadable.
    Unreachable,
    /// A submission is already in flight; nothing changed.
    InFlight,
}

pub struct GuestbookPage<A> {
    api: A,
    pub feed: Feed,
    pub status: StatusLine,
    pub form: FormFields,
    pub submit_disabled: bool,
}

impl<A: GuestbookApi> GuestbookPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            feed: Feed::default(),
            status: StatusLine::default(),
            form: FormFields::default(),
            submit_disabled: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Page-load event: replaces the feed with the API's messages, in the
    /// order the API returns them. Failures end in the error placeholder.
    pub async fn load_messages(&mut self) {
        self.feed = Feed::loading();

        self.feed = match self.api.fetch_messages().await {
            Ok(messages) if messages.is_empty() => Feed::empty(),
            Ok(messages) => {
                info!("Loaded {} messages", messages.len());
                Feed::Cards(messages.iter().map(MessageCard::from_message).collect())
            }
            Err(e) => {
                error!("Error loading messages: {}", e);
                Feed::load_error()
            }
        };
    }

    /// Submit event.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = self.api.submit(&submission).await;
        self.finish_submit(submission, result)
    }

    /// Checks the form constraints, then disables the button and shows the
    /// sending status. Returns what will be posted. While the button is
    /// disabled this does nothing.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitOutcome> {
        if self.submit_disabled {
            return Err(SubmitOutcome::InFlight);
        }

        if let Err(errors) = self.form.validate() {
            return Err(SubmitOutcome::Blocked(failed_fields(&errors)));
        }

        self.submit_disabled = true;
        self.status.set(SENDING_TEXT, Tone::Neutral);
        Ok(self.form.to_submission())
    }

    /// Applies the API's answer to `submission`. The button is re-enabled
    /// whatever the answer was.
    pub fn finish_submit(
        &mut self,
        submission: Submission,
        result: Result<(), ApiError>,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => {
                self.status.set(SENT_TEXT, Tone::Success);
                self.form.reset();

                // Stand-in until the next load; the server keeps its own timestamp.
                let provisional = Message::provisional(submission, Utc::now());
                self.feed.prepend(MessageCard::from_message(&provisional));
                SubmitOutcome::Sent
            }
            Err(e @ (ApiError::Network(_) | ApiError::Decode(_))) => {
                error!("Fetch error: {}", e);
                self.status.set(UNREACHABLE_TEXT, Tone::Error);
                SubmitOutcome::Unreachable
            }
            Err(e) => {
                let text = format!("Error: {}", rejection_message(&e));
                self.status.set(text.clone(), Tone::Error);
                SubmitOutcome::Rejected(text)
            }
        };

        self.submit_disabled = false;
        outcome
    }
}

fn rejection_message(error: &ApiError) -> &str {
    match error {
        ApiError::Status { message: Some(message), .. } if !message.is_empty() => message.as_str(),
        _ => FALLBACK_ERROR_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use parking_lot::Mutex;

    struct FakeApi {
        messages: Result<Vec<Message>, ApiError>,
        submit_result: Result<(), ApiError>,
        submitted: Mutex<Vec<Submission>>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                messages: Ok(Vec::new()),
                submit_result: Ok(()),
                submitted: Mutex::new(Vec::new()),
            }
        }

        fn with_messages(mut self, messages: Result<Vec<Message>, ApiError>) -> Self {
            self.messages = messages;
            self
        }

        fn with_submit_result(mut self, result: Result<(), ApiError>) -> Self {
            self.submit_result = result;
            self
        }

        fn submitted(&self) -> Vec<Submission> {
            self.submitted.lock().clone()
        }
    }

    #[async_trait]
    impl GuestbookApi for FakeApi {
        async fn fetch_messages(&self) -> Result<Vec<Message>, ApiError> {
            self.messages.clone()
        }

        async fn submit(&self, submission: &Submission) -> Result<(), ApiError> {
            self.submitted.lock().push(submission.clone());
            self.submit_result.clone()
        }
    }

    fn stored(name: &str, text: &str, day: u32) -> Message {
        Message::accept_at(
            Submission::new(name, format!("{}@example.com", name), text),
            Utc.with_ymd_and_hms(2024, 5, day, 10, 0, 0).unwrap(),
        )
    }

    fn filled_page(api: FakeApi) -> GuestbookPage<FakeApi> {
        let mut page = GuestbookPage::new(api);
        page.form = FormFields::new("Ada", "ada@example.com", "What a lovely page");
        page
    }

    #[tokio::test]
    async fn test_empty_feed_shows_placeholder() {
        let mut page = GuestbookPage::new(FakeApi::new());
        page.load_messages().await;

        assert_eq!(page.feed.placeholder_text(), Some(EMPTY_TEXT));
        assert!(page.feed.cards().is_empty());
    }

    #[tokio::test]
    async fn test_feed_renders_one_card_per_message_in_order() {
        let messages = vec![stored("Cy", "third", 3), stored("Bo", "second", 2), stored("Al", "first", 1)];
        let mut page = GuestbookPage::new(FakeApi::new().with_messages(Ok(messages.clone())));
        page.load_messages().await;

        let cards = page.feed.cards();
        assert_eq!(cards.len(), 3);
        for (card, message) in cards.iter().zip(&messages) {
            assert_eq!(card, &MessageCard::from_message(message));
            assert_eq!(card.text, message.message);
            assert_eq!(card.author, message.name);
            assert_ne!(card.date, INVALID_DATE);
        }
    }

    #[tokio::test]
    async fn test_failed_load_shows_error_placeholder() {
        for failure in [
            ApiError::Status { status: 500, message: None },
            ApiError::Network("connection refused".to_string()),
            ApiError::Decode("expected an array".to_string()),
        ] {
            let mut page = GuestbookPage::new(FakeApi::new().with_messages(Err(failure)));
            page.load_messages().await;

            assert_eq!(
                page.feed,
                Feed::Placeholder { text: LOAD_ERROR_TEXT.to_string(), tone: Tone::Error }
            );
        }
    }

    #[tokio::test]
    async fn test_begin_submit_disables_button_and_shows_sending() {
        let mut page = filled_page(FakeApi::new());

        let submission = page.begin_submit().unwrap();
        assert!(page.submit_disabled);
        assert_eq!(page.status, StatusLine { text: SENDING_TEXT.to_string(), tone: Tone::Neutral });
        assert_eq!(submission, Submission::new("Ada", "ada@example.com", "What a lovely page"));
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form_and_prepends_one_card() {
        let existing = vec![stored("Bo", "older", 2), stored("Al", "oldest", 1)];
        let mut page = filled_page(FakeApi::new().with_messages(Ok(existing)));
        page.load_messages().await;

        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(page.status, StatusLine { text: SENT_TEXT.to_string(), tone: Tone::Success });
        assert!(page.form.is_empty());
        assert!(!page.submit_disabled);

        let cards = page.feed.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].author, "Ada");
        assert_eq!(cards[0].text, "What a lovely page");
        assert_eq!(cards[1].text, "older");
        assert_eq!(cards[2].text, "oldest");
        assert_eq!(page.api().submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_successful_submit_clears_empty_placeholder() {
        let mut page = filled_page(FakeApi::new());
        page.load_messages().await;
        assert_eq!(page.feed.placeholder_text(), Some(EMPTY_TEXT));

        page.submit().await;

        assert_eq!(page.feed.placeholder_text(), None);
        assert_eq!(page.feed.cards().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_shows_server_message_verbatim() {
        let rejection = ApiError::Status {
            status: 400,
            message: Some("Missing required fields (name, email, or message)".to_string()),
        };
        let mut page = filled_page(FakeApi::new().with_submit_result(Err(rejection)));

        let outcome = page.submit().await;

        let expected = "Error: Missing required fields (name, email, or message)";
        assert_eq!(outcome, SubmitOutcome::Rejected(expected.to_string()));
        assert_eq!(page.status, StatusLine { text: expected.to_string(), tone: Tone::Error });
        assert!(!page.submit_disabled);
        // The form keeps its values and the feed is untouched.
        assert_eq!(page.form.name, "Ada");
        assert!(page.feed.cards().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        for rejection in [
            ApiError::Status { status: 500, message: None },
            ApiError::Status { status: 502, message: Some(String::new()) },
        ] {
            let mut page = filled_page(FakeApi::new().with_submit_result(Err(rejection)));
            page.submit().await;

            assert_eq!(page.status.text, "Error: Something went wrong.");
            assert_eq!(page.status.tone, Tone::Error);
            assert!(!page.submit_disabled);
        }
    }

    #[tokio::test]
    async fn test_network_failure_shows_connectivity_error_and_reenables() {
        let failure = ApiError::Network("connection refused".to_string());
        let mut page = filled_page(FakeApi::new().with_submit_result(Err(failure)));

        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Unreachable);
        assert_eq!(page.status, StatusLine { text: UNREACHABLE_TEXT.to_string(), tone: Tone::Error });
        assert!(!page.submit_disabled);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let mut page = GuestbookPage::new(FakeApi::new());
        page.form = FormFields::new("Ada", "ada-at-example", "Hello");

        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Blocked(vec!["email".to_string()]));
        assert!(page.api().submitted().is_empty());
        assert_eq!(page.status, StatusLine::default());
        assert!(!page.submit_disabled);
    }

    #[tokio::test]
    async fn test_unreadable_error_body_counts_as_unreachable() {
        let failure = ApiError::Decode("error body: expected value".to_string());
        let mut page = filled_page(FakeApi::new().with_submit_result(Err(failure)));

        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Unreachable);
        assert_eq!(page.status, StatusLine { text: UNREACHABLE_TEXT.to_string(), tone: Tone::Error });
        assert!(!page.submit_disabled);
        assert_eq!(page.form.name, "Ada");
    }

    #[tokio::test]
    async fn test_second_submit_waits_for_the_first() {
        let mut page = filled_page(FakeApi::new());

        let first = page.begin_submit().unwrap();
        let status_while_sending = page.status.clone();

        assert_eq!(page.begin_submit(), Err(SubmitOutcome::InFlight));
        assert_eq!(page.submit().await, SubmitOutcome::InFlight);
        assert_eq!(page.status, status_while_sending);
        assert!(page.submit_disabled);
        assert!(page.api().submitted().is_empty());

        assert_eq!(page.finish_submit(first, Ok(())), SubmitOutcome::Sent);
        assert!(!page.submit_disabled);
        assert!(page.begin_submit().is_ok());
    }
}
