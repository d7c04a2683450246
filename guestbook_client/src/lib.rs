//! The guestbook page: loads the feed of messages from the guestbook API,
//! submits new messages and renders both, without a browser.
//!
//! [`GuestbookPage`] owns the page state (feed, status line, form, submit
//! button) and mutates it in response to the two page events: load and
//! submit. Front ends render that state; the `guestbook` binary renders it to
//! the terminal.

pub mod api;
pub mod config;
pub mod error;
pub mod page;
pub mod render;

pub use api::{GuestbookApi, HttpApi};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use error::ApiError;
pub use page::{Feed, FormFields, GuestbookPage, MessageCard, StatusLine, SubmitOutcome, Tone};
