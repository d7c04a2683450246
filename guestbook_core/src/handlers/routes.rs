//! Route table

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{health::handle_health, messages::{handle_get_messages, handle_submit}},
    AppState,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/messages", get(handle_get_messages))
        .route("/submit", post(handle_submit))
}
