//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::AppState;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let storage = state.guestbook.storage_kind();

    if let Some(db_manager) = &state.db_manager {
        if let Err(e) = db_manager.health_check().await {
            warn!("Health check: database unavailable: {}", e);
            return unhealthy(&state, storage);
        }
    }

    match state.guestbook.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "messages": count,
                "storage": storage,
                "version": state.version,
                "timestamp": chrono::Utc::now().timestamp(),
            })),
        ),
        Err(e) => {
            warn!("Health check: store unavailable: {}", e);
            unhealthy(&state, storage)
        }
    }
}

fn unhealthy(state: &AppState, storage: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "unhealthy",
            "storage": storage,
            "version": state.version,
            "timestamp": chrono::Utc::now().timestamp(),
        })),
    )
}
