//! Guestbook API server: serves the message feed and accepts submissions

use anyhow::{Context, Result};
use guestbook_core::{create_app_with_config, run_server, AppConfig, AppState};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    let state = AppState::from_config(&config).await;
    log_startup(&config, &state);

    let app = create_app_with_config(state, &config);
    run_server(app, addr).await?;

    info!("Guestbook server stopped");
    Ok(())
}

fn log_startup(config: &AppConfig, state: &AppState) {
    info!("{} v{} starting on {}", state.app_name, state.version, config.bind_address());
    info!("Messages are kept in {}", state.guestbook.storage_kind());

    if config.notification.enabled {
        info!("New submissions are announced to {}", config.notification.owner_email);
    } else {
        info!("Owner notifications are off");
    }

    if config.cors.allows_any_origin() {
        info!("Accepting requests from any origin");
    } else {
        info!("Accepting requests from {:?}", config.cors.allowed_origins);
    }
}

/// `RUST_LOG` wins over the built-in filter. `LOG_FORMAT=json` switches to
/// one JSON object per event.
fn init_tracing() {
    let level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("guestbook_server={level},guestbook_core={level},tower_http=debug").into()
    });

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let events = fmt::layer().with_target(true).with_line_number(true);
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry.with(events.json()).init();
    } else {
        registry.with(events.pretty()).init();
    }
}
