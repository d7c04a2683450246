//! Core library for the guestbook: wire types, message storage, owner
//! notification and the HTTP routes the guestbook page talks to.

pub mod config;
pub mod database;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod services;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use database::{get_database_pool, run_migrations, DatabaseManager, SqliteRepository};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::cors_layer_from_config;
pub use middleware::logging::with_request_tracing;
pub use models::{ApiMessage, Message, Submission};
pub use notify::{notifier_from_config, LogNotifier, NoopNotifier, Notifier, OwnerEmail};
pub use services::GuestbookService;
pub use store::{MemoryStore, MessageRepository};

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub guestbook: GuestbookService,
    pub db_manager: Option<DatabaseManager>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GuestbookService::with_memory_store())
    }
}

impl AppState {
    pub fn new(guestbook: GuestbookService) -> Self {
        Self {
            app_name: "Guestbook".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            guestbook,
            db_manager: None,
        }
    }

    pub fn with_database(db_manager: DatabaseManager, notifier: Arc<dyn Notifier>) -> Self {
        let repository = SqliteRepository::new(db_manager.pool().clone());
        let guestbook = GuestbookService::new(Arc::new(repository), notifier);

        Self {
            db_manager: Some(db_manager),
            ..Self::new(guestbook)
        }
    }

    /// Builds the state the configuration asks for. A database that cannot be
    /// opened or migrated falls back to the in-memory store.
    pub async fn from_config(config: &AppConfig) -> Self {
        let notifier: Arc<dyn Notifier> = Arc::from(notifier_from_config(&config.notification));

        if config.database.is_memory() {
            info!("Using in-memory message store");
            return Self::new(GuestbookService::new(Arc::new(MemoryStore::new()), notifier));
        }

        match initialize_database(&config.database.url, config.database.max_connections).await {
            Ok(db_manager) => {
                info!("Database initialized successfully");
                Self::with_database(db_manager, notifier)
            }
            Err(e) => {
                warn!("Failed to initialize database, falling back to in-memory store: {}", e);
                Self::new(GuestbookService::new(Arc::new(MemoryStore::new()), notifier))
            }
        }
    }
}

async fn initialize_database(database_url: &str, max_connections: u32) -> Result<DatabaseManager> {
    let pool = get_database_pool(database_url, max_connections).await?;
    run_migrations(pool.clone()).await?;
    Ok(DatabaseManager::new(pool))
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(create_routes())
        .layer(cors_layer_from_config(&config.cors));

    with_request_tracing(router).with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
