pub mod settings;

pub use settings::{MEMORY_DATABASE_URL, AppConfig, CorsConfig, DatabaseConfig, NotificationConfig, ServerConfig};
