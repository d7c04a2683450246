use sqlx::{Row, SqlitePool};
use tracing::{debug, error, info};
use crate::error::{AppError, Result};

struct Migration {
    version: i64,
    name: &'static str,
    statements: &'static [&'static str],
}

/// Schema history for the guestbook database, oldest first.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_messages_table",
    statements: &[
        r#"
        CREATE TABLE messages (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX idx_messages_created_at ON messages(created_at)",
    ],
}];

pub struct MigrationManager {
    pool: SqlitePool,
}

impl MigrationManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Brings the schema up to the newest known version. Each migration
    /// runs in its own transaction together with its bookkeeping row.
    pub async fn run_migrations(&self) -> Result<()> {
        self.ensure_bookkeeping_table().await?;

        let schema_version = self.get_current_version().await?;
        let pending: Vec<&Migration> = MIGRATIONS
            .iter()
            .filter(|m| m.version > schema_version)
            .collect();

        if pending.is_empty() {
            debug!("Guestbook schema is current at version {}", schema_version);
            return Ok(());
        }

        for migration in &pending {
            info!("Migrating guestbook schema to v{} ({})", migration.version, migration.name);
            self.apply(migration).await?;
        }

        info!(
            "Guestbook schema migrated from v{} to v{}",
            schema_version,
            self.latest_version()
        );
        Ok(())
    }

    pub fn latest_version(&self) -> i64 {
        MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
    }

    pub async fn get_current_version(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COALESCE(MAX(version), 0) AS version FROM _migrations")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("version")?)
    }

    async fn ensure_bookkeeping_table(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS _migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn apply(&self, migration: &Migration) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for statement in migration.statements {
            if let Err(e) = sqlx::query(statement).execute(&mut *tx).await {
                error!("Migration v{} failed: {}", migration.version, e);
                return Err(AppError::from(e));
            }
        }

        sqlx::query("INSERT INTO _migrations (version, name) VALUES (?, ?)")
            .bind(migration.version)
            .bind(migration.name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

pub async fn run_migrations(pool: SqlitePool) -> Result<()> {
    MigrationManager::new(pool).run_migrations().await
}
