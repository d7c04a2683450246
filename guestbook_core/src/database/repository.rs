use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::error::{AppError, Result};
use crate::models::{timestamp, Message};
use crate::store::MessageRepository;

/// SQLite-backed message store. `created_at` is kept as fixed-width RFC 3339
/// text, so ordering by the column is chronological.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &SqliteRow) -> Result<Message> {
        let created_at: String = row.try_get("created_at")?;
        Ok(Message {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            message: row.try_get("message")?,
            created_at: timestamp::parse_timestamp(&created_at),
        })
    }
}

#[async_trait]
impl MessageRepository for SqliteRepository {
    async fn insert(&self, message: &Message) -> Result<()> {
        let id = message
            .id
            .as_deref()
            .ok_or_else(|| AppError::Storage("message has no id".to_string()))?;
        let created_at = message
            .created_at
            .as_ref()
            .map(timestamp::format_timestamp)
            .ok_or_else(|| AppError::Storage("message has no timestamp".to_string()))?;

        sqlx::query(r#"
            INSERT INTO messages (id, name, email, message, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#)
        .bind(id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Message>> {
        let rows = sqlx::query(r#"
            SELECT id, name, email, message, created_at
            FROM messages
            ORDER BY created_at DESC
        "#)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        rows.iter().map(Self::row_to_message).collect()
    }

    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        row.try_get("count").map_err(AppError::from)
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}
