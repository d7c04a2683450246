//! Message storage: the repository seam and the in-memory store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Message;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: &Message) -> Result<()>;
    /// Every stored message, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Message>>;
    async fn count(&self) -> Result<i64>;
    /// Short label for logs and the health report.
    fn kind(&self) -> &'static str;
}

pub(crate) fn sort_newest_first(messages: &mut [Message]) {
    // Entries without a timestamp sort last, as an empty string would.
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn insert(&self, message: &Message) -> Result<()> {
        self.messages.write().push(message.clone());
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Message>> {
        let mut messages = self.messages.read().clone();
        sort_newest_first(&mut messages);
        Ok(messages)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.messages.read().len() as i64)
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
