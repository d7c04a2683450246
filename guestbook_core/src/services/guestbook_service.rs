use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::{Message, Submission},
    notify::{Notifier, NoopNotifier},
    store::{MemoryStore, MessageRepository},
    validation::failed_fields,
};

/// Accepts submissions and serves the feed over whichever store is configured.
#[derive(Clone)]
pub struct GuestbookService {
    repository: Arc<dyn MessageRepository>,
    notifier: Arc<dyn Notifier>,
}

impl GuestbookService {
    pub fn new(repository: Arc<dyn MessageRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { repository, notifier }
    }

    pub fn with_memory_store() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(NoopNotifier))
    }

    pub fn storage_kind(&self) -> &'static str {
        self.repository.kind()
    }

    /// Validates, stamps, stores, then notifies the owner.
    pub async fn submit(&self, submission: Submission) -> Result<Message> {
        if let Err(errors) = submission.validate() {
            warn!(fields = ?failed_fields(&errors), "rejected submission with missing fields");
            return Err(AppError::missing_fields());
        }

        let message = Message::accept(submission);
        self.repository.insert(&message).await?;
        info!(id = ?message.id, storage = self.storage_kind(), "stored message");

        self.notifier.notify(&message).await?;
        info!(id = ?message.id, "sent owner notification");

        Ok(message)
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let messages = self.repository.list_newest_first().await?;
        info!("Found {} messages", messages.len());
        Ok(messages)
    }

    pub async fn count(&self) -> Result<i64> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, message: &Message) -> Result<()> {
            self.sent.lock().push(message.clone());
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _message: &Message) -> Result<()> {
            Err(AppError::Notification("mail relay refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_submit_stores_and_notifies() {
        let store = MemoryStore::new();
        let notifier = Arc::new(RecordingNotifier::default());
        let service = GuestbookService::new(Arc::new(store.clone()), notifier.clone());

        let message = service
            .submit(Submission::new("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap();

        assert!(message.id.is_some());
        assert!(message.created_at.is_some());
        assert_eq!(store.count().await.unwrap(), 1);

        let sent = notifier.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], message);
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected_before_storage() {
        let store = MemoryStore::new();
        let notifier = Arc::new(RecordingNotifier::default());
        let service = GuestbookService::new(Arc::new(store.clone()), notifier.clone());

        let result = service.submit(Submission::new("Ada", "", "Hello")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(notifier.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_notifier_failure_fails_the_submission() {
        let store = MemoryStore::new();
        let service = GuestbookService::new(Arc::new(store.clone()), Arc::new(FailingNotifier));

        let result = service.submit(Submission::new("Ada", "ada@example.com", "Hello")).await;

        assert!(matches!(result, Err(AppError::Notification(_))));
        // The message was written before the notification attempt.
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_messages_is_newest_first() {
        let service = GuestbookService::with_memory_store();
        service.submit(Submission::new("first", "a@example.com", "1")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service.submit(Submission::new("second", "b@example.com", "2")).await.unwrap();

        let messages = service.list_messages().await.unwrap();
        assert_eq!(messages[0].name, "second");
        assert_eq!(messages[1].name, "first");
    }
}
