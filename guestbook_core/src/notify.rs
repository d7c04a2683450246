//! Owner notification for accepted submissions

use async_trait::async_trait;
use tracing::info;

use crate::config::NotificationConfig;
use crate::error::Result;
use crate::models::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OwnerEmail {
    /// Composes the notification sent to (and from) the site owner.
    pub fn compose(owner: &str, message: &Message) -> Self {
        let subject = format!("New Contact Form Submission from {}", message.name);
        let body = format!(
            "You received a new message from your website contact form:\n\
             ------------------------------------------------------------\n\
             Name:    {}\n\
             Email:   {}\n\
             Message:\n\
             {}\n\
             ------------------------------------------------------------\n",
            message.name, message.email, message.message
        );

        Self {
            from: owner.to_string(),
            to: owner.to_string(),
            subject,
            body,
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &Message) -> Result<()>;
}

/// Hands the composed email to the log pipeline.
pub struct LogNotifier {
    owner: String,
}

impl LogNotifier {
    pub fn new(owner: impl Into<String>) -> Self {
        Self { owner: owner.into() }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &Message) -> Result<()> {
        let email = OwnerEmail::compose(&self.owner, message);
        info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "owner notification"
        );
        Ok(())
    }
}

pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _message: &Message) -> Result<()> {
        Ok(())
    }
}

pub fn notifier_from_config(config: &NotificationConfig) -> Box<dyn Notifier> {
    if config.enabled {
        Box::new(LogNotifier::new(config.owner_email.clone()))
    } else {
        Box::new(NoopNotifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;

    #[test]
    fn test_compose_owner_email() {
        let message = Message::accept(Submission::new("Ada", "ada@example.com", "Lovely site"));
        let email = OwnerEmail::compose("owner@example.com", &message);

        assert_eq!(email.subject, "New Contact Form Submission from Ada");
        assert_eq!(email.from, "owner@example.com");
        assert_eq!(email.to, "owner@example.com");
        assert!(email.body.contains("Name:    Ada\n"));
        assert!(email.body.contains("Email:   ada@example.com\n"));
        assert!(email.body.contains("Message:\nLovely site\n"));
    }

    #[tokio::test]
    async fn test_builtin_notifiers_succeed() {
        let message = Message::accept(Submission::new("Ada", "ada@example.com", "Hi"));

        let enabled = notifier_from_config(&NotificationConfig::default());
        assert!(enabled.notify(&message).await.is_ok());

        let disabled = notifier_from_config(&NotificationConfig {
            enabled: false,
            owner_email: String::new(),
        });
        assert!(disabled.notify(&message).await.is_ok());
    }
}
