//! Server side of the contact pipeline.
//!
//! A submission fans out to two collaborators: the mail relay that notifies
//! the site owner and the store that keeps a durable record. Neither is rolled
//! back when the other fails.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{ContactMessage, ContactRecord, OutboundEmail};

/// Outbound mail collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError>;
}

/// Durable storage collaborator.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn save(&self, message: &ContactMessage) -> Result<ContactRecord, AppError>;
}

/// Accepts contact submissions and dispatches them to mail and storage.
#[derive(Clone)]
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    store: Arc<dyn ContactStore>,
    mail_from: String,
    mail_to: String,
}

impl ContactService {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        store: Arc<dyn ContactStore>,
        mail_from: impl Into<String>,
        mail_to: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            store,
            mail_from: mail_from.into(),
            mail_to: mail_to.into(),
        }
    }

    /// Reject submissions missing the fields every form variant requires.
    pub fn validate(message: &ContactMessage) -> Result<(), AppError> {
        if message.email.trim().is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        if message.message.trim().is_empty() {
            return Err(AppError::Validation("Message is required".to_string()));
        }
        Ok(())
    }

    /// Build the notification email for a submission.
    pub fn compose(&self, message: &ContactMessage) -> OutboundEmail {
        let sender = message.sender_name();
        let subject = match message.sender_subject() {
            Some(subject) => format!("New message from {}: {}", sender, subject),
            None => format!("New message from {}", sender),
        };

        let mut text = String::new();
        if let Some(name) = message.name.as_deref().filter(|n| !n.trim().is_empty()) {
            text.push_str(&format!("Name: {}\n", name));
        }
        text.push_str(&format!("Email: {}\n", message.email));
        if let Some(subject) = message.sender_subject() {
            text.push_str(&format!("Subject: {}\n", subject));
        }
        text.push_str(&format!("Message: {}", message.message));

        OutboundEmail {
            from: self.mail_from.clone(),
            to: self.mail_to.clone(),
            subject,
            text,
        }
    }

    /// Send the notification and persist the record.
    ///
    /// Succeeds only if both steps succeed. The steps run concurrently, so a
    /// failure in one does not prevent the other from taking effect.
    pub async fn submit(&self, message: &ContactMessage) -> Result<ContactRecord, AppError> {
        Self::validate(message)?;

        let email = self.compose(message);
        let (sent, saved) = tokio::join!(self.mailer.send(&email), self.store.save(message));

        // Failures were already logged where they were raised
        sent?;
        let record = saved?;
        tracing::info!(id = %record.id, "Contact submission accepted");
        Ok(record)
    }
}
