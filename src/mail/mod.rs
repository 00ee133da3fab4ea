//! Mail relay client.
//!
//! Notifications are handed to an HTTP relay that accepts
//! `{ from, to, subject, text }` and answers 2xx once the mail is queued.

use async_trait::async_trait;

use crate::contact::Mailer;
use crate::errors::AppError;
use crate::models::OutboundEmail;

/// Mailer backed by an HTTP mail relay.
#[derive(Clone)]
pub struct HttpMailRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMailRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for HttpMailRelay {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
        let response = self.client.post(&self.endpoint).json(email).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, endpoint = %self.endpoint, "Mail relay rejected message");
            return Err(AppError::Mail(format!("Mail relay returned {}", status)));
        }

        tracing::debug!(to = %email.to, "Mail relay accepted message");
        Ok(())
    }
}
