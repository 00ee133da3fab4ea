//! Network transport for contact submissions.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::SubmitError;
use crate::models::ContactMessage;

/// Delivers one contact message to the endpoint and reports the HTTP status.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<StatusCode, SubmitError>;
}

/// Transport posting JSON to the contact endpoint over HTTP.
#[derive(Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, message: &ContactMessage) -> Result<StatusCode, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await?;
        Ok(response.status())
    }
}
