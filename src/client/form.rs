//! Contact form state and submission flow.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{ContactTransport, Notification, Notifier};
use crate::models::ContactMessage;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const UNREACHABLE_MESSAGE: &str = "An error occurred. Please try again later.";

/// Which field set the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Email, subject and message
    #[default]
    Basic,
    /// Adds the sender's name
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

/// Why a submission did not succeed.
#[derive(Debug)]
pub enum SubmitError {
    /// Required fields are empty or malformed; nothing was sent
    Validation(Vec<FormField>),
    /// A submission is already in flight
    Busy,
    /// The endpoint could not be reached
    Transport(String),
    /// The endpoint answered with a non-success status
    Status(StatusCode),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(fields) => {
                let ids: Vec<&str> = fields.iter().map(FormField::id).collect();
                write!(f, "invalid fields: {}", ids.join(", "))
            }
            SubmitError::Busy => write!(f, "a submission is already in progress"),
            SubmitError::Transport(msg) => write!(f, "transport error: {}", msg),
            SubmitError::Status(status) => write!(f, "endpoint returned {}", status),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Contact request failed: {:?}", err);
        SubmitError::Transport(err.to_string())
    }
}

/// Values bound to the contact form controls.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    variant: FormVariant,
    name: String,
    email: String,
    subject: String,
    message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Fields shown and required by this variant, in display order.
    pub fn required_fields(&self) -> &'static [FormField] {
        match self.variant {
            FormVariant::Basic => &[FormField::Email, FormField::Subject, FormField::Message],
            FormVariant::Extended => &[
                FormField::Name,
                FormField::Email,
                FormField::Subject,
                FormField::Message,
            ],
        }
    }

    /// True while a request is in flight; the form should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_empty(&self) -> bool {
        [FormField::Name, FormField::Email, FormField::Subject, FormField::Message]
            .iter()
            .all(|f| self.value(*f).is_empty())
    }

    /// Check required fields before anything is sent.
    ///
    /// Whitespace-only values count as empty, matching the server, which
    /// rejects a blank `email` or `message` with 400.
    pub fn validate(&self) -> Result<(), SubmitError> {
        let invalid: Vec<FormField> = self
            .required_fields()
            .iter()
            .copied()
            .filter(|field| {
                let value = self.value(*field).trim();
                value.is_empty() || (*field == FormField::Email && !looks_like_email(value))
            })
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::Validation(invalid))
        }
    }

    /// Payload sent to the endpoint.
    pub fn to_message(&self) -> ContactMessage {
        let name = match self.variant {
            FormVariant::Extended => Some(self.name.trim().to_string()),
            FormVariant::Basic => None,
        };
        ContactMessage {
            name,
            email: self.email.trim().to_string(),
            subject: Some(self.subject.trim().to_string()),
            message: self.message.clone(),
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }

    /// Validate and send the form.
    ///
    /// Invalid input returns before any request and without a notification.
    /// Otherwise exactly one request is made and exactly one notification is
    /// raised; fields are cleared only on success.
    pub async fn submit<T, N>(&mut self, transport: &T, notifier: &mut N) -> Result<(), SubmitError>
    where
        T: ContactTransport + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.submitting {
            return Err(SubmitError::Busy);
        }
        self.validate()?;

        let message = self.to_message();
        self.submitting = true;
        let result = transport.send(&message).await;
        self.submitting = false;

        match result {
            Ok(status) if status.is_success() => {
                notifier.notify(Notification::success(SENT_MESSAGE));
                self.clear();
                Ok(())
            }
            Ok(status) => {
                tracing::warn!(%status, "Contact endpoint rejected submission");
                notifier.notify(Notification::error(REJECTED_MESSAGE));
                Err(SubmitError::Status(status))
            }
            Err(e) => {
                notifier.notify(Notification::error(UNREACHABLE_MESSAGE));
                Err(e)
            }
        }
    }
}

/// Address shape check matching `<input type="email">`: one `@`, a
/// non-empty local part and non-empty domain labels. Dotless hosts such as
/// `owner@localhost` are valid.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}
