//! Contact message models shared by the form client and the server handler.

use serde::{Deserialize, Serialize};

/// A message authored in the contact form.
///
/// `name` and `subject` are optional on the wire; the basic form variant
/// never sends a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Name used to address the sender, falling back to their email.
    pub fn sender_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(self.email.trim())
    }

    /// Subject line supplied by the sender, if any.
    pub fn sender_subject(&self) -> Option<&str> {
        self.subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A persisted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    /// Server-assigned RFC 3339 timestamp
    pub received_at: String,
}

/// Email handed to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_optional_fields() {
        let msg: ContactMessage =
            serde_json::from_str(r#"{"email":"a@b.com","message":"Hello"}"#).unwrap();
        assert_eq!(msg.name, None);
        assert_eq!(msg.subject, None);
        assert_eq!(msg.email, "a@b.com");
        assert_eq!(msg.message, "Hello");
    }

    #[test]
    fn test_serialize_omits_missing_name() {
        let msg = ContactMessage {
            name: None,
            email: "a@b.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "Hello".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["subject"], "Hi");
    }

    #[test]
    fn test_sender_name_falls_back_to_email() {
        let mut msg = ContactMessage {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        assert_eq!(msg.sender_name(), "a@b.com");

        msg.name = Some("   ".to_string());
        assert_eq!(msg.sender_name(), "a@b.com");

        msg.name = Some("Ada".to_string());
        assert_eq!(msg.sender_name(), "Ada");
    }
}
