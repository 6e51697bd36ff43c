//! Contact-message entity persisted by the public contact endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message submitted through the gated contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Unique identifier for the message
    pub id: Uuid,

    /// Sender display name
    pub name: String,

    /// Sender email address
    pub email: String,

    /// Message body
    pub message: String,

    /// Timestamp when the message was received
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Creates a new message timestamped at the current instant
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let message = ContactMessage::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Hello there".to_string(),
        );

        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hello there");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ContactMessage::new("a".into(), "a@example.com".into(), "m".into());
        let b = ContactMessage::new("a".into(), "a@example.com".into(), "m".into());

        assert_ne!(a.id, b.id);
    }
}
