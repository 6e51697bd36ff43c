//! Wire DTOs for the contact-message endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use gp_core::domain::entities::message::ContactMessage;

/// Request body for POST /api/messages
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitMessageRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// Saved message as echoed back to the sender
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for MessageData {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: message.created_at,
        }
    }
}

/// Response body for POST /api/messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMessageResponse {
    pub message: String,
    pub data: MessageData,
}
