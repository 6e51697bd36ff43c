//! Mock implementation of MessageRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::message::ContactMessage;
use crate::errors::StoreError;

use super::r#trait::MessageRepository;

/// Mock message repository for testing
pub struct MockMessageRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl MockMessageRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored messages
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, StoreError> {
        self.messages.write().await.push(message.clone());
        Ok(message)
    }
}
