//! In-memory MessageRepository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use gp_core::domain::entities::message::ContactMessage;
use gp_core::errors::StoreError;
use gp_core::repositories::MessageRepository;

/// In-memory, append-only message store
#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl InMemoryMessageRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Snapshot of all stored messages
    pub async fn all(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, StoreError> {
        self.messages.write().await.push(message.clone());
        Ok(message)
    }
}
