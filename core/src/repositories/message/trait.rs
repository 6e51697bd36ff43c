//! Message repository trait for contact-message persistence.

use async_trait::async_trait;

use crate::domain::entities::message::ContactMessage;
use crate::errors::StoreError;

/// Repository trait for ContactMessage persistence
///
/// The contact endpoint is a thin collaborator of the token lifecycle: it
/// only ever appends messages, so this contract stays write-only.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new contact message
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, StoreError>;
}
