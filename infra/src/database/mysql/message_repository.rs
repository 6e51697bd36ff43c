//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use gp_core::domain::entities::message::ContactMessage;
use gp_core::errors::StoreError;
use gp_core::repositories::MessageRepository;

/// MySQL implementation of MessageRepository
pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    /// Create a new MySQL message repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, StoreError> {
        let query = r#"
            INSERT INTO contact_messages (id, name, email, message, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(message.id.to_string())
            .bind(&message.name)
            .bind(&message.email)
            .bind(&message.message)
            .bind(message.created_at)
            .execute(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(message)
    }
}
