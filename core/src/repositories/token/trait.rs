//! Token repository trait defining the interface for access-token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::AccessToken;
use crate::errors::StoreError;

/// Repository trait for AccessToken record persistence
///
/// This trait defines the contract for the durable store that owns every
/// issued token record. The lifecycle service never caches records across
/// calls; each operation re-reads through this interface so concurrent
/// validations of the same token always observe fresh state.
///
/// All operations are atomic per record. No multi-record transactions are
/// required by the lifecycle service.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new token record
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The saved record
    /// * `Err(StoreError::DuplicateToken)` - A record with the same token
    ///   string already exists; the existing record is left untouched
    ///
    /// # Example
    /// ```no_run
    /// # use gp_core::repositories::TokenRepository;
    /// # use gp_core::domain::entities::token::AccessToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = AccessToken::new("signed-credential".to_string());
    /// let saved = repo.create(record).await?;
    /// println!("Token expires at: {}", saved.expires_at);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, record: AccessToken) -> Result<AccessToken, StoreError>;

    /// Find a record by its token string
    ///
    /// # Returns
    /// * `Ok(Some(AccessToken))` - Record found
    /// * `Ok(None)` - No record with the given token
    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError>;

    /// Mark a record as consumed and move its expiry forward
    ///
    /// Sets `used = true` and replaces `expires_at` in one atomic write.
    ///
    /// # Returns
    /// * `Ok(())` - Record updated
    /// * `Err(StoreError::NotFound)` - No record with the given token; the
    ///   store is left unchanged
    async fn mark_used(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), StoreError>;

    /// Delete a record by its token string
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - Nothing matched; deleting is idempotent
    async fn delete(&self, token: &str) -> Result<bool, StoreError>;

    /// Delete every record whose expiry lies in the past
    ///
    /// Called by the sweeper on its interval. Running twice in a row with
    /// no newly expired records is a no-op.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired(&self) -> Result<usize, StoreError>;
}
