//! In-memory TokenRepository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gp_core::domain::entities::token::AccessToken;
use gp_core::errors::StoreError;
use gp_core::repositories::TokenRepository;

/// In-memory token store keyed by the token string
///
/// All writes go through a single `RwLock`, which gives the per-record
/// atomicity the lifecycle service relies on.
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    records: Arc<RwLock<HashMap<String, AccessToken>>>,
}

impl InMemoryTokenRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn create(&self, record: AccessToken) -> Result<AccessToken, StoreError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token) {
            return Err(StoreError::DuplicateToken);
        }

        records.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError> {
        Ok(self.records.read().await.get(token).cloned())
    }

    async fn mark_used(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut records = self.records.write().await;

        match records.get_mut(token) {
            Some(record) => {
                record.used = true;
                record.expires_at = expires_at;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.records.write().await.remove(token).is_some())
    }

    async fn delete_expired(&self) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();
        let now = Utc::now();

        records.retain(|_, record| record.expires_at >= now);

        Ok(initial_count - records.len())
    }
}
