//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::AccessToken;
use crate::errors::StoreError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
pub struct MockTokenRepository {
    records: Arc<RwLock<HashMap<String, AccessToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Insert a record directly, bypassing the duplicate check
    pub async fn insert_raw(&self, record: AccessToken) {
        self.records
            .write()
            .await
            .insert(record.token.clone(), record);
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn create(&self, record: AccessToken) -> Result<AccessToken, StoreError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token) {
            return Err(StoreError::DuplicateToken);
        }

        records.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(token).cloned())
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
        let mut records = self.records.write().await;
        Ok(records.remove(token).is_some())
    }

    async fn delete_expired(&self) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();
        let now = Utc::now();

        records.retain(|_, record| record.expires_at >= now);

        Ok(initial_count - records.len())
    }
}
