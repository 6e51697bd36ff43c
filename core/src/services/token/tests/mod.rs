//! Unit tests for the token lifecycle service and sweeper

mod service_tests;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::token::AccessToken;
use crate::errors::StoreError;
use crate::repositories::token::mock::MockTokenRepository;
use crate::repositories::TokenRepository;

/// Repository stub whose every operation fails with a transport error
pub(super) struct UnavailableTokenRepository;

#[async_trait]
impl TokenRepository for UnavailableTokenRepository {
    async fn create(&self, _record: AccessToken) -> Result<AccessToken, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_by_token(&self, _token: &str) -> Result<Option<AccessToken>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn mark_used(
        &self,
        _token: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn delete(&self, _token: &str) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn delete_expired(&self) -> Result<usize, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

/// Repository stub where the record vanishes between lookup and update,
/// as when the sweeper wins a race
pub(super) struct VanishingTokenRepository {
    inner: MockTokenRepository,
}

impl VanishingTokenRepository {
    pub(super) fn new() -> Self {
        Self {
            inner: MockTokenRepository::new(),
        }
    }

    pub(super) async fn seed(&self, record: AccessToken) {
        self.inner.insert_raw(record).await;
    }
}

#[async_trait]
impl TokenRepository for VanishingTokenRepository {
    async fn create(&self, record: AccessToken) -> Result<AccessToken, StoreError> {
        self.inner.create(record).await
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError> {
        self.inner.find_by_token(token).await
    }

    async fn mark_used(
        &self,
        _token: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Err(StoreError::NotFound)
    }

    async fn delete(&self, token: &str) -> Result<bool, StoreError> {
        self.inner.delete(token).await
    }

    async fn delete_expired(&self) -> Result<usize, StoreError> {
        self.inner.delete_expired().await
    }
}

/// Builds a consumed record whose grace window ran out `minutes_ago`
pub(super) fn dead_record(token: &str, minutes_ago: i64) -> AccessToken {
    let mut record = AccessToken::new(token.to_string());
    record.used = true;
    record.expires_at = Utc::now() - Duration::minutes(minutes_ago);
    record
}
