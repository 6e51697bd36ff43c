//! MySQL implementation of the TokenRepository trait.
//!
//! Access-token records are stored verbatim in the `access_tokens` table;
//! the token column carries a unique index, which is what turns a forced
//! collision into `StoreError::DuplicateToken` instead of an overwrite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gp_core::domain::entities::token::AccessToken;
use gp_core::errors::StoreError;
use gp_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an AccessToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<AccessToken, StoreError> {
        Ok(AccessToken {
            token: row.try_get("token").map_err(StoreError::unavailable)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(StoreError::unavailable)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(StoreError::unavailable)?,
            used: row.try_get("used").map_err(StoreError::unavailable)?,
        })
    }

    fn map_create_error(err: sqlx::Error) -> StoreError {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateToken,
            _ => StoreError::unavailable(err),
        }
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn create(&self, record: AccessToken) -> Result<AccessToken, StoreError> {
        let query = r#"
            INSERT INTO access_tokens (token, created_at, expires_at, used)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&record.token)
            .bind(record.created_at)
            .bind(record.expires_at)
            .bind(record.used)
            .execute(&self.pool)
            .await
            .map_err(Self::map_create_error)?;

        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError> {
        let query = r#"
            SELECT token, created_at, expires_at, used
            FROM access_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), StoreError> {
        let query = r#"
            UPDATE access_tokens
            SET used = TRUE, expires_at = ?
            WHERE token = ?
        "#;

        let result = sqlx::query(query)
            .bind(expires_at)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM access_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> Result<usize, StoreError> {
        let result = sqlx::query("DELETE FROM access_tokens WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(result.rows_affected() as usize)
    }
}
