//! Configuration for the token service

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::TOKEN_WINDOW_MINUTES;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Validity window applied at issuance and on consumption, in minutes
    pub window_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            window_minutes: TOKEN_WINDOW_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a config with the given secret and default window
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
