//! Wire DTOs for the token endpoints
//!
//! Field names are camelCase on the wire; existing frontend clients depend
//! on that shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gp_core::domain::entities::token::AccessToken;

/// Response body for POST /api/generate-token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

impl From<AccessToken> for TokenResponse {
    fn from(record: AccessToken) -> Self {
        Self {
            token: record.token,
            created_at: record.created_at,
            expires_at: record.expires_at,
            used: record.used,
        }
    }
}

/// Request body for POST /api/validate-token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    pub token: String,
}

/// Response body for POST /api/validate-token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
}
