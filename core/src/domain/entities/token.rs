//! Access-token entities for the contact-gate token lifecycle.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Validity window applied at issuance and on every consumption (15 minutes)
pub const TOKEN_WINDOW_MINUTES: i64 = 15;

/// Fixed scope carried by every issued credential
pub const ACCESS_SCOPE: &str = "portfolio";

/// Claims structure for the JWT payload
///
/// The payload is fixed: every credential carries the same scope claim.
/// There is no per-user subject; the credential itself is the identity.
/// The lifecycle service builds these from a single captured instant so
/// the embedded expiry and the record expiry always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Access scope granted by this credential
    pub access: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID; the entropy that keeps simultaneously issued credentials
    /// distinct, since every other claim is fixed or second-granular
    pub jti: String,
}

/// Access-token record persisted per issued credential
///
/// The `token` string is the signed credential itself and is unique across
/// all records for the lifetime of the record. `expires_at` is always
/// derived as `now + TOKEN_WINDOW_MINUTES` at the moment it is set and is
/// pushed forward again each time the token is consumed within its window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The signed bearer credential, unique across all records
    pub token: String,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the record is invalid; mutated on consumption
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been consumed at least once
    pub used: bool,
}

impl AccessToken {
    /// Creates a new unconsumed record for a freshly signed credential
    pub fn new(token: String) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(TOKEN_WINDOW_MINUTES);

        Self {
            token,
            created_at: now,
            expires_at,
            used: false,
        }
    }

    /// Checks if the record is past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the record is logically dead (consumed and past expiry)
    ///
    /// Dead records must never be reported as valid and are eligible for
    /// deletion, either eagerly during validation or by the sweeper.
    pub fn is_dead(&self) -> bool {
        self.used && self.is_expired()
    }
}
