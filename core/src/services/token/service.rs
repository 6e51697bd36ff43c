//! Main token lifecycle service implementation

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::token::{AccessToken, Claims, ACCESS_SCOPE};
use crate::errors::{DomainError, StoreError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Outcome of a validation call
///
/// Validation never raises on a malformed or unknown credential; it always
/// resolves to one of these tags. Storage transport failures are kept
/// distinct from plain invalidity so the boundary layer can choose its own
/// HTTP mapping instead of the core collapsing the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Credential accepted; the record was consumed or its window extended
    Valid,
    /// Credential rejected (malformed, unknown, or past its grace window)
    Invalid,
    /// The store could not be reached; the token was not consumed
    StoreUnavailable,
}

/// Service owning issuance and the validate-and-consume state machine
///
/// The service holds no record state of its own: every call goes back to
/// the repository, so concurrent validations of the same token are
/// serialized only by the store's per-record atomic writes.
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        // The embedded expiry is exact; no clock-skew leeway
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a fresh credential and persists its record
    ///
    /// The claim payload is fixed and the expiry is always derived from the
    /// configured window at the moment of issuance; callers supply nothing.
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The persisted record, never pre-consumed
    /// * `Err(DomainError)` - Signing failure, duplicate token (should not
    ///   happen under normal entropy, surfaced rather than overwritten), or
    ///   store transport failure
    pub async fn issue(&self) -> Result<AccessToken, DomainError> {
        let now = Utc::now();
        let claims = Claims {
            access: ACCESS_SCOPE.to_string(),
            iat: now.timestamp(),
            exp: (now + self.window()).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = self.encode_jwt(&claims)?;
        let record = AccessToken {
            token,
            created_at: now,
            expires_at: now + self.window(),
            used: false,
        };

        let saved = self.repository.create(record).await?;
        debug!(expires_at = %saved.expires_at, "issued access token");
        Ok(saved)
    }

    /// Validates a credential and applies the consumption state machine
    ///
    /// Policy, in order:
    /// 1. Structural check: signature and embedded expiry, independent of
    ///    storage. Failure deletes any matching record best-effort and
    ///    answers `Invalid`.
    /// 2. Unknown token (already swept or never issued) answers `Invalid`.
    /// 3. A consumed record past its expiry is deleted and answers
    ///    `Invalid`; the grace window is exhausted.
    /// 4. A consumed record still inside its window gets the window pushed
    ///    forward again and answers `Valid`. Each successful re-validation
    ///    therefore keeps the token alive for another full window.
    /// 5. An unconsumed record transitions to consumed with a fresh window
    ///    and answers `Valid`.
    ///
    /// A store failure during the required write answers `StoreUnavailable`
    /// and the call must be treated as not having consumed the token.
    pub async fn validate(&self, token: &str) -> ValidationOutcome {
        if let Err(err) = decode::<Claims>(token, &self.decoding_key, &self.validation) {
            debug!(error = %err, "credential failed structural check");
            // A record backing an untrusted credential must not linger
            if let Err(err) = self.repository.delete(token).await {
                warn!(error = %err, "cleanup delete failed for rejected credential");
            }
            return ValidationOutcome::Invalid;
        }

        let record = match self.repository.find_by_token(token).await {
            Ok(Some(record)) => record,
            Ok(None) => return ValidationOutcome::Invalid,
            Err(err) => {
                warn!(error = %err, "store lookup failed during validation");
                return ValidationOutcome::StoreUnavailable;
            }
        };

        if record.is_dead() {
            if let Err(err) = self.repository.delete(token).await {
                warn!(error = %err, "failed to delete dead token record");
            }
            return ValidationOutcome::Invalid;
        }

        // First use and in-window re-use share the same transition: mark
        // consumed and slide the expiry forward a full window.
        match self.repository.mark_used(token, Utc::now() + self.window()).await {
            Ok(()) => ValidationOutcome::Valid,
            // Lost a race with the sweeper; the record is gone
            Err(StoreError::NotFound) => ValidationOutcome::Invalid,
            Err(err) => {
                warn!(error = %err, "store update failed during validation");
                ValidationOutcome::StoreUnavailable
            }
        }
    }

    /// Encodes claims into a signed JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    fn window(&self) -> Duration {
        Duration::minutes(self.config.window_minutes)
    }
}
