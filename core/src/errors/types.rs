//! Domain-specific error types for token and storage operations
//!
//! These enums are the internal taxonomy; the HTTP layer decides which of
//! them surface to callers and how. Validation outcomes in particular are
//! never exposed as errors on the wire.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Storage-layer errors surfaced by repository implementations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with the same token string already exists. Creation never
    /// silently overwrites; this must surface to the issuer.
    #[error("Token already exists")]
    DuplicateToken,

    /// The targeted record does not exist
    #[error("Record not found")]
    NotFound,

    /// Transport or connection failure to the persistence layer
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Wraps a transport-level failure, keeping the underlying message
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        StoreError::Unavailable {
            message: err.to_string(),
        }
    }
}
