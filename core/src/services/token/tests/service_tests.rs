//! Unit tests for the validate-and-consume state machine

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{AccessToken, Claims, ACCESS_SCOPE, TOKEN_WINDOW_MINUTES};
use crate::errors::{DomainError, StoreError};
use crate::repositories::token::mock::MockTokenRepository;
use crate::repositories::TokenRepository;
use crate::services::token::{TokenService, TokenServiceConfig, ValidationOutcome};

use super::{dead_record, UnavailableTokenRepository, VanishingTokenRepository};

fn create_test_service() -> (TokenService<MockTokenRepository>, Arc<MockTokenRepository>) {
    let repository = Arc::new(MockTokenRepository::new());
    let config = TokenServiceConfig::with_secret("unit-test-secret");
    (TokenService::new(repository.clone(), config), repository)
}

#[tokio::test]
async fn test_issue_produces_unconsumed_record() {
    let (service, repository) = create_test_service();

    let record = service.issue().await.unwrap();

    assert!(!record.used);
    assert!(!record.token.is_empty());
    assert_eq!(
        (record.expires_at - record.created_at).num_minutes(),
        TOKEN_WINDOW_MINUTES
    );

    let stored = repository.find_by_token(&record.token).await.unwrap();
    assert_eq!(stored, Some(record));
}

#[tokio::test]
async fn test_issued_tokens_do_not_collide() {
    let (service, repository) = create_test_service();

    // Issued back to back within the same second; the jti claim keeps them apart
    let first = service.issue().await.unwrap();
    let second = service.issue().await.unwrap();

    assert_ne!(first.token, second.token);
    assert_eq!(repository.len().await, 2);
}

#[tokio::test]
async fn test_forced_collision_surfaces_duplicate_error() {
    let (service, repository) = create_test_service();

    let record = service.issue().await.unwrap();
    let collision = AccessToken::new(record.token.clone());

    let err = repository.create(collision).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateToken));

    // The original record survives untouched
    let stored = repository.find_by_token(&record.token).await.unwrap().unwrap();
    assert!(!stored.used);
}

#[tokio::test]
async fn test_first_use_consumes_and_extends_window() {
    let (service, repository) = create_test_service();
    let record = service.issue().await.unwrap();

    let before = Utc::now();
    let outcome = service.validate(&record.token).await;
    assert_eq!(outcome, ValidationOutcome::Valid);

    let stored = repository.find_by_token(&record.token).await.unwrap().unwrap();
    assert!(stored.used);
    assert!(stored.expires_at >= before + Duration::minutes(TOKEN_WINDOW_MINUTES));
}

#[tokio::test]
async fn test_revalidation_within_grace_window_succeeds() {
    let (service, repository) = create_test_service();
    let record = service.issue().await.unwrap();

    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Valid);

    let after_first = repository
        .find_by_token(&record.token)
        .await
        .unwrap()
        .unwrap()
        .expires_at;

    // Second validation immediately after the first: still valid, and the
    // window slides forward again rather than the token being burned
    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Valid);

    let after_second = repository
        .find_by_token(&record.token)
        .await
        .unwrap()
        .unwrap();
    assert!(after_second.used);
    assert!(after_second.expires_at >= after_first);
}

#[tokio::test]
async fn test_exhausted_grace_window_rejects_and_deletes() {
    let (service, repository) = create_test_service();
    let record = service.issue().await.unwrap();
    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Valid);

    // Push the record past its grace window, as if 16 minutes elapsed
    let mut stale = repository.find_by_token(&record.token).await.unwrap().unwrap();
    stale.expires_at = Utc::now() - Duration::minutes(1);
    repository.insert_raw(stale).await;

    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Invalid);
    assert_eq!(repository.find_by_token(&record.token).await.unwrap(), None);
}

#[tokio::test]
async fn test_dead_record_is_deleted_on_sight() {
    let (service, repository) = create_test_service();

    // Signed by us, so the structural check passes, but the backing record
    // is long dead
    let record = service.issue().await.unwrap();
    repository.insert_raw(dead_record(&record.token, 10)).await;

    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Invalid);
    assert_eq!(repository.len().await, 0);
}

#[tokio::test]
async fn test_unknown_token_is_invalid_without_error() {
    let (service, repository) = create_test_service();

    // Well-formed and correctly signed, but its record was already swept
    let record = service.issue().await.unwrap();
    repository.delete(&record.token).await.unwrap();

    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Invalid);
}

#[tokio::test]
async fn test_garbage_credential_is_invalid() {
    let (service, _) = create_test_service();

    assert_eq!(
        service.validate("not-a-jwt-at-all").await,
        ValidationOutcome::Invalid
    );
    assert_eq!(service.validate("").await, ValidationOutcome::Invalid);
}

#[tokio::test]
async fn test_tampered_credential_is_invalid_regardless_of_store() {
    let (service, repository) = create_test_service();
    let record = service.issue().await.unwrap();

    // Same repository, different signing secret: the stored record exists
    // but the credential no longer verifies
    let forged_service = TokenService::new(
        repository.clone(),
        TokenServiceConfig::with_secret("some-other-secret"),
    );

    assert_eq!(
        forged_service.validate(&record.token).await,
        ValidationOutcome::Invalid
    );
}

#[tokio::test]
async fn test_rejected_credential_record_is_cleaned_up() {
    let (service, repository) = create_test_service();
    let record = service.issue().await.unwrap();

    let forged_service = TokenService::new(
        repository.clone(),
        TokenServiceConfig::with_secret("some-other-secret"),
    );
    forged_service.validate(&record.token).await;

    // A record whose credential can no longer be trusted must not linger
    assert_eq!(repository.find_by_token(&record.token).await.unwrap(), None);
}

#[tokio::test]
async fn test_store_failure_is_not_collapsed_into_invalid() {
    let repository = Arc::new(UnavailableTokenRepository);
    let config = TokenServiceConfig::with_secret("unit-test-secret");
    let service = TokenService::new(repository, config);

    // Sign a structurally valid credential with the same secret
    let (healthy, _) = create_test_service();
    let record = healthy.issue().await.unwrap();

    assert_eq!(
        service.validate(&record.token).await,
        ValidationOutcome::StoreUnavailable
    );
}

#[tokio::test]
async fn test_issue_surfaces_store_failure() {
    let repository = Arc::new(UnavailableTokenRepository);
    let config = TokenServiceConfig::with_secret("unit-test-secret");
    let service = TokenService::new(repository, config);

    let err = service.issue().await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Store(StoreError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn test_record_vanishing_mid_validation_is_invalid() {
    let repository = Arc::new(VanishingTokenRepository::new());
    let config = TokenServiceConfig::with_secret("unit-test-secret");
    let service = TokenService::new(repository.clone(), config);

    let (healthy, _) = create_test_service();
    let record = healthy.issue().await.unwrap();
    repository.seed(AccessToken::new(record.token.clone())).await;

    // Lookup succeeds but the consume write loses to the sweeper
    assert_eq!(service.validate(&record.token).await, ValidationOutcome::Invalid);
}

#[tokio::test]
async fn test_credential_just_past_embedded_expiry_is_rejected() {
    let (service, repository) = create_test_service();

    // Signed with the service secret but already 30 seconds past its exp;
    // the structural check must reject it exactly at expiry, with no
    // clock-skew band that would let it claim a fresh window
    let now = Utc::now();
    let claims = Claims {
        access: ACCESS_SCOPE.to_string(),
        iat: (now - Duration::minutes(TOKEN_WINDOW_MINUTES)).timestamp(),
        exp: (now - Duration::seconds(30)).timestamp(),
        jti: Uuid::new_v4().to_string(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"unit-test-secret"),
    )
    .unwrap();

    let mut record = AccessToken::new(token.clone());
    record.expires_at = now - Duration::seconds(30);
    repository.insert_raw(record).await;

    assert_eq!(service.validate(&token).await, ValidationOutcome::Invalid);
    // The untrusted record is cleaned up rather than left for the sweep
    assert_eq!(repository.len().await, 0);
}

#[tokio::test]
async fn test_issued_credential_carries_fixed_claims() {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    let (service, _) = create_test_service();
    let record = service.issue().await.unwrap();

    let decoded = decode::<Claims>(
        &record.token,
        &DecodingKey::from_secret(b"unit-test-secret"),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(decoded.claims.access, ACCESS_SCOPE);
    assert_eq!(decoded.claims.exp - decoded.claims.iat, TOKEN_WINDOW_MINUTES * 60);
    assert!(!decoded.claims.jti.is_empty());
}
