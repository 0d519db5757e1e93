//! Rotation and replay tests for the token service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::token::MockTokenRepository;
use crate::repositories::user::MockUserRepository;
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::service::hash_token;
use crate::services::token::{TokenService, TokenServiceConfig};

type TestService = TokenService<MockTokenRepository, MockUserRepository>;

async fn setup() -> (
    Arc<MockTokenRepository>,
    Arc<MockUserRepository>,
    TestService,
    User,
) {
    let repository = Arc::new(MockTokenRepository::new());
    let users = Arc::new(MockUserRepository::new());

    let user = User::new(
        "shopper".to_string(),
        "shopper@example.com".to_string(),
        "$2b$10$hash".to_string(),
        "Sam Shopper".to_string(),
    );
    users.put(user.clone()).await;

    let service = TokenService::new(
        repository.clone(),
        users.clone(),
        TokenServiceConfig::default(),
    );

    (repository, users, service, user)
}

#[tokio::test]
async fn test_refresh_rotates_to_a_different_token() {
    let (_repository, _users, service, user) = setup().await;

    let pair = service.issue_token_pair(&user).await.unwrap();
    let (refreshed_user, new_pair) = service.refresh_tokens(&pair.refresh_token).await.unwrap();

    assert_eq!(refreshed_user.id, user.id);
    assert_ne!(new_pair.refresh_token, pair.refresh_token);
    assert!(!new_pair.access_token.is_empty());
}

#[tokio::test]
async fn test_rotated_token_always_fails_invalid() {
    let (_repository, _users, service, user) = setup().await;

    let pair = service.issue_token_pair(&user).await.unwrap();
    service.refresh_tokens(&pair.refresh_token).await.unwrap();

    // The consumed token is unexpired and unrevoked, yet can never be
    // presented again
    for _ in 0..2 {
        let result = service.refresh_tokens(&pair.refresh_token).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Token(TokenError::Invalid)
        ));
    }
}

#[tokio::test]
async fn test_refresh_with_unknown_token_fails_not_found() {
    let (_repository, _users, service, _user) = setup().await;

    let result = service.refresh_tokens("deadbeef").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::NotFound)
    ));
}

#[tokio::test]
async fn test_expired_token_fails_expired_regardless_of_flags() {
    let (repository, _users, service, user) = setup().await;

    // Expired AND consumed AND revoked: expiry is still what gets reported
    let mut record = RefreshToken::new(user.id, hash_token("stale"), Duration::days(7));
    record.expires_at = Utc::now() - Duration::hours(1);
    record.is_used = true;
    record.is_revoked = true;
    repository.put(record).await;

    let result = service.refresh_tokens("stale").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::Expired)
    ));
}

#[tokio::test]
async fn test_revoke_all_invalidates_every_outstanding_token() {
    let (_repository, _users, service, user) = setup().await;

    let pairs = vec![
        service.issue_token_pair(&user).await.unwrap(),
        service.issue_token_pair(&user).await.unwrap(),
        service.issue_token_pair(&user).await.unwrap(),
    ];

    let revoked = service.revoke_all_user_tokens(user.id).await.unwrap();
    assert_eq!(revoked, 3);

    for pair in pairs {
        let result = service.refresh_tokens(&pair.refresh_token).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Token(TokenError::Invalid)
        ));
    }
}

#[tokio::test]
async fn test_conditional_consume_has_a_single_winner() {
    let (repository, _users, service, user) = setup().await;

    let pair = service.issue_token_pair(&user).await.unwrap();
    let digest = hash_token(&pair.refresh_token);

    // First presenter wins the conditional update, the second loses
    assert!(repository.mark_token_used(&digest).await.unwrap());
    assert!(!repository.mark_token_used(&digest).await.unwrap());

    // The loser's rotation attempt surfaces as an invalid token
    let result = service.refresh_tokens(&pair.refresh_token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::Invalid)
    ));
}

#[tokio::test]
async fn test_refresh_for_vanished_user_consumes_token() {
    let (repository, users, service, user) = setup().await;

    let pair = service.issue_token_pair(&user).await.unwrap();
    users.delete(user.id).await.unwrap();

    let result = service.refresh_tokens(&pair.refresh_token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::UserNotFound)
    ));

    // The token was consumed before the lookup; a retry cannot replay it
    let record = repository
        .find_refresh_token(&hash_token(&pair.refresh_token))
        .await
        .unwrap()
        .unwrap();
    assert!(record.is_used);
}
