//! Register, login, refresh, and logout flow tests

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::token::MockTokenRepository;
use crate::repositories::user::MockUserRepository;
use crate::services::auth::password::PlainTextHasher;
use crate::services::auth::{AuthService, RegisterRequest};
use crate::services::token::{TokenService, TokenServiceConfig};

type TestAuthService = AuthService<MockUserRepository, MockTokenRepository, PlainTextHasher>;

fn setup() -> TestAuthService {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let token_service = Arc::new(TokenService::new(
        tokens,
        users.clone(),
        TokenServiceConfig::default(),
    ));

    AuthService::new(users, token_service, Arc::new(PlainTextHasher))
}

fn sample_request() -> RegisterRequest {
    RegisterRequest {
        username: "jane_doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "sup3rsecret".to_string(),
        full_name: "Jane Doe".to_string(),
    }
}

#[tokio::test]
async fn test_register_returns_tokens_and_profile() {
    let service = setup();

    let response = service.register(sample_request()).await.unwrap();

    assert_eq!(response.user.email, "jane@example.com");
    assert_eq!(response.user.username, "jane_doe");
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(response.expires_in, 900);
}

#[tokio::test]
async fn test_register_rejects_taken_email() {
    let service = setup();
    service.register(sample_request()).await.unwrap();

    let mut second = sample_request();
    second.username = "other_name".to_string();
    let result = service.register(second).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::EmailTaken)
    ));
}

#[tokio::test]
async fn test_register_rejects_taken_username() {
    let service = setup();
    service.register(sample_request()).await.unwrap();

    let mut second = sample_request();
    second.email = "other@example.com".to_string();
    let result = service.register(second).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::UsernameTaken)
    ));
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let service = setup();

    let mut request = sample_request();
    request.password = "short".to_string();
    let result = service.register(request).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::ValidationErr(ValidationError::InvalidFormat { .. })
    ));
}

#[tokio::test]
async fn test_register_rejects_bad_email() {
    let service = setup();

    let mut request = sample_request();
    request.email = "not-an-email".to_string();
    let result = service.register(request).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::ValidationErr(ValidationError::InvalidEmail)
    ));
}

#[tokio::test]
async fn test_login_with_correct_credentials() {
    let service = setup();
    service.register(sample_request()).await.unwrap();

    let response = service
        .login("jane@example.com", "sup3rsecret")
        .await
        .unwrap();

    assert_eq!(response.user.email, "jane@example.com");
    assert!(!response.refresh_token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let service = setup();
    service.register(sample_request()).await.unwrap();

    let wrong_password = service.login("jane@example.com", "wr0ngpass").await;
    let unknown_email = service.login("ghost@example.com", "sup3rsecret").await;

    for result in [wrong_password, unknown_email] {
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }
}

#[tokio::test]
async fn test_refresh_after_login() {
    let service = setup();
    let login = service.register(sample_request()).await.unwrap();

    let refreshed = service.refresh(&login.refresh_token).await.unwrap();

    assert_eq!(refreshed.user.id, login.user.id);
    assert_ne!(refreshed.refresh_token, login.refresh_token);
}

#[tokio::test]
async fn test_logout_then_refresh_fails() {
    let service = setup();
    let login = service.register(sample_request()).await.unwrap();

    assert!(service.logout(&login.refresh_token).await.unwrap());

    let result = service.refresh(&login.refresh_token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::Invalid)
    ));
}

#[tokio::test]
async fn test_logout_all_revokes_every_session() {
    let service = setup();
    let first = service.register(sample_request()).await.unwrap();
    let second = service
        .login("jane@example.com", "sup3rsecret")
        .await
        .unwrap();

    let revoked = service.logout_all(first.user.id).await.unwrap();
    assert_eq!(revoked, 2);

    for token in [first.refresh_token, second.refresh_token] {
        let result = service.refresh(&token).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Token(TokenError::Invalid)
        ));
    }
}
