//! Main authentication service implementation

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mc_shared::utils::validation;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::PasswordHasher;

/// Fields for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Plaintext password, hashed before it ever reaches a repository
    pub password: String,
    /// Display name
    pub full_name: String,
}

/// Authentication service for the register/login/refresh/logout flow
pub struct AuthService<U, R, H>
where
    U: UserRepository,
    R: TokenRepository,
    H: PasswordHasher,
{
    /// User repository for account lookups and creation
    user_repository: Arc<U>,
    /// Token service for credential issuance and rotation
    token_service: Arc<TokenService<R, U>>,
    /// Password hashing primitive
    password_hasher: Arc<H>,
}

impl<U, R, H> AuthService<U, R, H>
where
    U: UserRepository,
    R: TokenRepository,
    H: PasswordHasher,
{
    /// Creates a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for token issuance and rotation
    /// * `password_hasher` - Password hashing primitive
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<R, U>>,
        password_hasher: Arc<H>,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    /// Registers a new customer account and signs it in
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The sanitized user plus a fresh token pair
    /// * `Err(DomainError)` - Validation failure, or email/username taken
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<AuthResponse> {
        if !validation::is_valid_email(&request.email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }
        if !validation::is_valid_username(&request.username) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }));
        }
        if !validation::is_valid_password(&request.password) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidFormat {
                field: "password".to_string(),
            }));
        }

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(DomainError::Auth(AuthError::EmailTaken));
        }
        if self
            .user_repository
            .exists_by_username(&request.username)
            .await?
        {
            return Err(DomainError::Auth(AuthError::UsernameTaken));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;
        let user = User::new(
            request.username,
            request.email,
            password_hash,
            request.full_name,
        );
        let user = self.user_repository.create(user).await?;

        info!(user_id = %user.id, "registered new user");

        let tokens = self.token_service.issue_token_pair(&user).await?;
        Ok(AuthResponse::new(&user, tokens))
    }

    /// Signs a user in with email and password
    ///
    /// A missing account and a wrong password are reported identically so
    /// the endpoint does not leak which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)?;
        if !password_matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        info!(user_id = %user.id, "user logged in");

        let tokens = self.token_service.issue_token_pair(&user).await?;
        Ok(AuthResponse::new(&user, tokens))
    }

    /// Exchanges a refresh token for a fresh pair, rotating the old one
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let (user, tokens) = self.token_service.refresh_tokens(refresh_token).await?;
        Ok(AuthResponse::new(&user, tokens))
    }

    /// Signs out one session by revoking its refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A matching token was revoked
    /// * `Ok(false)` - The token was unknown; nothing to do
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<bool> {
        self.token_service.revoke_refresh_token(refresh_token).await
    }

    /// Signs out every session of a user
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of sessions revoked
    pub async fn logout_all(&self, user_id: Uuid) -> DomainResult<usize> {
        self.token_service.revoke_all_user_tokens(user_id).await
    }
}
