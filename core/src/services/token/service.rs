//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};

use super::config::TokenServiceConfig;

/// Number of random bytes in an opaque refresh token (512 bits of entropy)
const REFRESH_TOKEN_BYTES: usize = 64;

/// Service pairing short-lived signed access tokens with long-lived
/// rotatable opaque refresh tokens
///
/// Refresh tokens are single-use: `refresh_tokens` consumes the presented
/// token through a conditional update and issues a replacement, so a stolen
/// token that is replayed after rotation is always reported as invalid.
/// Validity is always re-read from the repository; there is no in-memory
/// cache, which keeps revocation visible to the very next refresh attempt.
pub struct TokenService<R: TokenRepository, U: UserRepository> {
    repository: Arc<R>,
    users: Arc<U>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository, U: UserRepository> TokenService<R, U> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token repository
    /// * `users` - User lookup repository
    /// * `config` - Token service configuration
    pub fn new(repository: Arc<R>, users: Arc<U>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            users,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token pair for a user: a signed access token embedding the
    /// user's identity and a fresh opaque refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access token, refresh token, and access expiry in seconds
    /// * `Err(DomainError)` - Signing or persistence failed
    pub async fn issue_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let expires_in = self.config.access_expires_in_seconds();

        let claims = Claims::new_access_token(
            user.id,
            &user.email,
            user.role,
            expires_in,
            &self.config.issuer,
            &self.config.audience,
        );
        let access_token = self.encode_jwt(&claims)?;
        let refresh_token = self.generate_refresh_token(user.id).await?;

        info!(user_id = %user.id, "issued token pair");

        Ok(TokenPair::new(access_token, refresh_token, expires_in))
    }

    /// Rotates a refresh token: validates the presented token, consumes it,
    /// and issues a brand-new pair for the owning user
    ///
    /// # Arguments
    ///
    /// * `presented_token` - The opaque refresh token from the client
    ///
    /// # Returns
    ///
    /// * `Ok((User, TokenPair))` - The owning user and the replacement pair
    /// * `Err(DomainError)` - `NotFound` when no record matches, `Expired`
    ///   when past expiration, `Invalid` when revoked or already rotated
    pub async fn refresh_tokens(&self, presented_token: &str) -> DomainResult<(User, TokenPair)> {
        let token_hash = hash_token(presented_token);

        let record = self
            .repository
            .find_refresh_token(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::NotFound))?;

        // Expiry wins over the revoked/used flags
        if record.is_expired() {
            return Err(DomainError::Token(TokenError::Expired));
        }

        if record.is_used {
            // Replay of a rotated token. The caller decides whether to
            // escalate (e.g. revoke the user's other sessions); the core
            // only reports the fact.
            warn!(
                user_id = %record.user_id,
                token_id = %record.id,
                "rotated refresh token presented again"
            );
            return Err(DomainError::Token(TokenError::Invalid));
        }

        if record.is_revoked {
            return Err(DomainError::Token(TokenError::Invalid));
        }

        // Conditional update: of two requests racing on the same token,
        // exactly one consumes it and proceeds to a new pair.
        if !self.repository.mark_token_used(&token_hash).await? {
            return Err(DomainError::Token(TokenError::Invalid));
        }

        let user = self
            .users
            .find_by_id(record.user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let pair = self.issue_token_pair(&user).await?;

        info!(user_id = %user.id, "rotated refresh token");

        Ok((user, pair))
    }

    /// Revokes a single refresh token
    ///
    /// Idempotent: revoking an already revoked token is not an error.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A matching record was found
    /// * `Ok(false)` - No record matches the presented token
    pub async fn revoke_refresh_token(&self, presented_token: &str) -> DomainResult<bool> {
        let token_hash = hash_token(presented_token);
        let revoked = self.repository.revoke_token(&token_hash).await?;

        if revoked {
            info!("revoked refresh token");
        }

        Ok(revoked)
    }

    /// Revokes every non-revoked refresh token of a user ("log out everywhere")
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens newly revoked
    pub async fn revoke_all_user_tokens(&self, user_id: Uuid) -> DomainResult<usize> {
        let revoked = self.repository.revoke_all_user_tokens(user_id).await?;
        info!(user_id = %user_id, revoked, "revoked all refresh tokens for user");
        Ok(revoked)
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is expired, malformed, or mis-signed
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::Expired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::NotYetValid)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Removes expired refresh tokens from storage
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens deleted
    pub async fn cleanup_expired_tokens(&self) -> DomainResult<usize> {
        self.repository.delete_expired_tokens().await
    }

    /// Generates an opaque refresh token and stores its digest
    async fn generate_refresh_token(&self, user_id: Uuid) -> DomainResult<String> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        let record = RefreshToken::new(
            user_id,
            hash_token(&token),
            self.config.refresh_token_lifetime(),
        );

        self.repository.save_refresh_token(record).await?;

        Ok(token)
    }

    /// Encodes claims into a signed JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}

/// Digest of a token value for storage and lookup
pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
