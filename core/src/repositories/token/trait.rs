//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the
/// database. Implementations handle token storage, retrieval, rotation,
/// and revocation.
///
/// # Security Considerations
/// - Only token digests are stored, never raw token values
/// - Rotation relies on `mark_token_used` being a conditional update so a
///   race between two presenters of the same token has exactly one winner
/// - Expired tokens are cleaned up by maintenance, not on the hot path
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token to the repository
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate digest)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its digest
    ///
    /// # Arguments
    /// * `token_hash` - The digest of the presented token value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token found with given digest
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use mc_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token_hash = "sha256_digest_of_token";
    ///
    /// match repo.find_refresh_token(token_hash).await? {
    ///     Some(token) => {
    ///         if token.is_valid() {
    ///             println!("Token is valid for user: {}", token.user_id);
    ///         }
    ///     }
    ///     None => println!("Token not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Find all valid refresh tokens for a user
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Vec<RefreshToken>)` - Valid (unexpired, unrevoked, unused) tokens
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Conditionally consume a token for rotation
    ///
    /// Marks the record used only if it is currently unused and unrevoked.
    /// This is the rotation concurrency guard: of two callers racing on the
    /// same token, exactly one observes `true`.
    ///
    /// # Arguments
    /// * `token_hash` - The digest of the token being rotated
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the token
    /// * `Ok(false)` - Token absent, already used, or revoked
    /// * `Err(DomainError)` - Database error occurred
    async fn mark_token_used(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Revoke a specific refresh token
    ///
    /// Idempotent: revoking an already revoked token reports `true`.
    ///
    /// # Arguments
    /// * `token_hash` - The digest of the token to revoke
    ///
    /// # Returns
    /// * `Ok(true)` - A matching record was found and is now revoked
    /// * `Ok(false)` - Token not found
    /// * `Err(DomainError)` - Revocation failed
    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Revoke all refresh tokens for a user in one bulk update
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens newly revoked
    /// * `Err(DomainError)` - Revocation failed
    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Delete expired refresh tokens from the repository
    ///
    /// Called periodically by the cleanup task.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;

    /// Check if a token exists and is valid
    ///
    /// # Arguments
    /// * `token_hash` - The digest to check
    ///
    /// # Returns
    /// * `Ok(true)` - Token exists and is valid
    /// * `Ok(false)` - Token doesn't exist or is invalid
    /// * `Err(DomainError)` - Database error occurred
    async fn is_token_valid(&self, token_hash: &str) -> Result<bool, DomainError> {
        match self.find_refresh_token(token_hash).await? {
            Some(token) => Ok(token.is_valid()),
            None => Ok(false),
        }
    }
}
