//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user from the repository
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Check if a user exists with the given username
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
