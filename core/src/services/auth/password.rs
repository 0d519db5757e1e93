//! Password hashing boundary

use crate::errors::DomainResult;

/// Trusted hashing primitive consumed by the auth service
///
/// Implementations wrap a vetted algorithm (bcrypt in the infrastructure
/// crate); the domain layer never sees plaintext-to-hash mechanics.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, password_hash: &str) -> DomainResult<bool>;
}

/// Transparent hasher for unit tests
#[cfg(test)]
pub struct PlainTextHasher;

#[cfg(test)]
impl PasswordHasher for PlainTextHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, password_hash: &str) -> DomainResult<bool> {
        Ok(password_hash == format!("hashed:{}", password))
    }
}
