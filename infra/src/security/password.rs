//! Bcrypt implementation of the PasswordHasher trait.

use mc_core::errors::{DomainError, DomainResult};
use mc_core::services::auth::PasswordHasher;

/// Bcrypt-backed password hasher
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, password: &str, password_hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        // Minimum cost keeps the test fast
        let hasher = BcryptPasswordHasher::new(4);

        let hash = hasher.hash("sup3rsecret").unwrap();

        assert_ne!(hash, "sup3rsecret");
        assert!(hasher.verify("sup3rsecret", &hash).unwrap());
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = BcryptPasswordHasher::default();

        assert!(hasher.verify("anything", "not-a-bcrypt-hash").is_err());
    }
}
