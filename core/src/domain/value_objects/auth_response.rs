//! Authentication response value objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserRole};

/// User fields safe to hand to clients; the password hash never leaves
/// the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Account role
    pub role: UserRole,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        }
    }
}

/// Authentication response containing the sanitized user and a token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user
    pub user: UserProfile,

    /// Signed JWT access token
    pub access_token: String,

    /// Opaque single-use refresh token
    pub refresh_token: String,

    /// Access token expiration in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Builds a response from a user and a freshly issued token pair
    pub fn new(user: &User, tokens: TokenPair) -> Self {
        Self {
            user: UserProfile::from(user),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_drops_password_hash() {
        let user = User::new(
            "jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$10$hash".to_string(),
            "Jane Doe".to_string(),
        );

        let response = AuthResponse::new(
            &user,
            TokenPair::new("access".to_string(), "refresh".to_string(), 900),
        );

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("$2b$10$hash"));
        assert!(json.contains("jane@example.com"));
        assert_eq!(response.expires_in, 900);
    }
}
