//! Token entities for JWT-based authentication with rotating refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// Fallback access token expiry when configuration is absent or unparseable
/// (900 seconds, 15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 900;

/// Fallback refresh token lifetime (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Role of the authenticated user
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - The user's email address
    /// * `role` - The user's role
    /// * `expires_in_seconds` - Access token lifetime in seconds
    /// * `issuer` - JWT issuer claim
    /// * `audience` - JWT audience claim
    pub fn new_access_token(
        user_id: Uuid,
        email: &str,
        role: UserRole,
        expires_in_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expires_in_seconds);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record persisted by the token repository
///
/// The raw opaque token is only ever held by the client; the record stores
/// its SHA-256 digest. A record is valid while it is unexpired, unrevoked,
/// and unused; rotation flips `is_used`, logout flips `is_revoked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token record
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// SHA-256 digest of the opaque token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked (logout, mass-revocation)
    pub is_revoked: bool,

    /// Whether the token has been consumed by a rotation
    pub is_used: bool,
}

impl RefreshToken {
    /// Creates a new unused, unrevoked refresh token record
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owning user's UUID
    /// * `token_hash` - The digest of the opaque token value
    /// * `lifetime` - How long the token stays valid
    pub fn new(user_id: Uuid, token_hash: String, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + lifetime,
            is_revoked: false,
            is_used: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks if the refresh token is valid
    ///
    /// A token is valid if it has not expired, has not been revoked,
    /// and has not been consumed by a rotation.
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked && !self.is_used
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }

    /// Marks the refresh token as consumed by a rotation
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }

    /// Gets the time remaining until expiration, zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client after login, register, or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque single-use refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
