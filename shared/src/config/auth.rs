//! Authentication and JWT configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Token lifetimes are kept as duration strings with a unit suffix
/// (`m` minutes, `h` hours, `d` days) so deployments can tune them through
/// plain environment variables. Parsing happens in the token service at
/// issuance time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token lifetime as a duration string (e.g. "15m", "1h")
    pub access_token_expiration: String,

    /// Refresh token lifetime as a duration string (e.g. "7d")
    pub refresh_token_expiration: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiration: String::from("15m"),
            refresh_token_expiration: String::from("7d"),
            issuer: String::from("mercato"),
            audience: String::from("mercato-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime
    pub fn with_access_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.access_token_expiration = expiration.into();
        self
    }

    /// Set the refresh token lifetime
    pub fn with_refresh_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.refresh_token_expiration = expiration.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let access_token_expiration =
            std::env::var("JWT_ACCESS_EXPIRATION").unwrap_or_else(|_| "15m".to_string());
        let refresh_token_expiration =
            std::env::var("JWT_REFRESH_EXPIRATION").unwrap_or_else(|_| "7d".to_string());
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_bcrypt_cost);

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiration,
                refresh_token_expiration,
                issuer: String::from("mercato"),
                audience: String::from("mercato-api"),
            },
            bcrypt_cost,
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}
