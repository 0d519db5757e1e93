//! Configuration for the token service

use chrono::Duration;

use mc_shared::config::JwtConfig;

use crate::domain::entities::token::{
    DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS, DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
};

/// Configuration for the token service
///
/// Token lifetimes arrive as duration strings with a unit suffix
/// (`m` minutes, `h` hours, `d` days), matching how deployments configure
/// them. They are parsed at issuance time; malformed values fall back to
/// 15 minutes for access tokens and 7 days for refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token lifetime, e.g. "15m"
    pub access_token_expiration: String,
    /// Refresh token lifetime, e.g. "7d"
    pub refresh_token_expiration: String,
    /// JWT issuer claim
    pub issuer: String,
    /// JWT audience claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiration: "15m".to_string(),
            refresh_token_expiration: "7d".to_string(),
            issuer: "mercato".to_string(),
            audience: "mercato-api".to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Access token lifetime in seconds for client consumption,
    /// 900 when the configured value is absent or unparseable
    pub fn access_expires_in_seconds(&self) -> i64 {
        parse_duration_seconds(&self.access_token_expiration)
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS)
    }

    /// Refresh token lifetime used to compute the stored `expires_at`,
    /// 7 days when the configured value is absent or unparseable
    pub fn refresh_token_lifetime(&self) -> Duration {
        match parse_duration_seconds(&self.refresh_token_expiration) {
            Some(seconds) => Duration::seconds(seconds),
            None => Duration::days(DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            access_token_expiration: jwt.access_token_expiration.clone(),
            refresh_token_expiration: jwt.refresh_token_expiration.clone(),
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        }
    }
}

/// Parse a duration string with a unit suffix into seconds
///
/// Accepts `<n>m`, `<n>h`, and `<n>d`; anything else yields `None`.
fn parse_duration_seconds(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (idx, unit) = raw.char_indices().last()?;
    let value: i64 = raw[..idx].parse().ok()?;
    if value <= 0 {
        return None;
    }

    match unit {
        'm' => Some(value * 60),
        'h' => Some(value * 60 * 60),
        'd' => Some(value * 60 * 60 * 24),
        _ => None,
    }
}
