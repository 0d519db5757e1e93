//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT and authentication configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::default(),
        }
    }

    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::new("mysql://localhost:3306/mercato_dev"),
            auth: AuthConfig::default(),
            cors: CorsConfig::development(),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::new("mysql://prod-db:3306/mercato").with_max_connections(50),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}
