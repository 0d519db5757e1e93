//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and security contracts
//! defined in `mc_core`:
//! - **Database**: MySQL repositories using SQLx, plus pool management
//! - **Security**: bcrypt password hashing behind the `PasswordHasher` trait

pub mod database;
pub mod security;

use thiserror::Error;

// Re-export commonly used types
pub use database::connection::DatabasePool;
pub use database::mysql::{
    MySqlCategoryRepository, MySqlTokenRepository, MySqlUserRepository,
};
pub use security::BcryptPasswordHasher;

/// Errors raised while wiring infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
