//! Shared utilities and common types for the Mercato backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common type definitions (pagination, API envelopes)
//! - Validation utilities (email, username, slug)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse, PaginatedResponse, Pagination};
pub use utils::validation;
