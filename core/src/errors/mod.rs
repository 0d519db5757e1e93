//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{
    AuthError, CartError, CatalogError, CategoryError, TokenError, ValidationError, WishlistError,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Wishlist(#[from] WishlistError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
