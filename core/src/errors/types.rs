//! Error type definitions for authentication, token management, catalog,
//! and hierarchy operations.
//!
//! Every failure is typed and scoped to the single requested operation;
//! presentation-layer mapping to status codes happens outside this crate.

use mc_shared::types::response::ErrorResponse;
use thiserror::Error;
use uuid::Uuid;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already in use")]
    EmailTaken,

    #[error("Username is already in use")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,
}

/// Refresh and access token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// No stored record matches the presented refresh token
    #[error("Refresh token not found")]
    NotFound,

    /// The token is past its expiration timestamp
    #[error("Token has expired")]
    Expired,

    /// The stored record was revoked or already rotated
    #[error("Token is no longer valid")]
    Invalid,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Category hierarchy errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category with id '{id}' not found")]
    NotFound { id: Uuid },

    #[error("Parent category with id '{id}' not found")]
    ParentNotFound { id: Uuid },

    #[error("Category with name '{name}' already exists")]
    DuplicateName { name: String },

    /// A category may not reference itself as parent
    #[error("Category cannot be its own parent")]
    SelfParent,

    /// The proposed parent chain loops back through the category
    #[error("Circular reference detected in category hierarchy")]
    CycleDetected,

    #[error("Cannot delete category with children")]
    HasChildren,

    #[error("Cannot delete category with products")]
    HasProducts,
}

/// Product, brand, and banner errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product with id '{id}' not found")]
    ProductNotFound { id: Uuid },

    #[error("Variant with id '{id}' not found")]
    VariantNotFound { id: Uuid },

    #[error("Product with SKU '{sku}' already exists")]
    DuplicateSku { sku: String },

    #[error("Brand with id '{id}' not found")]
    BrandNotFound { id: Uuid },

    #[error("Brand with name '{name}' already exists")]
    DuplicateBrandName { name: String },

    #[error("Cannot delete brand with products")]
    BrandHasProducts,

    #[error("Banner with id '{id}' not found")]
    BannerNotFound { id: Uuid },

    #[error("Not enough stock, {available} available")]
    InsufficientStock { available: u32 },
}

/// Shopping cart errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    #[error("Cart with id '{id}' not found")]
    CartNotFound { id: Uuid },

    #[error("Cart item with id '{id}' not found")]
    ItemNotFound { id: Uuid },
}

/// Wishlist errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WishlistError {
    #[error("Wishlist with id '{id}' not found")]
    NotFound { id: Uuid },

    #[error("Wishlist item with id '{id}' not found")]
    ItemNotFound { id: Uuid },

    #[error("Item is already in the wishlist")]
    DuplicateItem,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Value must be positive: {field}")]
    NotPositive { field: String },
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::NotFound => "TOKEN_NOT_FOUND",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::Invalid => "TOKEN_INVALID",
            TokenError::InvalidFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::NotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::UsernameTaken => "USERNAME_TAKEN",
            AuthError::UserNotFound => "USER_NOT_FOUND",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert CategoryError to ErrorResponse
impl From<CategoryError> for ErrorResponse {
    fn from(err: CategoryError) -> Self {
        let error_code = match &err {
            CategoryError::NotFound { .. } => "CATEGORY_NOT_FOUND",
            CategoryError::ParentNotFound { .. } => "PARENT_CATEGORY_NOT_FOUND",
            CategoryError::DuplicateName { .. } => "DUPLICATE_CATEGORY_NAME",
            CategoryError::SelfParent => "SELF_PARENT",
            CategoryError::CycleDetected => "CYCLE_DETECTED",
            CategoryError::HasChildren => "CATEGORY_HAS_CHILDREN",
            CategoryError::HasProducts => "CATEGORY_HAS_PRODUCTS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
