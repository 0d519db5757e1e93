//! Wishlist repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::wishlist::{Wishlist, WishlistItem};
use crate::errors::DomainError;

/// Repository trait for Wishlist and WishlistItem persistence operations
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Create a new wishlist
    async fn create(&self, wishlist: Wishlist) -> Result<Wishlist, DomainError>;

    /// Find a wishlist by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Wishlist>, DomainError>;

    /// List a user's wishlists, default list first
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Wishlist>, DomainError>;

    /// Find a user's default wishlist
    async fn find_default(&self, user_id: Uuid) -> Result<Option<Wishlist>, DomainError>;

    /// List the items of a wishlist
    async fn find_items(&self, wishlist_id: Uuid) -> Result<Vec<WishlistItem>, DomainError>;

    /// Find an item by its unique identifier
    async fn find_item(&self, item_id: Uuid) -> Result<Option<WishlistItem>, DomainError>;

    /// Insert a wishlist item
    async fn save_item(&self, item: WishlistItem) -> Result<WishlistItem, DomainError>;

    /// Delete a wishlist item
    async fn delete_item(&self, item_id: Uuid) -> Result<bool, DomainError>;

    /// Delete every item of a wishlist
    async fn clear_items(&self, wishlist_id: Uuid) -> Result<usize, DomainError>;

    /// Update an existing wishlist
    async fn update(&self, wishlist: Wishlist) -> Result<Wishlist, DomainError>;

    /// Delete a wishlist together with its items
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
