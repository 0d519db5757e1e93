//! Cart repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::cart::{Cart, CartItem};
use crate::errors::DomainError;

/// Repository trait for Cart and CartItem persistence operations
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Create a new cart
    async fn create(&self, cart: Cart) -> Result<Cart, DomainError>;

    /// Find a cart by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cart>, DomainError>;

    /// Find the cart owned by a user
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Cart>, DomainError>;

    /// List the line items of a cart
    async fn find_items(&self, cart_id: Uuid) -> Result<Vec<CartItem>, DomainError>;

    /// Find a line item by its unique identifier
    async fn find_item(&self, item_id: Uuid) -> Result<Option<CartItem>, DomainError>;

    /// Find the line holding a (product, variant) pairing inside a cart
    async fn find_item_by_product(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<Option<CartItem>, DomainError>;

    /// Insert or update a line item
    async fn save_item(&self, item: CartItem) -> Result<CartItem, DomainError>;

    /// Delete a line item
    async fn delete_item(&self, item_id: Uuid) -> Result<bool, DomainError>;

    /// Delete every line item of a cart
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of lines removed
    async fn clear_items(&self, cart_id: Uuid) -> Result<usize, DomainError>;

    /// Delete a cart together with its items
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
