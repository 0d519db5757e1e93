//! Mock implementation of CartRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::cart::{Cart, CartItem};
use crate::errors::DomainError;

use super::r#trait::CartRepository;

/// Mock cart repository backed by in-memory maps
pub struct MockCartRepository {
    carts: Arc<RwLock<HashMap<Uuid, Cart>>>,
    items: Arc<RwLock<HashMap<Uuid, CartItem>>>,
}

impl MockCartRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            carts: Arc::new(RwLock::new(HashMap::new())),
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCartRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for MockCartRepository {
    async fn create(&self, cart: Cart) -> Result<Cart, DomainError> {
        let mut carts = self.carts.write().await;
        carts.insert(cart.id, cart.clone());
        Ok(cart)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cart>, DomainError> {
        let carts = self.carts.read().await;
        Ok(carts.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Cart>, DomainError> {
        let carts = self.carts.read().await;
        Ok(carts
            .values()
            .find(|c| c.user_id == Some(user_id))
            .cloned())
    }

    async fn find_items(&self, cart_id: Uuid) -> Result<Vec<CartItem>, DomainError> {
        let items = self.items.read().await;
        let mut lines: Vec<CartItem> = items
            .values()
            .filter(|i| i.cart_id == cart_id)
            .cloned()
            .collect();
        lines.sort_by_key(|i| i.created_at);
        Ok(lines)
    }

    async fn find_item(&self, item_id: Uuid) -> Result<Option<CartItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(&item_id).cloned())
    }

    async fn find_item_by_product(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<Option<CartItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .find(|i| i.cart_id == cart_id && i.matches(product_id, variant_id))
            .cloned())
    }

    async fn save_item(&self, item: CartItem) -> Result<CartItem, DomainError> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.remove(&item_id).is_some())
    }

    async fn clear_items(&self, cart_id: Uuid) -> Result<usize, DomainError> {
        let mut items = self.items.write().await;
        let initial_count = items.len();
        items.retain(|_, item| item.cart_id != cart_id);
        Ok(initial_count - items.len())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        items.retain(|_, item| item.cart_id != id);
        drop(items);

        let mut carts = self.carts.write().await;
        Ok(carts.remove(&id).is_some())
    }
}
