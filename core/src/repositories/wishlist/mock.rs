//! Mock implementation of WishlistRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::wishlist::{Wishlist, WishlistItem};
use crate::errors::DomainError;

use super::r#trait::WishlistRepository;

/// Mock wishlist repository backed by in-memory maps
pub struct MockWishlistRepository {
    wishlists: Arc<RwLock<HashMap<Uuid, Wishlist>>>,
    items: Arc<RwLock<HashMap<Uuid, WishlistItem>>>,
}

impl MockWishlistRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            wishlists: Arc::new(RwLock::new(HashMap::new())),
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockWishlistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WishlistRepository for MockWishlistRepository {
    async fn create(&self, wishlist: Wishlist) -> Result<Wishlist, DomainError> {
        let mut wishlists = self.wishlists.write().await;
        wishlists.insert(wishlist.id, wishlist.clone());
        Ok(wishlist)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Wishlist>, DomainError> {
        let wishlists = self.wishlists.read().await;
        Ok(wishlists.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Wishlist>, DomainError> {
        let wishlists = self.wishlists.read().await;
        let mut result: Vec<Wishlist> = wishlists
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.is_default.cmp(&a.is_default).then(a.name.cmp(&b.name)));
        Ok(result)
    }

    async fn find_default(&self, user_id: Uuid) -> Result<Option<Wishlist>, DomainError> {
        let wishlists = self.wishlists.read().await;
        Ok(wishlists
            .values()
            .find(|w| w.user_id == user_id && w.is_default)
            .cloned())
    }

    async fn find_items(&self, wishlist_id: Uuid) -> Result<Vec<WishlistItem>, DomainError> {
        let items = self.items.read().await;
        let mut result: Vec<WishlistItem> = items
            .values()
            .filter(|i| i.wishlist_id == wishlist_id)
            .cloned()
            .collect();
        result.sort_by_key(|i| i.created_at);
        Ok(result)
    }

    async fn find_item(&self, item_id: Uuid) -> Result<Option<WishlistItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(&item_id).cloned())
    }

    async fn save_item(&self, item: WishlistItem) -> Result<WishlistItem, DomainError> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.remove(&item_id).is_some())
    }

    async fn clear_items(&self, wishlist_id: Uuid) -> Result<usize, DomainError> {
        let mut items = self.items.write().await;
        let initial_count = items.len();
        items.retain(|_, item| item.wishlist_id != wishlist_id);
        Ok(initial_count - items.len())
    }

    async fn update(&self, wishlist: Wishlist) -> Result<Wishlist, DomainError> {
        let mut wishlists = self.wishlists.write().await;

        if !wishlists.contains_key(&wishlist.id) {
            return Err(DomainError::NotFound {
                resource: format!("wishlist {}", wishlist.id),
            });
        }

        wishlists.insert(wishlist.id, wishlist.clone());
        Ok(wishlist)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        items.retain(|_, item| item.wishlist_id != id);
        drop(items);

        let mut wishlists = self.wishlists.write().await;
        Ok(wishlists.remove(&id).is_some())
    }
}
