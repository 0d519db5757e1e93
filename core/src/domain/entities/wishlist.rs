//! Wishlist entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named per-user wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    /// Unique identifier
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Display name
    pub name: String,

    /// Whether this is the user's default list
    pub is_default: bool,

    /// Timestamp when the wishlist was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the wishlist was last updated
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    /// Creates a new named wishlist
    pub fn new(user_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates the lazily-provisioned default wishlist for a user
    pub fn default_for_user(user_id: Uuid) -> Self {
        let mut wishlist = Self::new(user_id, "My Wishlist".to_string());
        wishlist.is_default = true;
        wishlist
    }
}

/// Entry in a wishlist; unique per (product, variant) within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Unique identifier
    pub id: Uuid,

    /// Owning wishlist
    pub wishlist_id: Uuid,

    /// Saved product
    pub product_id: Uuid,

    /// Optional saved variant
    pub variant_id: Option<Uuid>,

    /// Timestamp when the item was saved
    pub created_at: DateTime<Utc>,
}

impl WishlistItem {
    /// Creates a new wishlist entry
    pub fn new(wishlist_id: Uuid, product_id: Uuid, variant_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            wishlist_id,
            product_id,
            variant_id,
            created_at: Utc::now(),
        }
    }

    /// Whether this entry holds the given (product, variant) pairing
    pub fn matches(&self, product_id: Uuid, variant_id: Option<Uuid>) -> bool {
        self.product_id == product_id && self.variant_id == variant_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wishlist() {
        let user_id = Uuid::new_v4();
        let wishlist = Wishlist::default_for_user(user_id);

        assert!(wishlist.is_default);
        assert_eq!(wishlist.name, "My Wishlist");
        assert_eq!(wishlist.user_id, user_id);
    }

    #[test]
    fn test_item_matching() {
        let item = WishlistItem::new(Uuid::new_v4(), Uuid::new_v4(), None);
        assert!(item.matches(item.product_id, None));
        assert!(!item.matches(item.product_id, Some(Uuid::new_v4())));
    }
}
