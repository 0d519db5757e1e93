//! Shopping cart entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shopping cart, owned by a user or anonymous (guest checkout)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique identifier
    pub id: Uuid,

    /// Owning user; `None` for guest carts
    pub user_id: Option<Uuid>,

    /// Timestamp when the cart was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the cart was last updated
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a cart bound to a user
    pub fn for_user(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates an anonymous guest cart
    pub fn guest() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this cart belongs to no registered user
    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }
}

/// Line item inside a cart
///
/// A line is keyed by (product, variant); adding the same pairing again
/// merges quantities instead of creating a second line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique identifier
    pub id: Uuid,

    /// Owning cart
    pub cart_id: Uuid,

    /// Product in the line
    pub product_id: Uuid,

    /// Optional variant of the product
    pub variant_id: Option<Uuid>,

    /// Number of units
    pub quantity: u32,

    /// Timestamp when the line was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the line was last updated
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new line item
    pub fn new(cart_id: Uuid, product_id: Uuid, variant_id: Option<Uuid>, quantity: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cart_id,
            product_id,
            variant_id,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this line holds the given (product, variant) pairing
    pub fn matches(&self, product_id: Uuid, variant_id: Option<Uuid>) -> bool {
        self.product_id == product_id && self.variant_id == variant_id
    }

    /// Adds units to the line
    pub fn add_quantity(&mut self, quantity: u32) {
        self.quantity += quantity;
        self.updated_at = Utc::now();
    }

    /// Replaces the unit count
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_cart() {
        let cart = Cart::guest();
        assert!(cart.is_guest());

        let owned = Cart::for_user(Uuid::new_v4());
        assert!(!owned.is_guest());
    }

    #[test]
    fn test_item_matching_distinguishes_variants() {
        let cart = Cart::guest();
        let product_id = Uuid::new_v4();
        let variant_id = Uuid::new_v4();
        let item = CartItem::new(cart.id, product_id, Some(variant_id), 1);

        assert!(item.matches(product_id, Some(variant_id)));
        assert!(!item.matches(product_id, None));
        assert!(!item.matches(Uuid::new_v4(), Some(variant_id)));
    }

    #[test]
    fn test_quantity_merge() {
        let mut item = CartItem::new(Uuid::new_v4(), Uuid::new_v4(), None, 2);
        item.add_quantity(3);
        assert_eq!(item.quantity, 5);

        item.set_quantity(1);
        assert_eq!(item.quantity, 1);
    }
}
