//! Priced cart projection returned by the cart service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::cart::{Cart, CartItem};

/// A cart line joined with current catalog pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The underlying line item
    pub item: CartItem,

    /// Product display name at read time
    pub product_name: String,

    /// Variant display name, when the line targets a variant
    pub variant_name: Option<String>,

    /// Current effective unit price in minor units
    pub unit_price: i64,

    /// `unit_price * quantity`
    pub line_total: i64,
}

/// Cart together with its priced lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    /// The cart itself
    pub cart: Cart,

    /// Priced lines
    pub lines: Vec<CartLine>,

    /// Sum of all line totals in minor units
    pub subtotal: i64,

    /// Total number of units across lines
    pub total_quantity: u32,
}

impl CartView {
    /// Assembles a view from priced lines
    pub fn new(cart: Cart, lines: Vec<CartLine>) -> Self {
        let subtotal = lines.iter().map(|l| l.line_total).sum();
        let total_quantity = lines.iter().map(|l| l.item.quantity).sum();
        Self {
            cart,
            lines,
            subtotal,
            total_quantity,
        }
    }

    /// Whether the cart holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
