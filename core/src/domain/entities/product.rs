//! Product entities: products, variants, and images.
//!
//! Monetary amounts are integer minor units (cents); no floating-point money.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    Published,
    OutOfStock,
    Discontinued,
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Draft
    }
}

/// Kind of product being sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Single sellable item without variants
    Simple,
    /// Item sold through its variants (size, color, ...)
    Variable,
    /// Downloadable or license product, no stock tracking semantics
    Digital,
    /// Billable service
    Service,
}

impl Default for ProductType {
    fn default() -> Self {
        ProductType::Simple
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Long description
    pub description: Option<String>,

    /// Unique stock keeping unit
    pub sku: String,

    /// Kind of product
    pub product_type: ProductType,

    /// Publication status
    pub status: ProductStatus,

    /// Regular price in minor units
    pub price: i64,

    /// Discounted price in minor units, when on sale
    pub discount_price: Option<i64>,

    /// Stock on hand for simple products
    pub quantity: u32,

    /// Owning brand, if any
    pub brand_id: Option<Uuid>,

    /// Categories this product is listed under
    pub category_ids: Vec<Uuid>,

    /// Variants for variable products
    pub variants: Vec<ProductVariant>,

    /// Gallery images
    pub images: Vec<ProductImage>,

    /// Timestamp when the product was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the product was last updated
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new draft product
    pub fn new(name: String, sku: String, price: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            sku,
            product_type: ProductType::Simple,
            status: ProductStatus::Draft,
            price,
            discount_price: None,
            quantity: 0,
            brand_id: None,
            category_ids: Vec::new(),
            variants: Vec::new(),
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this product is sold through variants
    pub fn has_variants(&self) -> bool {
        self.product_type == ProductType::Variable && !self.variants.is_empty()
    }

    /// The default gallery image, falling back to the first one
    pub fn default_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|img| img.is_default)
            .or_else(|| self.images.first())
    }

    /// Effective unit price: the discount price when set, else the regular price
    pub fn effective_price(&self) -> i64 {
        self.discount_price.unwrap_or(self.price)
    }

    /// Lowest effective price across variants, or the product price
    pub fn lowest_price(&self) -> i64 {
        if self.has_variants() {
            self.variants
                .iter()
                .map(ProductVariant::effective_price)
                .min()
                .unwrap_or_else(|| self.effective_price())
        } else {
            self.effective_price()
        }
    }

    /// Highest effective price across variants, or the product price
    pub fn highest_price(&self) -> i64 {
        if self.has_variants() {
            self.variants
                .iter()
                .map(ProductVariant::effective_price)
                .max()
                .unwrap_or_else(|| self.effective_price())
        } else {
            self.effective_price()
        }
    }

    /// Total stock across variants, or the product quantity
    pub fn total_stock(&self) -> u32 {
        if self.has_variants() {
            self.variants.iter().map(|v| v.quantity).sum()
        } else {
            self.quantity
        }
    }

    /// Whether any stock remains
    pub fn is_in_stock(&self) -> bool {
        self.total_stock() > 0
    }

    /// Whether the product is on sale
    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some_and(|d| d < self.price)
    }
}

/// Sellable variant of a variable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Unique identifier
    pub id: Uuid,

    /// Owning product
    pub product_id: Uuid,

    /// Unique stock keeping unit
    pub sku: String,

    /// Variant display name (e.g. "Black / 512 GB")
    pub name: String,

    /// Regular price in minor units
    pub price: i64,

    /// Discounted price in minor units, when on sale
    pub discount_price: Option<i64>,

    /// Stock on hand
    pub quantity: u32,

    /// Whether the variant can be sold
    pub is_active: bool,
}

impl ProductVariant {
    /// Creates a new active variant
    pub fn new(product_id: Uuid, sku: String, name: String, price: i64, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            sku,
            name,
            price,
            discount_price: None,
            quantity,
            is_active: true,
        }
    }

    /// Effective unit price: the discount price when set, else the regular price
    pub fn effective_price(&self) -> i64 {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Gallery image attached to a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Unique identifier
    pub id: Uuid,

    /// Owning product
    pub product_id: Uuid,

    /// Image URL
    pub url: String,

    /// Alternative text
    pub alt_text: Option<String>,

    /// Whether this is the primary image
    pub is_default: bool,

    /// Sort order within the gallery
    pub display_order: i32,
}

impl ProductImage {
    /// Creates a new non-default image
    pub fn new(product_id: Uuid, url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            url,
            alt_text: None,
            is_default: false,
            display_order: 0,
        }
    }
}
