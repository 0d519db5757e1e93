//! Product repository trait and search query contract.

use async_trait::async_trait;
use uuid::Uuid;

use mc_shared::types::Pagination;

use crate::domain::entities::product::{Product, ProductStatus, ProductVariant};
use crate::errors::DomainError;

/// Filterable, paged product search parameters
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Page window
    pub pagination: Pagination,

    /// Restrict to a publication status
    pub status: Option<ProductStatus>,

    /// Restrict to a brand
    pub brand_id: Option<Uuid>,

    /// Restrict to a category
    pub category_id: Option<Uuid>,

    /// Minimum effective price in minor units
    pub min_price: Option<i64>,

    /// Maximum effective price in minor units
    pub max_price: Option<i64>,

    /// Case-insensitive name/description search term
    pub search: Option<String>,
}

/// Repository trait for Product entity persistence operations
///
/// Variants travel embedded in their product; `find_variant` exists for the
/// cart flow, which addresses variants directly.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Find a product by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Find a product by its unique SKU
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, DomainError>;

    /// Find a variant by its unique identifier
    async fn find_variant(&self, variant_id: Uuid) -> Result<Option<ProductVariant>, DomainError>;

    /// Search products with filters and pagination
    ///
    /// # Returns
    /// * `Ok((products, total))` - The page of products plus the total match count
    async fn search(&self, query: &ProductQuery) -> Result<(Vec<Product>, u64), DomainError>;

    /// List published products in a category
    async fn find_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, DomainError>;

    /// List published products of a brand
    async fn find_by_brand(&self, brand_id: Uuid) -> Result<Vec<Product>, DomainError>;

    /// Update an existing product (including embedded variants and images)
    async fn update(&self, product: Product) -> Result<Product, DomainError>;

    /// Delete a product
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count products belonging to a brand
    async fn count_by_brand(&self, brand_id: Uuid) -> Result<u64, DomainError>;

    /// Count products listed under a category
    async fn count_by_category(&self, category_id: Uuid) -> Result<u64, DomainError>;
}
