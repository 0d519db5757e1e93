//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::product::{Product, ProductStatus, ProductVariant};
use crate::errors::DomainError;

use super::r#trait::{ProductQuery, ProductRepository};

/// Mock product repository backed by an in-memory map
pub struct MockProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl MockProductRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with a product, for building test fixtures
    pub async fn put(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_query(product: &Product, query: &ProductQuery) -> bool {
    if let Some(status) = query.status {
        if product.status != status {
            return false;
        }
    }
    if let Some(brand_id) = query.brand_id {
        if product.brand_id != Some(brand_id) {
            return false;
        }
    }
    if let Some(category_id) = query.category_id {
        if !product.category_ids.contains(&category_id) {
            return false;
        }
    }
    if let Some(min) = query.min_price {
        if product.lowest_price() < min {
            return false;
        }
    }
    if let Some(max) = query.max_price {
        if product.highest_price() > max {
            return false;
        }
    }
    if let Some(ref term) = query.search {
        let term = term.to_lowercase();
        let in_name = product.name.to_lowercase().contains(&term);
        let in_description = product
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&term));
        if !in_name && !in_description {
            return false;
        }
    }
    true
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if products.values().any(|p| p.sku == product.sku) {
            return Err(DomainError::Validation {
                message: "SKU already exists".to_string(),
            });
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.sku == sku).cloned())
    }

    async fn find_variant(&self, variant_id: Uuid) -> Result<Option<ProductVariant>, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .flat_map(|p| p.variants.iter())
            .find(|v| v.id == variant_id)
            .cloned())
    }

    async fn search(&self, query: &ProductQuery) -> Result<(Vec<Product>, u64), DomainError> {
        let products = self.products.read().await;
        let mut matched: Vec<Product> = products
            .values()
            .filter(|p| matches_query(p, query))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(query.pagination.offset() as usize)
            .take(query.pagination.limit() as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| {
                p.status == ProductStatus::Published && p.category_ids.contains(&category_id)
            })
            .cloned()
            .collect())
    }

    async fn find_by_brand(&self, brand_id: Uuid) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.status == ProductStatus::Published && p.brand_id == Some(brand_id))
            .cloned()
            .collect())
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(DomainError::NotFound {
                resource: format!("product {}", product.id),
            });
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }

    async fn count_by_brand(&self, brand_id: Uuid) -> Result<u64, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.brand_id == Some(brand_id))
            .count() as u64)
    }

    async fn count_by_category(&self, category_id: Uuid) -> Result<u64, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.category_ids.contains(&category_id))
            .count() as u64)
    }
}
