//! Mock implementation of BrandRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::brand::Brand;
use crate::errors::DomainError;

use super::r#trait::BrandRepository;

/// Mock brand repository backed by an in-memory map
pub struct MockBrandRepository {
    brands: Arc<RwLock<HashMap<Uuid, Brand>>>,
}

impl MockBrandRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            brands: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with a brand, for building test fixtures
    pub async fn put(&self, brand: Brand) {
        self.brands.write().await.insert(brand.id, brand);
    }
}

impl Default for MockBrandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrandRepository for MockBrandRepository {
    async fn create(&self, brand: Brand) -> Result<Brand, DomainError> {
        let mut brands = self.brands.write().await;

        if brands.values().any(|b| b.name == brand.name) {
            return Err(DomainError::Validation {
                message: "Brand name already exists".to_string(),
            });
        }

        brands.insert(brand.id, brand.clone());
        Ok(brand)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, DomainError> {
        let brands = self.brands.read().await;
        Ok(brands.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Brand>, DomainError> {
        let brands = self.brands.read().await;
        Ok(brands.values().find(|b| b.name == name).cloned())
    }

    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Brand>, DomainError> {
        let brands = self.brands.read().await;
        let mut result: Vec<Brand> = brands
            .values()
            .filter(|b| include_inactive || b.is_active)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn update(&self, brand: Brand) -> Result<Brand, DomainError> {
        let mut brands = self.brands.write().await;

        if !brands.contains_key(&brand.id) {
            return Err(DomainError::NotFound {
                resource: format!("brand {}", brand.id),
            });
        }

        brands.insert(brand.id, brand.clone());
        Ok(brand)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut brands = self.brands.write().await;
        Ok(brands.remove(&id).is_some())
    }
}
