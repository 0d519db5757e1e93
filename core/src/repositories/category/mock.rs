//! Mock implementation of CategoryRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

use super::r#trait::CategoryRepository;

/// Mock category repository backed by an in-memory map
///
/// Counts `find_parent_id` calls so tests can assert whether the hierarchy
/// walk ran at all.
pub struct MockCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
    product_counts: Arc<RwLock<HashMap<Uuid, u64>>>,
    parent_lookups: AtomicUsize,
}

impl MockCategoryRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
            product_counts: Arc::new(RwLock::new(HashMap::new())),
            parent_lookups: AtomicUsize::new(0),
        }
    }

    /// Seed the repository with a category, for building test fixtures
    pub async fn put(&self, category: Category) {
        self.categories
            .write()
            .await
            .insert(category.id, category);
    }

    /// Pretend `count` products are associated with the category
    pub async fn set_product_count(&self, id: Uuid, count: u64) {
        self.product_counts.write().await.insert(id, count);
    }

    /// Number of `find_parent_id` calls observed so far
    pub fn parent_lookups(&self) -> usize {
        self.parent_lookups.load(Ordering::SeqCst)
    }
}

impl Default for MockCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_display_order(mut categories: Vec<Category>) -> Vec<Category> {
    categories.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
    categories
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;

        if categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::Validation {
                message: "Category name already exists".to_string(),
            });
        }

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    async fn find_parent_id(&self, id: Uuid) -> Result<Option<Option<Uuid>>, DomainError> {
        self.parent_lookups.fetch_add(1, Ordering::SeqCst);
        let categories = self.categories.read().await;
        Ok(categories.get(&id).map(|c| c.parent_id))
    }

    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().await;
        let filtered = categories
            .values()
            .filter(|c| include_inactive || c.is_active)
            .cloned()
            .collect();
        Ok(sorted_by_display_order(filtered))
    }

    async fn find_roots(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().await;
        let roots = categories
            .values()
            .filter(|c| c.parent_id.is_none() && c.is_active)
            .cloned()
            .collect();
        Ok(sorted_by_display_order(roots))
    }

    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().await;
        let children = categories
            .values()
            .filter(|c| c.parent_id == Some(parent_id) && c.is_active)
            .cloned()
            .collect();
        Ok(sorted_by_display_order(children))
    }

    async fn update(&self, category: Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;

        if !categories.contains_key(&category.id) {
            return Err(DomainError::NotFound {
                resource: format!("category {}", category.id),
            });
        }

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut categories = self.categories.write().await;
        Ok(categories.remove(&id).is_some())
    }

    async fn count_children(&self, id: Uuid) -> Result<u64, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories
            .values()
            .filter(|c| c.parent_id == Some(id))
            .count() as u64)
    }

    async fn count_products(&self, id: Uuid) -> Result<u64, DomainError> {
        let counts = self.product_counts.read().await;
        Ok(counts.get(&id).copied().unwrap_or(0))
    }
}
