//! Brand repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::brand::Brand;
use crate::errors::DomainError;

/// Repository trait for Brand entity persistence operations
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Create a new brand
    async fn create(&self, brand: Brand) -> Result<Brand, DomainError>;

    /// Find a brand by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, DomainError>;

    /// Find a brand by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Brand>, DomainError>;

    /// List brands ordered by name
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Brand>, DomainError>;

    /// Update an existing brand
    async fn update(&self, brand: Brand) -> Result<Brand, DomainError>;

    /// Delete a brand
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
