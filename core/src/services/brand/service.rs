//! Brand service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::brand::Brand;
use crate::errors::{CatalogError, DomainError, DomainResult};
use crate::repositories::{BrandRepository, ProductRepository};

/// Fields for creating a brand
#[derive(Debug, Clone, Default)]
pub struct CreateBrand {
    /// Unique brand name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional logo URL
    pub logo: Option<String>,
    /// Optional website URL
    pub website: Option<String>,
}

/// Partial update for a brand; `None` fields stay untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateBrand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub is_active: Option<bool>,
}

/// Service managing brands
///
/// Deletion consults the product repository: a brand referenced by any
/// product cannot be removed.
pub struct BrandService<B, P>
where
    B: BrandRepository,
    P: ProductRepository,
{
    brands: Arc<B>,
    products: Arc<P>,
}

impl<B, P> BrandService<B, P>
where
    B: BrandRepository,
    P: ProductRepository,
{
    /// Creates a new brand service
    pub fn new(brands: Arc<B>, products: Arc<P>) -> Self {
        Self { brands, products }
    }

    /// Creates a brand with a unique name
    pub async fn create(&self, input: CreateBrand) -> DomainResult<Brand> {
        if self.brands.find_by_name(&input.name).await?.is_some() {
            return Err(DomainError::Catalog(CatalogError::DuplicateBrandName {
                name: input.name,
            }));
        }

        let mut brand = Brand::new(input.name);
        brand.description = input.description;
        brand.logo = input.logo;
        brand.website = input.website;

        let created = self.brands.create(brand).await?;
        info!(brand_id = %created.id, name = %created.name, "created brand");

        Ok(created)
    }

    /// Finds a brand by id
    pub async fn find_one(&self, id: Uuid) -> DomainResult<Brand> {
        self.brands
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Catalog(CatalogError::BrandNotFound { id }))
    }

    /// Lists brands, optionally including deactivated ones
    pub async fn find_all(&self, include_inactive: bool) -> DomainResult<Vec<Brand>> {
        self.brands.find_all(include_inactive).await
    }

    /// Applies a partial update, guarding name uniqueness
    pub async fn update(&self, id: Uuid, changes: UpdateBrand) -> DomainResult<Brand> {
        let mut brand = self.find_one(id).await?;

        if let Some(ref new_name) = changes.name {
            if *new_name != brand.name {
                if let Some(existing) = self.brands.find_by_name(new_name).await? {
                    if existing.id != id {
                        return Err(DomainError::Catalog(CatalogError::DuplicateBrandName {
                            name: new_name.clone(),
                        }));
                    }
                }
                brand.name = new_name.clone();
            }
        }

        if let Some(description) = changes.description {
            brand.description = Some(description);
        }
        if let Some(logo) = changes.logo {
            brand.logo = Some(logo);
        }
        if let Some(website) = changes.website {
            brand.website = Some(website);
        }
        if let Some(is_active) = changes.is_active {
            brand.is_active = is_active;
        }
        brand.updated_at = chrono::Utc::now();

        let updated = self.brands.update(brand).await?;
        info!(brand_id = %updated.id, "updated brand");

        Ok(updated)
    }

    /// Deletes a brand that no product references
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.find_one(id).await?;

        if self.products.count_by_brand(id).await? > 0 {
            return Err(DomainError::Catalog(CatalogError::BrandHasProducts));
        }

        self.brands.delete(id).await?;
        info!(brand_id = %id, "deleted brand");

        Ok(())
    }
}
