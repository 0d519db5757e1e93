//! Product catalog service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mc_shared::types::PaginatedResponse;

use crate::domain::entities::product::{Product, ProductStatus, ProductType};
use crate::errors::{CatalogError, CategoryError, DomainError, DomainResult};
use crate::repositories::{BrandRepository, CategoryRepository, ProductQuery, ProductRepository};

/// Fields for creating a product
#[derive(Debug, Clone)]
pub struct CreateProduct {
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Unique stock keeping unit
    pub sku: String,
    /// Kind of product, defaults to simple
    pub product_type: Option<ProductType>,
    /// Regular price in minor units
    pub price: i64,
    /// Discounted price in minor units
    pub discount_price: Option<i64>,
    /// Initial stock
    pub quantity: Option<u32>,
    /// Owning brand
    pub brand_id: Option<Uuid>,
    /// Categories to list the product under
    pub category_ids: Vec<Uuid>,
}

/// Partial update for a product; `None` fields stay untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub status: Option<ProductStatus>,
    pub price: Option<i64>,
    pub discount_price: Option<i64>,
    pub quantity: Option<u32>,
    pub brand_id: Option<Uuid>,
    pub category_ids: Option<Vec<Uuid>>,
}

/// Service managing the product catalog
pub struct ProductService<P, B, C>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
{
    products: Arc<P>,
    brands: Arc<B>,
    categories: Arc<C>,
}

impl<P, B, C> ProductService<P, B, C>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
{
    /// Creates a new product service
    pub fn new(products: Arc<P>, brands: Arc<B>, categories: Arc<C>) -> Self {
        Self {
            products,
            brands,
            categories,
        }
    }

    /// Creates a product after SKU, brand, and category checks
    pub async fn create(&self, input: CreateProduct) -> DomainResult<Product> {
        if self.products.find_by_sku(&input.sku).await?.is_some() {
            return Err(DomainError::Catalog(CatalogError::DuplicateSku {
                sku: input.sku,
            }));
        }

        if let Some(brand_id) = input.brand_id {
            if self.brands.find_by_id(brand_id).await?.is_none() {
                return Err(DomainError::Catalog(CatalogError::BrandNotFound {
                    id: brand_id,
                }));
            }
        }

        for category_id in &input.category_ids {
            if self.categories.find_by_id(*category_id).await?.is_none() {
                return Err(DomainError::Category(CategoryError::NotFound {
                    id: *category_id,
                }));
            }
        }

        let mut product = Product::new(input.name, input.sku, input.price);
        product.description = input.description;
        product.discount_price = input.discount_price;
        product.brand_id = input.brand_id;
        product.category_ids = input.category_ids;
        if let Some(product_type) = input.product_type {
            product.product_type = product_type;
        }
        if let Some(quantity) = input.quantity {
            product.quantity = quantity;
        }

        let created = self.products.create(product).await?;
        info!(product_id = %created.id, sku = %created.sku, "created product");

        Ok(created)
    }

    /// Finds a product by id
    pub async fn find_one(&self, id: Uuid) -> DomainResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Catalog(CatalogError::ProductNotFound { id }))
    }

    /// Searches products with filters and pagination
    pub async fn search(&self, query: ProductQuery) -> DomainResult<PaginatedResponse<Product>> {
        let (products, total) = self.products.search(&query).await?;
        Ok(PaginatedResponse::new(products, query.pagination, total))
    }

    /// Lists published products of a category
    pub async fn find_by_category(&self, category_id: Uuid) -> DomainResult<Vec<Product>> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(DomainError::Category(CategoryError::NotFound {
                id: category_id,
            }));
        }
        self.products.find_by_category(category_id).await
    }

    /// Lists published products of a brand
    pub async fn find_by_brand(&self, brand_id: Uuid) -> DomainResult<Vec<Product>> {
        if self.brands.find_by_id(brand_id).await?.is_none() {
            return Err(DomainError::Catalog(CatalogError::BrandNotFound {
                id: brand_id,
            }));
        }
        self.products.find_by_brand(brand_id).await
    }

    /// Lists published products currently on sale, newest first
    pub async fn find_discounted(&self, limit: usize) -> DomainResult<Vec<Product>> {
        let query = ProductQuery {
            status: Some(ProductStatus::Published),
            ..ProductQuery::default()
        };
        let (products, _) = self.products.search(&query).await?;

        let mut discounted: Vec<Product> =
            products.into_iter().filter(Product::is_discounted).collect();
        discounted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        discounted.truncate(limit);

        Ok(discounted)
    }

    /// Applies a partial update, guarding SKU uniqueness and references
    pub async fn update(&self, id: Uuid, changes: UpdateProduct) -> DomainResult<Product> {
        let mut product = self.find_one(id).await?;

        if let Some(ref new_sku) = changes.sku {
            if *new_sku != product.sku {
                if let Some(existing) = self.products.find_by_sku(new_sku).await? {
                    if existing.id != id {
                        return Err(DomainError::Catalog(CatalogError::DuplicateSku {
                            sku: new_sku.clone(),
                        }));
                    }
                }
                product.sku = new_sku.clone();
            }
        }

        if let Some(brand_id) = changes.brand_id {
            if self.brands.find_by_id(brand_id).await?.is_none() {
                return Err(DomainError::Catalog(CatalogError::BrandNotFound {
                    id: brand_id,
                }));
            }
            product.brand_id = Some(brand_id);
        }

        if let Some(category_ids) = changes.category_ids {
            for category_id in &category_ids {
                if self.categories.find_by_id(*category_id).await?.is_none() {
                    return Err(DomainError::Category(CategoryError::NotFound {
                        id: *category_id,
                    }));
                }
            }
            product.category_ids = category_ids;
        }

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(description) = changes.description {
            product.description = Some(description);
        }
        if let Some(status) = changes.status {
            product.status = status;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(discount_price) = changes.discount_price {
            product.discount_price = Some(discount_price);
        }
        if let Some(quantity) = changes.quantity {
            product.quantity = quantity;
        }
        product.updated_at = chrono::Utc::now();

        let updated = self.products.update(product).await?;
        info!(product_id = %updated.id, "updated product");

        Ok(updated)
    }

    /// Deletes a product
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.find_one(id).await?;
        self.products.delete(id).await?;
        info!(product_id = %id, "deleted product");
        Ok(())
    }
}
