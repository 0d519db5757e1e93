//! Category repository trait defining the interface for category persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

/// Repository trait for Category entity persistence operations
///
/// Besides the usual CRUD surface, the contract exposes a parent-id
/// projection (`find_parent_id`) so the hierarchy validation can walk the
/// ancestor chain without materializing whole entities, and child/product
/// counts backing the delete guards.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category
    ///
    /// # Arguments
    /// * `category` - The Category entity to persist
    ///
    /// # Returns
    /// * `Ok(Category)` - The created category
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate name)
    async fn create(&self, category: Category) -> Result<Category, DomainError>;

    /// Find a category by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError>;

    /// Find a category by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// Project a category onto its parent id
    ///
    /// Used by the hierarchy walk; implementations should select only the
    /// parent column.
    ///
    /// # Arguments
    /// * `id` - The category whose parent link is read
    ///
    /// # Returns
    /// * `Ok(Some(Some(parent_id)))` - Category exists and has a parent
    /// * `Ok(Some(None))` - Category exists and is a root
    /// * `Ok(None)` - No category with the given id
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use mc_core::repositories::CategoryRepository;
    /// # async fn example(repo: &impl CategoryRepository, id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_parent_id(id).await? {
    ///     Some(Some(parent)) => println!("parent is {}", parent),
    ///     Some(None) => println!("category is a root"),
    ///     None => println!("no such category"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_parent_id(&self, id: Uuid) -> Result<Option<Option<Uuid>>, DomainError>;

    /// List categories, ordered by display order then name
    ///
    /// # Arguments
    /// * `include_inactive` - Whether to include deactivated categories
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Category>, DomainError>;

    /// List active root categories, ordered by display order then name
    async fn find_roots(&self) -> Result<Vec<Category>, DomainError>;

    /// List active children of a category, ordered by display order then name
    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Category>, DomainError>;

    /// Update an existing category
    async fn update(&self, category: Category) -> Result<Category, DomainError>;

    /// Delete a category
    ///
    /// # Returns
    /// * `Ok(true)` - Category was deleted
    /// * `Ok(false)` - Category not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count direct children of a category (active or not)
    async fn count_children(&self, id: Uuid) -> Result<u64, DomainError>;

    /// Count products associated with a category
    async fn count_products(&self, id: Uuid) -> Result<u64, DomainError>;
}
