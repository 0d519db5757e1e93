//! Category service with hierarchy validation

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::category::{Category, CategoryNode};
use crate::errors::{CategoryError, DomainError, DomainResult};
use crate::repositories::CategoryRepository;

/// Fields for creating a category
#[derive(Debug, Clone, Default)]
pub struct CreateCategory {
    /// Unique display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional image URL
    pub image: Option<String>,
    /// Sort order within a listing
    pub display_order: Option<i32>,
    /// Visibility, defaults to active
    pub is_active: Option<bool>,
    /// Optional parent category
    pub parent_id: Option<Uuid>,
}

/// Partial update for a category; `None` fields stay untouched
///
/// The parent link can be reassigned but not cleared through an update;
/// root status is decided at creation time.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub parent_id: Option<Uuid>,
}

/// Service managing the category hierarchy
///
/// Reparenting is validated against the tree as it stands before the write:
/// the ancestor chain of the proposed parent is walked with a visited set,
/// so each id is read at most once and a malformed chain cannot loop the
/// walk. Two reparent operations racing on different categories can in
/// theory assemble a cycle between validation and write; closing that
/// window needs the validate-then-write sequence inside one serializable
/// transaction, which the repository contract does not require.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a new category service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a category after name and parent checks
    ///
    /// # Returns
    ///
    /// * `Ok(Category)` - The created category
    /// * `Err(DomainError)` - `DuplicateName` when the name is taken,
    ///   `ParentNotFound` when the parent id points nowhere
    pub async fn create(&self, input: CreateCategory) -> DomainResult<Category> {
        if self.repository.find_by_name(&input.name).await?.is_some() {
            return Err(DomainError::Category(CategoryError::DuplicateName {
                name: input.name,
            }));
        }

        if let Some(parent_id) = input.parent_id {
            if self.repository.find_by_id(parent_id).await?.is_none() {
                return Err(DomainError::Category(CategoryError::ParentNotFound {
                    id: parent_id,
                }));
            }
        }

        let mut category = Category::new(input.name, input.parent_id);
        category.description = input.description;
        category.image = input.image;
        if let Some(display_order) = input.display_order {
            category.display_order = display_order;
        }
        if let Some(is_active) = input.is_active {
            category.is_active = is_active;
        }

        let created = self.repository.create(category).await?;
        info!(category_id = %created.id, name = %created.name, "created category");

        Ok(created)
    }

    /// Finds a category by id
    pub async fn find_one(&self, id: Uuid) -> DomainResult<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Category(CategoryError::NotFound { id }))
    }

    /// Lists categories, optionally including deactivated ones
    pub async fn find_all(&self, include_inactive: bool) -> DomainResult<Vec<Category>> {
        self.repository.find_all(include_inactive).await
    }

    /// Lists active root categories
    pub async fn find_roots(&self) -> DomainResult<Vec<Category>> {
        self.repository.find_roots().await
    }

    /// Lists active children of an existing category
    pub async fn find_children(&self, parent_id: Uuid) -> DomainResult<Vec<Category>> {
        if self.repository.find_by_id(parent_id).await?.is_none() {
            return Err(DomainError::Category(CategoryError::ParentNotFound {
                id: parent_id,
            }));
        }

        self.repository.find_children(parent_id).await
    }

    /// Assembles the active category tree, children ordered by display
    /// order then name
    pub async fn find_tree(&self) -> DomainResult<Vec<CategoryNode>> {
        let categories = self.repository.find_all(false).await?;

        let mut children_of: HashMap<Option<Uuid>, Vec<Category>> = HashMap::new();
        for category in categories {
            children_of
                .entry(category.parent_id)
                .or_default()
                .push(category);
        }

        fn build(
            children_of: &HashMap<Option<Uuid>, Vec<Category>>,
            parent: Option<Uuid>,
        ) -> Vec<CategoryNode> {
            children_of
                .get(&parent)
                .map(|nodes| {
                    nodes
                        .iter()
                        .map(|category| CategoryNode {
                            category: category.clone(),
                            children: build(children_of, Some(category.id)),
                        })
                        .collect()
                })
                .unwrap_or_default()
        }

        Ok(build(&children_of, None))
    }

    /// Applies a partial update, guarding name uniqueness and the hierarchy
    ///
    /// Reassigning a category to its current parent is a no-op and skips
    /// hierarchy validation entirely.
    pub async fn update(&self, id: Uuid, changes: UpdateCategory) -> DomainResult<Category> {
        let mut category = self.find_one(id).await?;

        if let Some(ref new_name) = changes.name {
            if *new_name != category.name {
                if let Some(existing) = self.repository.find_by_name(new_name).await? {
                    if existing.id != id {
                        return Err(DomainError::Category(CategoryError::DuplicateName {
                            name: new_name.clone(),
                        }));
                    }
                }
            }
        }

        if let Some(new_parent) = changes.parent_id {
            if Some(new_parent) != category.parent_id {
                if self.repository.find_by_id(new_parent).await?.is_none() {
                    return Err(DomainError::Category(CategoryError::ParentNotFound {
                        id: new_parent,
                    }));
                }

                self.validate_reparent(id, new_parent).await?;
                category.set_parent(Some(new_parent));
            }
        }

        if let Some(name) = changes.name {
            category.name = name;
        }
        if let Some(description) = changes.description {
            category.description = Some(description);
        }
        if let Some(image) = changes.image {
            category.image = Some(image);
        }
        if let Some(display_order) = changes.display_order {
            category.display_order = display_order;
        }
        if let Some(is_active) = changes.is_active {
            category.is_active = is_active;
        }
        category.updated_at = chrono::Utc::now();

        let updated = self.repository.update(category).await?;
        info!(category_id = %updated.id, "updated category");

        Ok(updated)
    }

    /// Deletes a category that has no children and no products
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.find_one(id).await?;

        if self.repository.count_children(id).await? > 0 {
            return Err(DomainError::Category(CategoryError::HasChildren));
        }

        if self.repository.count_products(id).await? > 0 {
            return Err(DomainError::Category(CategoryError::HasProducts));
        }

        self.repository.delete(id).await?;
        info!(category_id = %id, "deleted category");

        Ok(())
    }

    /// Checks that making `proposed_parent_id` the parent of `category_id`
    /// keeps the hierarchy a forest
    ///
    /// Walks the ancestor chain starting at the proposed parent, reading
    /// only parent-id projections from the tree as it stands before the
    /// mutation. The walk is bounded by the number of categories: a visited
    /// set guarantees each id is considered at most once.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The walk reached a root without meeting `category_id`
    /// * `Err(DomainError)` - `SelfParent` when the category is proposed as
    ///   its own parent, `CycleDetected` when the category would become its
    ///   own ancestor or the existing chain already loops
    pub async fn validate_reparent(
        &self,
        category_id: Uuid,
        proposed_parent_id: Uuid,
    ) -> DomainResult<()> {
        if proposed_parent_id == category_id {
            return Err(DomainError::Category(CategoryError::SelfParent));
        }

        let mut visited = HashSet::new();
        let mut current = proposed_parent_id;

        loop {
            if !visited.insert(current) {
                return Err(DomainError::Category(CategoryError::CycleDetected));
            }

            if current == category_id {
                return Err(DomainError::Category(CategoryError::CycleDetected));
            }

            match self.repository.find_parent_id(current).await? {
                Some(Some(parent)) => current = parent,
                // A root, or a dangling link: either way the chain ends
                Some(None) | None => break,
            }
        }

        Ok(())
    }
}
