//! MySQL implementation of the CategoryRepository trait.
//!
//! `find_parent_id` selects only the parent column, keeping the hierarchy
//! walk a stream of tiny projections rather than entity loads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mc_core::domain::entities::category::Category;
use mc_core::errors::DomainError;
use mc_core::repositories::CategoryRepository;

/// MySQL implementation of CategoryRepository
pub struct MySqlCategoryRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const CATEGORY_COLUMNS: &str =
    "id, name, description, image, display_order, is_active, parent_id, created_at, updated_at";

impl MySqlCategoryRepository {
    /// Create a new MySQL category repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Category entity
    fn row_to_category(row: &sqlx::mysql::MySqlRow) -> Result<Category, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let parent_id: Option<String> =
            row.try_get("parent_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get parent_id: {}", e),
            })?;

        Ok(Category {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid category UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get description: {}", e),
                })?,
            image: row.try_get("image").map_err(|e| DomainError::Database {
                message: format!("Failed to get image: {}", e),
            })?,
            display_order: row
                .try_get("display_order")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get display_order: {}", e),
                })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_active: {}", e),
            })?,
            parent_id: parent_id
                .map(|p| {
                    Uuid::parse_str(&p).map_err(|e| DomainError::Database {
                        message: format!("Invalid parent UUID: {}", e),
                    })
                })
                .transpose()?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list categories: {}", e),
            })?;

        rows.iter().map(Self::row_to_category).collect()
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let query = r#"
            INSERT INTO categories (
                id, name, description, image, display_order, is_active, parent_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(&category.description)
            .bind(&category.image)
            .bind(category.display_order)
            .bind(category.is_active)
            .bind(category.parent_id.map(|p| p.to_string()))
            .bind(category.created_at)
            .bind(category.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create category: {}", e),
            })?;

        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let query = format!(
            "SELECT {} FROM categories WHERE id = ? LIMIT 1",
            CATEGORY_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find category: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let query = format!(
            "SELECT {} FROM categories WHERE name = ? LIMIT 1",
            CATEGORY_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find category by name: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_parent_id(&self, id: Uuid) -> Result<Option<Option<Uuid>>, DomainError> {
        let result = sqlx::query("SELECT parent_id FROM categories WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to project parent id: {}", e),
            })?;

        let Some(row) = result else {
            return Ok(None);
        };

        let parent_id: Option<String> =
            row.try_get("parent_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get parent_id: {}", e),
            })?;

        let parent_id = parent_id
            .map(|p| {
                Uuid::parse_str(&p).map_err(|e| DomainError::Database {
                    message: format!("Invalid parent UUID: {}", e),
                })
            })
            .transpose()?;

        Ok(Some(parent_id))
    }

    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Category>, DomainError> {
        let query = if include_inactive {
            format!(
                "SELECT {} FROM categories ORDER BY display_order ASC, name ASC",
                CATEGORY_COLUMNS
            )
        } else {
            format!(
                "SELECT {} FROM categories WHERE is_active = TRUE ORDER BY display_order ASC, name ASC",
                CATEGORY_COLUMNS
            )
        };

        self.fetch_list(&query).await
    }

    async fn find_roots(&self) -> Result<Vec<Category>, DomainError> {
        let query = format!(
            "SELECT {} FROM categories WHERE parent_id IS NULL AND is_active = TRUE \
             ORDER BY display_order ASC, name ASC",
            CATEGORY_COLUMNS
        );

        self.fetch_list(&query).await
    }

    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Category>, DomainError> {
        let query = format!(
            "SELECT {} FROM categories WHERE parent_id = ? AND is_active = TRUE \
             ORDER BY display_order ASC, name ASC",
            CATEGORY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(parent_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list child categories: {}", e),
            })?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn update(&self, category: Category) -> Result<Category, DomainError> {
        let query = r#"
            UPDATE categories
            SET name = ?, description = ?, image = ?, display_order = ?,
                is_active = ?, parent_id = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&category.name)
            .bind(&category.description)
            .bind(&category.image)
            .bind(category.display_order)
            .bind(category.is_active)
            .bind(category.parent_id.map(|p| p.to_string()))
            .bind(category.updated_at)
            .bind(category.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update category: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("category {}", category.id),
            });
        }

        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete category: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_children(&self, id: Uuid) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM categories WHERE parent_id = ?")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to count children: {}", e),
            })?;

        let total: i64 = row.try_get("total").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(total as u64)
    }

    async fn count_products(&self, id: Uuid) -> Result<u64, DomainError> {
        let row =
            sqlx::query("SELECT COUNT(*) AS total FROM product_categories WHERE category_id = ?")
                .bind(id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to count category products: {}", e),
                })?;

        let total: i64 = row.try_get("total").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(total as u64)
    }
}
