//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mc_core::domain::entities::user::{User, UserRole};
use mc_core::errors::DomainError;
use mc_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, full_name, role, created_at, updated_at";

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let role: String = row.try_get("role").map_err(|e| DomainError::Database {
            message: format!("Failed to get role: {}", e),
        })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid user UUID: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Database {
                message: format!("Failed to get username: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            full_name: row.try_get("full_name").map_err(|e| DomainError::Database {
                message: format!("Failed to get full_name: {}", e),
            })?,
            role: UserRole::from_str_or_default(&role),
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

    async fn find_by_column(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? LIMIT 1",
            USER_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find user by {}: {}", column, e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_by_column("id", &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_by_column("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_by_column("username", username).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, full_name, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET username = ?, email = ?, password_hash = ?, full_name = ?,
                role = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(user.role.as_str())
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete user: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
