//! MySQL implementation of the TokenRepository trait.
//!
//! Refresh token persistence with SQLx. Rotation relies on the conditional
//! `mark_token_used` update: the WHERE clause only matches an unconsumed,
//! unrevoked record, so of two racing rotations exactly one sees an
//! affected row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mc_core::domain::entities::token::RefreshToken;
use mc_core::errors::DomainError;
use mc_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid token UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("Invalid user UUID: {}", e),
            })?,
            token_hash: row.try_get("token_hash").map_err(|e| DomainError::Database {
                message: format!("Failed to get token_hash: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            is_revoked: row.try_get("is_revoked").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_revoked: {}", e),
            })?,
            is_used: row.try_get("is_used").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_used: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, created_at, expires_at, is_revoked, is_used
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_revoked)
            .bind(token.is_used)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to save refresh token: {}", e),
            })?;

        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at, is_revoked, is_used
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at, is_revoked, is_used
            FROM refresh_tokens
            WHERE user_id = ?
              AND is_revoked = FALSE
              AND is_used = FALSE
              AND expires_at > NOW()
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find tokens by user: {}", e),
            })?;

        rows.iter().map(Self::row_to_token).collect()
    }

    async fn mark_token_used(&self, token_hash: &str) -> Result<bool, DomainError> {
        // Conditional update: the row must still be unconsumed and unrevoked
        let query = r#"
            UPDATE refresh_tokens
            SET is_used = TRUE
            WHERE token_hash = ?
              AND is_used = FALSE
              AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to mark token used: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let exists_query = "SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token_hash = ?) AS found";
        let row = sqlx::query(exists_query)
            .bind(token_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check token existence: {}", e),
            })?;
        let found: i8 = row.try_get("found").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence result: {}", e),
        })?;

        if found == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE refresh_tokens SET is_revoked = TRUE WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to revoke token: {}", e),
            })?;

        Ok(true)
    }

    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE user_id = ? AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to revoke user tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete expired tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
