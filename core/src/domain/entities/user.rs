//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Regular shopper account
    Customer,
    /// Back-office staff
    Staff,
}

impl UserRole {
    /// Stable string form used in JWT claims and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Customer => "customer",
            UserRole::Staff => "staff",
        }
    }

    /// Parse a stored role string, defaulting unknown values to `Customer`
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "admin" => UserRole::Admin,
            "staff" => UserRole::Staff,
            _ => UserRole::Customer,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Customer
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Password hash produced by the password hasher collaborator;
    /// never a plaintext password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Display name
    pub full_name: String,

    /// Account role
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new customer account
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        full_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            full_name,
            role: UserRole::Customer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the account role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Checks if the user has administrative access
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
