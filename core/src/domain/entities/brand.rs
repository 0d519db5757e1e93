//! Brand entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Unique identifier
    pub id: Uuid,

    /// Unique brand name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional logo URL
    pub logo: Option<String>,

    /// Optional website URL
    pub website: Option<String>,

    /// Whether the brand is visible
    pub is_active: bool,

    /// Timestamp when the brand was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the brand was last updated
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Creates a new active brand
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            logo: None,
            website: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the brand
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
