//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Minimum allowed page size
pub const MIN_PER_PAGE: u32 = 1;

/// Maximum allowed page size
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with clamped values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.per_page
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Offset as i64 for SQL bind parameters
    pub fn offset_i64(&self) -> i64 {
        self.offset() as i64
    }

    /// Limit as i64 for SQL bind parameters
    pub fn limit_i64(&self) -> i64 {
        self.limit() as i64
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Total number of items
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Build a paginated response from items and a total count
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let per_page = pagination.per_page.max(1) as u64;
        let total_pages = if total == 0 {
            0
        } else {
            ((total + per_page - 1) / per_page) as u32
        };

        Self {
            data,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages,
        }
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}
