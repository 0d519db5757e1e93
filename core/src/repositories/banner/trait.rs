//! Banner repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::banner::{Banner, BannerPosition, BannerType};
use crate::errors::DomainError;

/// Repository trait for Banner entity persistence operations
///
/// Listings return enabled banners ordered by display order; date-window
/// filtering happens in the service because "now" is evaluated per request.
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Create a new banner
    async fn create(&self, banner: Banner) -> Result<Banner, DomainError>;

    /// Find a banner by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, DomainError>;

    /// List enabled banners ordered by display order
    async fn find_all(&self) -> Result<Vec<Banner>, DomainError>;

    /// List enabled banners for a position
    async fn find_by_position(&self, position: BannerPosition)
        -> Result<Vec<Banner>, DomainError>;

    /// List enabled banners of a type
    async fn find_by_type(&self, banner_type: BannerType) -> Result<Vec<Banner>, DomainError>;

    /// Update an existing banner
    async fn update(&self, banner: Banner) -> Result<Banner, DomainError>;

    /// Delete a banner
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
