//! Mock implementation of BannerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::banner::{Banner, BannerPosition, BannerType};
use crate::errors::DomainError;

use super::r#trait::BannerRepository;

/// Mock banner repository backed by an in-memory map
pub struct MockBannerRepository {
    banners: Arc<RwLock<HashMap<Uuid, Banner>>>,
}

impl MockBannerRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            banners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with a banner, for building test fixtures
    pub async fn put(&self, banner: Banner) {
        self.banners.write().await.insert(banner.id, banner);
    }
}

impl Default for MockBannerRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_display_order(mut banners: Vec<Banner>) -> Vec<Banner> {
    banners.sort_by_key(|b| b.display_order);
    banners
}

#[async_trait]
impl BannerRepository for MockBannerRepository {
    async fn create(&self, banner: Banner) -> Result<Banner, DomainError> {
        let mut banners = self.banners.write().await;
        banners.insert(banner.id, banner.clone());
        Ok(banner)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, DomainError> {
        let banners = self.banners.read().await;
        Ok(banners.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Banner>, DomainError> {
        let banners = self.banners.read().await;
        let enabled = banners.values().filter(|b| b.is_active).cloned().collect();
        Ok(sorted_by_display_order(enabled))
    }

    async fn find_by_position(
        &self,
        position: BannerPosition,
    ) -> Result<Vec<Banner>, DomainError> {
        let banners = self.banners.read().await;
        let matching = banners
            .values()
            .filter(|b| b.is_active && b.position == position)
            .cloned()
            .collect();
        Ok(sorted_by_display_order(matching))
    }

    async fn find_by_type(&self, banner_type: BannerType) -> Result<Vec<Banner>, DomainError> {
        let banners = self.banners.read().await;
        let matching = banners
            .values()
            .filter(|b| b.is_active && b.banner_type == banner_type)
            .cloned()
            .collect();
        Ok(sorted_by_display_order(matching))
    }

    async fn update(&self, banner: Banner) -> Result<Banner, DomainError> {
        let mut banners = self.banners.write().await;

        if !banners.contains_key(&banner.id) {
            return Err(DomainError::NotFound {
                resource: format!("banner {}", banner.id),
            });
        }

        banners.insert(banner.id, banner.clone());
        Ok(banner)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut banners = self.banners.write().await;
        Ok(banners.remove(&id).is_some())
    }
}
