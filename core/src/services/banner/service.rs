//! Promotional banner service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::banner::{Banner, BannerPosition, BannerType};
use crate::errors::{CatalogError, DomainError, DomainResult};
use crate::repositories::BannerRepository;

/// Fields for creating a banner
#[derive(Debug, Clone)]
pub struct CreateBanner {
    /// Headline
    pub title: String,
    /// Optional secondary line
    pub subtitle: Option<String>,
    /// Desktop image URL
    pub image_url: String,
    /// Optional call-to-action label
    pub button_text: Option<String>,
    /// Optional call-to-action link
    pub button_link: Option<String>,
    /// What the banner advertises, defaults to promotion
    pub banner_type: Option<BannerType>,
    /// Where the banner is rendered, defaults to home top
    pub position: Option<BannerPosition>,
    /// Sort order within a position
    pub display_order: Option<i32>,
    /// Optional scheduling window start
    pub start_date: Option<DateTime<Utc>>,
    /// Optional scheduling window end
    pub end_date: Option<DateTime<Utc>>,
}

/// Partial update for a banner; `None` fields stay untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateBanner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub banner_type: Option<BannerType>,
    pub position: Option<BannerPosition>,
    pub display_order: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

/// Service managing promotional banners
pub struct BannerService<R: BannerRepository> {
    repository: Arc<R>,
}

impl<R: BannerRepository> BannerService<R> {
    /// Creates a new banner service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a banner
    pub async fn create(&self, input: CreateBanner) -> DomainResult<Banner> {
        let mut banner = Banner::new(input.title, input.image_url);
        banner.subtitle = input.subtitle;
        banner.button_text = input.button_text;
        banner.button_link = input.button_link;
        banner.start_date = input.start_date;
        banner.end_date = input.end_date;
        if let Some(banner_type) = input.banner_type {
            banner.banner_type = banner_type;
        }
        if let Some(position) = input.position {
            banner.position = position;
        }
        if let Some(display_order) = input.display_order {
            banner.display_order = display_order;
        }

        let created = self.repository.create(banner).await?;
        info!(banner_id = %created.id, "created banner");

        Ok(created)
    }

    /// Finds a banner by id
    pub async fn find_one(&self, id: Uuid) -> DomainResult<Banner> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Catalog(CatalogError::BannerNotFound { id }))
    }

    /// Lists enabled banners ordered by display order
    pub async fn find_all(&self) -> DomainResult<Vec<Banner>> {
        self.repository.find_all().await
    }

    /// Lists banners currently showable at a position
    pub async fn find_by_position(&self, position: BannerPosition) -> DomainResult<Vec<Banner>> {
        let banners = self.repository.find_by_position(position).await?;
        Ok(banners.into_iter().filter(Banner::is_active_now).collect())
    }

    /// Lists banners of a type
    pub async fn find_by_type(&self, banner_type: BannerType) -> DomainResult<Vec<Banner>> {
        self.repository.find_by_type(banner_type).await
    }

    /// Lists promotion banners currently inside their scheduling window
    pub async fn find_active_promotions(&self) -> DomainResult<Vec<Banner>> {
        let banners = self.repository.find_by_type(BannerType::Promotion).await?;
        Ok(banners.into_iter().filter(Banner::is_active_now).collect())
    }

    /// Applies a partial update
    pub async fn update(&self, id: Uuid, changes: UpdateBanner) -> DomainResult<Banner> {
        let mut banner = self.find_one(id).await?;

        if let Some(title) = changes.title {
            banner.title = title;
        }
        if let Some(subtitle) = changes.subtitle {
            banner.subtitle = Some(subtitle);
        }
        if let Some(image_url) = changes.image_url {
            banner.image_url = image_url;
        }
        if let Some(button_text) = changes.button_text {
            banner.button_text = Some(button_text);
        }
        if let Some(button_link) = changes.button_link {
            banner.button_link = Some(button_link);
        }
        if let Some(banner_type) = changes.banner_type {
            banner.banner_type = banner_type;
        }
        if let Some(position) = changes.position {
            banner.position = position;
        }
        if let Some(display_order) = changes.display_order {
            banner.display_order = display_order;
        }
        if let Some(start_date) = changes.start_date {
            banner.start_date = Some(start_date);
        }
        if let Some(end_date) = changes.end_date {
            banner.end_date = Some(end_date);
        }
        if let Some(is_active) = changes.is_active {
            banner.is_active = is_active;
        }
        banner.updated_at = Utc::now();

        let updated = self.repository.update(banner).await?;
        info!(banner_id = %updated.id, "updated banner");

        Ok(updated)
    }

    /// Deletes a banner
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.find_one(id).await?;
        self.repository.delete(id).await?;
        info!(banner_id = %id, "deleted banner");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::banner::MockBannerRepository;
    use chrono::Duration;

    fn setup() -> BannerService<MockBannerRepository> {
        BannerService::new(Arc::new(MockBannerRepository::new()))
    }

    fn promo(title: &str) -> CreateBanner {
        CreateBanner {
            title: title.to_string(),
            subtitle: None,
            image_url: "banner.jpg".to_string(),
            button_text: None,
            button_link: None,
            banner_type: None,
            position: None,
            display_order: None,
            start_date: None,
            end_date: None,
        }
    }

    #[tokio::test]
    async fn test_active_promotions_respect_the_window() {
        let service = setup();

        service.create(promo("Running now")).await.unwrap();

        let mut future = promo("Starts tomorrow");
        future.start_date = Some(Utc::now() + Duration::days(1));
        service.create(future).await.unwrap();

        let mut past = promo("Ended yesterday");
        past.end_date = Some(Utc::now() - Duration::days(1));
        service.create(past).await.unwrap();

        let active = service.find_active_promotions().await.unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Running now");
    }

    #[tokio::test]
    async fn test_disabled_banner_is_hidden_from_positions() {
        let service = setup();

        let banner = service.create(promo("Sale")).await.unwrap();
        service
            .update(
                banner.id,
                UpdateBanner {
                    is_active: Some(false),
                    ..UpdateBanner::default()
                },
            )
            .await
            .unwrap();

        let shown = service
            .find_by_position(BannerPosition::HomeTop)
            .await
            .unwrap();
        assert!(shown.is_empty());
    }

    #[tokio::test]
    async fn test_delete_banner() {
        let service = setup();
        let banner = service.create(promo("Sale")).await.unwrap();

        service.delete(banner.id).await.unwrap();

        let result = service.find_one(banner.id).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Catalog(CatalogError::BannerNotFound { .. })
        ));
    }
}
