//! Promotional banner entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a banner advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerType {
    Hero,
    Promotion,
    Category,
    Brand,
    Seasonal,
}

impl Default for BannerType {
    fn default() -> Self {
        BannerType::Promotion
    }
}

/// Where a banner is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerPosition {
    HomeTop,
    HomeMiddle,
    HomeBottom,
    CategoryPage,
    ProductPage,
}

impl Default for BannerPosition {
    fn default() -> Self {
        BannerPosition::HomeTop
    }
}

/// Promotional banner with an optional scheduling window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Unique identifier
    pub id: Uuid,

    /// Headline
    pub title: String,

    /// Optional secondary line
    pub subtitle: Option<String>,

    /// Optional long text
    pub description: Option<String>,

    /// Desktop image URL
    pub image_url: String,

    /// Optional mobile image URL
    pub mobile_image_url: Option<String>,

    /// Optional call-to-action label
    pub button_text: Option<String>,

    /// Optional call-to-action link
    pub button_link: Option<String>,

    /// What the banner advertises
    pub banner_type: BannerType,

    /// Where the banner is rendered
    pub position: BannerPosition,

    /// Sort order within a position
    pub display_order: i32,

    /// Optional start of the scheduling window
    pub start_date: Option<DateTime<Utc>>,

    /// Optional end of the scheduling window
    pub end_date: Option<DateTime<Utc>>,

    /// Whether the banner is enabled at all
    pub is_active: bool,

    /// Timestamp when the banner was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the banner was last updated
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Creates a new active promotion banner for the home page
    pub fn new(title: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            subtitle: None,
            description: None,
            image_url,
            mobile_image_url: None,
            button_text: None,
            button_link: None,
            banner_type: BannerType::default(),
            position: BannerPosition::default(),
            display_order: 0,
            start_date: None,
            end_date: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the scheduling window has closed
    pub fn is_expired(&self) -> bool {
        match self.end_date {
            Some(end) => Utc::now() > end,
            None => false,
        }
    }

    /// Whether the banner should be shown right now: enabled, inside the
    /// scheduling window, and not expired
    pub fn is_active_now(&self) -> bool {
        if !self.is_active || self.is_expired() {
            return false;
        }
        match self.start_date {
            Some(start) => Utc::now() >= start,
            None => true,
        }
    }
}
