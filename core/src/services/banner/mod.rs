//! Promotional banner service module

mod service;

pub use service::{BannerService, CreateBanner, UpdateBanner};
