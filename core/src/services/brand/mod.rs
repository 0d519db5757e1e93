//! Brand service module

mod service;

pub use service::{BrandService, CreateBrand, UpdateBrand};
