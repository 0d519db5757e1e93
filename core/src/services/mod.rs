//! Business services containing domain logic and use cases.

pub mod auth;
pub mod banner;
pub mod brand;
pub mod cart;
pub mod category;
pub mod product;
pub mod token;
pub mod wishlist;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher, RegisterRequest};
pub use banner::{BannerService, CreateBanner, UpdateBanner};
pub use brand::{BrandService, CreateBrand, UpdateBrand};
pub use cart::{AddToCart, CartService};
pub use category::{CategoryService, CreateCategory, UpdateCategory};
pub use product::{CreateProduct, ProductService, UpdateProduct};
pub use token::{TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig};
pub use wishlist::{AddToWishlist, WishlistService};
