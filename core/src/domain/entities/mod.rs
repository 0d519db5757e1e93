//! Domain entities representing core business objects.

pub mod banner;
pub mod brand;
pub mod cart;
pub mod category;
pub mod product;
pub mod token;
pub mod user;
pub mod wishlist;

// Re-export commonly used types
pub use banner::{Banner, BannerPosition, BannerType};
pub use brand::Brand;
pub use cart::{Cart, CartItem};
pub use category::{Category, CategoryNode};
pub use product::{Product, ProductImage, ProductStatus, ProductType, ProductVariant};
pub use token::{Claims, RefreshToken, TokenPair, DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS};
pub use user::{User, UserRole};
pub use wishlist::{Wishlist, WishlistItem};
