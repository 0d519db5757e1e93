//! Repository traits defining the persistence contracts consumed by the
//! domain services. Concrete implementations live in the infrastructure
//! crate; in-memory mocks for tests live alongside each trait.

pub mod banner;
pub mod brand;
pub mod cart;
pub mod category;
pub mod product;
pub mod token;
pub mod user;
pub mod wishlist;

pub use banner::BannerRepository;
pub use brand::BrandRepository;
pub use cart::CartRepository;
pub use category::CategoryRepository;
pub use product::{ProductQuery, ProductRepository};
pub use token::TokenRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;
