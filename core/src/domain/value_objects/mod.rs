//! Value objects returned by domain services.

pub mod auth_response;
pub mod cart_view;

pub use auth_response::{AuthResponse, UserProfile};
pub use cart_view::{CartLine, CartView};
