//! Authentication service module
//!
//! Registration, credential login, token refresh, and logout. Password
//! hashing is consumed through the `PasswordHasher` trait; the concrete
//! bcrypt implementation lives in the infrastructure crate.

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::{AuthService, RegisterRequest};
