//! Category service module
//!
//! Carries the category CRUD surface and guards the structural integrity of
//! the parent-pointer hierarchy: no self-parenting, no cycles.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CategoryService, CreateCategory, UpdateCategory};
