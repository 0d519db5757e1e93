//! Unit tests for the cart service
