//! Unit tests for the wishlist service

mod service_tests;
