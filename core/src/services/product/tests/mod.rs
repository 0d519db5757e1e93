//! Unit tests for the product service
