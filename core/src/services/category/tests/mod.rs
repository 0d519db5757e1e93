//! Unit tests for the category service
