//! Unit tests for the token service

mod rotation_tests;
