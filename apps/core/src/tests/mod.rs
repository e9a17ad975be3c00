//! Test Module
//!
//! Integration test suite for the NewsCheck backend; unit tests live next to
//! the code they cover.
//!
//! ## Test Categories
//! - `integration_tests`: full submission pipeline against a mocked endpoint

pub mod integration_tests;
