//! Test address constants for shaderlab-axum tests.
//!
//! Centralized definitions to prevent hardcoded values.

/// Loopback host used for every socket opened in tests
pub const TEST_HOST: &str = "127.0.0.1";
