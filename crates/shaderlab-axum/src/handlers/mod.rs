//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to the core services.

pub mod graph;
pub mod shaders;
