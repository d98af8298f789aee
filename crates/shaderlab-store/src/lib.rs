//! Filesystem-backed storage for the ShaderLab dev server.
//!
//! Implements the `shaderlab-core` repository ports on top of `tokio::fs`.
//! Writes go straight to their target file: no temp-file rename, no backup.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::{FsGraphRepository, FsShaderRepository};
