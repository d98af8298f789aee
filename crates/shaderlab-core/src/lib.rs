//! Core domain for the ShaderLab dev server.
//!
//! Holds the shader naming rules, the storage ports the HTTP adapter talks
//! to, the services that orchestrate them, and server-root path resolution.
//! Concrete storage lives in `shaderlab-store`; HTTP lives in `shaderlab-axum`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{SHADER_EXTENSION, ShaderName, ShaderNameError, ShaderSource};
pub use paths::{
    GRAPH_FILE_NAME, PathError, SHADERS_DIR_NAME, ServerLayout, resolve_root, resource_root,
    verify_directory,
};
pub use ports::{CoreError, GraphRepository, Repos, RepositoryError, ShaderRepository};
pub use services::{GraphService, MISSING_SHADER_FIELDS, ShaderService};
