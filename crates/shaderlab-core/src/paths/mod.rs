//! Path utilities for the server root and everything persisted under it.
//!
//! This module provides the canonical path resolution for all ShaderLab components:
//! - The server root (static assets, persisted files)
//! - The shaders directory and graph document beneath it
//!
//! # Design
//!
//! - Every path derives from one explicit root carried in [`ServerLayout`];
//!   nothing depends on the process working directory after startup
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Build-mode specific logic is kept private in `platform`

mod ensure;
mod error;
mod layout;
mod platform;

// Error type
pub use error::PathError;

// Root resolution
pub use platform::{resolve_root, resource_root};

// Persisted layout
pub use layout::{GRAPH_FILE_NAME, SHADERS_DIR_NAME, ServerLayout};

// Directory checks
pub use ensure::verify_directory;
