//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (filesystem, HTTP).

mod shader;

pub use shader::{SHADER_EXTENSION, ShaderName, ShaderNameError, ShaderSource};
