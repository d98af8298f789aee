//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod graph_service;
mod shader_service;

pub use graph_service::GraphService;
pub use shader_service::{MISSING_SHADER_FIELDS, ShaderService};
