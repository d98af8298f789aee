//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No filesystem types (`std::fs`, `tokio::fs`) in any signature
//! - Traits are minimal and persistence-focused

pub mod graph_repository;
pub mod shader_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::ShaderNameError;

pub use graph_repository::GraphRepository;
pub use shader_repository::ShaderRepository;

/// Container for all repository trait objects.
///
/// Lets adapters wire storage without coupling to concrete implementations.
#[derive(Clone)]
pub struct Repos {
    /// Shader file storage.
    pub shaders: Arc<dyn ShaderRepository>,
    /// Graph document storage.
    pub graph: Arc<dyn GraphRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(shaders: Arc<dyn ShaderRepository>, graph: Arc<dyn GraphRepository>) -> Self {
        Self { shaders, graph }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., `io::Error`)
/// and provides a clean interface for services to handle storage failures.
/// The message is the underlying error text, unprefixed.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, permissions, etc.).
    #[error("{0}")]
    Storage(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Core error type for service operations.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error types (HTTP status codes, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Requested shader filename could not be sanitized.
    #[error(transparent)]
    ShaderName(#[from] ShaderNameError),

    /// Validation error (invalid input).
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Whether the error was caused by the caller's input.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::ShaderName(_) | Self::Validation(_))
    }
}
