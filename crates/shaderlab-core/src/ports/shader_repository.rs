//! Shader repository trait definition.
//!
//! This port defines the interface for shader file persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::ShaderSource;

/// Repository for persisted shader sources.
///
/// # Design Rules
///
/// - Works with sanitized [`ShaderSource`] values only; callers never pass raw paths
/// - A missing storage location is an empty listing, not an error
#[async_trait]
pub trait ShaderRepository: Send + Sync {
    /// List the filenames of all stored shaders.
    ///
    /// Order is whatever the backend yields and must not be relied upon.
    async fn list(&self) -> Result<Vec<String>, RepositoryError>;

    /// Create or overwrite a shader.
    async fn save(&self, shader: &ShaderSource) -> Result<(), RepositoryError>;
}
