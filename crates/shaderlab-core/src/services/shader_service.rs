//! Shader service - validates and persists shader sources.

use std::sync::Arc;

use crate::domain::{ShaderName, ShaderSource};
use crate::ports::{CoreError, ShaderRepository};

/// Message returned when a save request lacks a filename or code.
pub const MISSING_SHADER_FIELDS: &str = "Missing filename or code";

/// Service for shader operations.
pub struct ShaderService {
    repo: Arc<dyn ShaderRepository>,
}

impl ShaderService {
    /// Create a new shader service.
    pub fn new(repo: Arc<dyn ShaderRepository>) -> Self {
        Self { repo }
    }

    /// List stored shader filenames.
    pub async fn list(&self) -> Result<Vec<String>, CoreError> {
        let names = self.repo.list().await?;
        tracing::debug!(count = names.len(), "Listed shaders");
        Ok(names)
    }

    /// Validate, sanitize and persist a shader.
    ///
    /// An empty `filename` or `code` is treated the same as an absent one.
    /// Returns the name the shader was stored under.
    pub async fn save(&self, filename: &str, code: &str) -> Result<ShaderName, CoreError> {
        if filename.is_empty() || code.is_empty() {
            return Err(CoreError::Validation(MISSING_SHADER_FIELDS.to_string()));
        }

        let name = ShaderName::sanitize(filename)?;
        if name.as_str() != filename {
            tracing::debug!(requested = filename, stored = %name, "Sanitized shader filename");
        }

        self.repo.save(&ShaderSource::new(name.clone(), code)).await?;
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockShaderRepo {
        saved: Mutex<Vec<ShaderSource>>,
    }

    impl MockShaderRepo {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ShaderRepository for MockShaderRepo {
        async fn list(&self) -> Result<Vec<String>, RepositoryError> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .iter()
                .map(|s| s.name.to_string())
                .collect())
        }

        async fn save(&self, shader: &ShaderSource) -> Result<(), RepositoryError> {
            self.saved.lock().unwrap().push(shader.clone());
            Ok(())
        }
    }

    struct FailingShaderRepo;

    #[async_trait]
    impl ShaderRepository for FailingShaderRepo {
        async fn list(&self) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::Storage("Permission denied".to_string()))
        }

        async fn save(&self, _shader: &ShaderSource) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("No space left on device".to_string()))
        }
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let repo = Arc::new(MockShaderRepo::new());
        let service = ShaderService::new(repo);

        let name = service.save("../../etc/evil", "void main() {}").await.unwrap();
        assert_eq!(name.as_str(), "evil.frag");

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec!["evil.frag".to_string()]);
    }

    #[tokio::test]
    async fn test_save_passes_code_through() {
        let repo = Arc::new(MockShaderRepo::new());
        let service = ShaderService::new(repo.clone());

        service.save("foo", "bar").await.unwrap();

        let saved = repo.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name.as_str(), "foo.frag");
        assert_eq!(saved[0].code, "bar");
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_write() {
        let repo = Arc::new(MockShaderRepo::new());
        let service = ShaderService::new(repo.clone());

        for (filename, code) in [("", "bar"), ("foo", ""), ("", "")] {
            let err = service.save(filename, code).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(ref m) if m == MISSING_SHADER_FIELDS));
        }
        assert!(repo.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unusable_filename_is_client_error() {
        let service = ShaderService::new(Arc::new(MockShaderRepo::new()));

        let err = service.save("shaders/", "bar").await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_repository_failures_propagate() {
        let service = ShaderService::new(Arc::new(FailingShaderRepo));

        let err = service.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Permission denied");
        assert!(!err.is_client_error());

        let err = service.save("foo", "bar").await.unwrap_err();
        assert_eq!(err.to_string(), "No space left on device");
    }
}
