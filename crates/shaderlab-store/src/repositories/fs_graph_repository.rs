//! Filesystem implementation of the `GraphRepository` trait.

use std::path::PathBuf;

use async_trait::async_trait;

use shaderlab_core::{GraphRepository, RepositoryError};

/// Stores the graph document as a single file, replaced on every save.
pub struct FsGraphRepository {
    path: PathBuf,
}

impl FsGraphRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GraphRepository for FsGraphRepository {
    async fn save(&self, document: &[u8]) -> Result<(), RepositoryError> {
        tokio::fs::write(&self.path, document).await?;

        tracing::info!(
            path = %self.path.display(),
            bytes = document.len(),
            "Saved graph document"
        );
        Ok(())
    }
}
