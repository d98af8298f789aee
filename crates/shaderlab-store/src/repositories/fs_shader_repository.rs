//! Filesystem implementation of the `ShaderRepository` trait.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use shaderlab_core::{RepositoryError, SHADER_EXTENSION, ShaderRepository, ShaderSource};

/// Stores each shader as `<name>.frag` directly inside one directory.
pub struct FsShaderRepository {
    dir: PathBuf,
}

impl FsShaderRepository {
    /// Create a repository over `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ShaderRepository for FsShaderRepository {
    async fn list(&self) -> Result<Vec<String>, RepositoryError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // Names that are not valid UTF-8 cannot be reported in JSON
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.ends_with(SHADER_EXTENSION) {
                names.push(name);
            }
        }

        Ok(names)
    }

    async fn save(&self, shader: &ShaderSource) -> Result<(), RepositoryError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(shader.name.as_str());
        tokio::fs::write(&path, shader.code.as_bytes()).await?;

        tracing::info!(
            path = %path.display(),
            bytes = shader.code.len(),
            "Saved shader"
        );
        Ok(())
    }
}
