//! Composition utilities for building filesystem repositories.
//!
//! Focused purely on construction; no domain logic.

use std::sync::Arc;

use shaderlab_core::{Repos, ServerLayout};

use crate::repositories::{FsGraphRepository, FsShaderRepository};

/// Factory for creating repository instances with filesystem backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Build all filesystem repositories for `layout`.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(layout: &ServerLayout) -> Repos {
        Repos::new(
            Arc::new(FsShaderRepository::new(layout.shaders_dir())),
            Arc::new(FsGraphRepository::new(layout.graph_file())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repos_share_the_layout_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let layout = ServerLayout::new(temp.path());
        let repos = StoreFactory::build_repos(&layout);

        repos.graph.save(b"{}").await.unwrap();
        assert!(layout.graph_file().is_file());

        assert!(repos.shaders.list().await.unwrap().is_empty());
    }
}
