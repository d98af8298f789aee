//! Graph document repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;

/// Repository for the single editor graph document.
///
/// The document is opaque: implementations store the bytes verbatim and
/// never parse them.
#[async_trait]
pub trait GraphRepository: Send + Sync {
    /// Replace the stored document with `document`.
    async fn save(&self, document: &[u8]) -> Result<(), RepositoryError>;
}
