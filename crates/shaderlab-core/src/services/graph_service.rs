//! Graph service - persists the editor's graph document.

use std::sync::Arc;

use crate::ports::{CoreError, GraphRepository};

/// Service for graph document operations.
pub struct GraphService {
    repo: Arc<dyn GraphRepository>,
}

impl GraphService {
    /// Create a new graph service.
    pub fn new(repo: Arc<dyn GraphRepository>) -> Self {
        Self { repo }
    }

    /// Overwrite the stored graph document with `document`, byte for byte.
    pub async fn save(&self, document: &[u8]) -> Result<(), CoreError> {
        self.repo.save(document).await.map_err(CoreError::from)
    }
}
