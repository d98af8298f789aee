//! On-disk layout beneath the server root.

use std::path::{Path, PathBuf};

/// Name of the directory holding `.frag` files, relative to the root.
pub const SHADERS_DIR_NAME: &str = "shaders";

/// Name of the graph document, relative to the root.
pub const GRAPH_FILE_NAME: &str = "graph.json";

/// Every location the server reads or writes, derived from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLayout {
    root: PathBuf,
    shaders_dir: PathBuf,
    graph_file: PathBuf,
}

impl ServerLayout {
    /// Build the layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            shaders_dir: root.join(SHADERS_DIR_NAME),
            graph_file: root.join(GRAPH_FILE_NAME),
            root,
        }
    }

    /// Directory served to clients and holding all persisted files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn shaders_dir(&self) -> &Path {
        &self.shaders_dir
    }

    pub fn graph_file(&self) -> &Path {
        &self.graph_file
    }
}
