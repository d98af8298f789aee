//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
