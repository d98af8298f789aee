//! Server root detection and resolution.
//!
//! Private helpers decide where the server's own resources live depending on
//! how the binary was built. Public API is re-exported from `paths`.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Workspace directory the binary was built from, in debug builds.
///
/// `cargo run` from anywhere in the tree then serves the checkout itself.
#[allow(clippy::unnecessary_wraps)] // Option is needed for release builds
fn build_tree_root() -> Option<PathBuf> {
    #[cfg(debug_assertions)]
    {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .canonicalize()
            .ok()
    }

    #[cfg(not(debug_assertions))]
    {
        None
    }
}

/// Directory containing the running executable.
fn executable_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf)
}

/// Get the directory holding the server's own resources.
///
/// Resolution order:
/// 1. The source tree (debug builds)
/// 2. The directory containing the executable
/// 3. The current working directory
pub fn resource_root() -> Result<PathBuf, PathError> {
    if let Some(root) = build_tree_root() {
        return Ok(root);
    }

    if let Some(dir) = executable_dir() {
        return Ok(dir);
    }

    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}

/// Resolve the server root from an optional user-supplied path.
///
/// An explicit path is made absolute against the current directory and
/// canonicalized when it exists. Without one, falls back to [`resource_root`].
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    let Some(raw) = explicit else {
        return resource_root();
    };

    if raw.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    let absolute = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(raw))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))?
    };

    Ok(absolute.canonicalize().unwrap_or(absolute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_root_is_canonicalized() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_root(Some(temp.path())).unwrap();
        assert_eq!(resolved, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_relative_root_is_made_absolute() {
        let resolved = resolve_root(Some(Path::new("does-not-exist-yet"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("does-not-exist-yet"));
    }

    #[test]
    fn test_empty_root_rejected() {
        let err = resolve_root(Some(Path::new(""))).unwrap_err();
        assert!(matches!(err, PathError::EmptyPath));
    }

    #[test]
    fn test_default_root_is_a_directory() {
        let root = resolve_root(None).unwrap();
        assert!(root.is_dir(), "{} should be a directory", root.display());
    }
}
