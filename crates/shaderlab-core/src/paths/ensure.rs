//! Directory verification.

use std::path::Path;

use super::error::PathError;

/// Verify `path` is an existing directory without creating anything.
pub fn verify_directory(path: &Path) -> Result<(), PathError> {
    if !path.exists() {
        return Err(PathError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_verify_directory() {
        let temp = TempDir::new().unwrap();
        verify_directory(temp.path()).unwrap();

        let missing = temp.path().join("missing");
        assert!(matches!(
            verify_directory(&missing),
            Err(PathError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_verify_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("shaders");
        std::fs::write(&file, b"not a dir").unwrap();

        assert!(matches!(
            verify_directory(&file),
            Err(PathError::NotADirectory(_))
        ));
    }
}
