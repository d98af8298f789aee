//! Shader naming rules.
//!
//! A shader is stored as a single `.frag` file directly inside the shaders
//! directory. `ShaderName` is the only way to produce a stored filename, so a
//! requested name can never escape that directory.

use std::fmt;

use thiserror::Error;

/// Suffix every stored shader filename carries.
pub const SHADER_EXTENSION: &str = ".frag";

/// Errors produced while turning a requested filename into a [`ShaderName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderNameError {
    /// No filename was supplied.
    #[error("Filename cannot be empty")]
    Empty,

    /// The final path segment cannot name a file (`dir/`, `.`, `..`).
    #[error("Invalid filename: {0}")]
    Invalid(String),
}

/// A sanitized shader filename: a bare basename ending in `.frag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderName(String);

impl ShaderName {
    /// Sanitize a client-supplied filename.
    ///
    /// Keeps only the final path segment (`/` and `\` both count as
    /// separators) and appends `.frag` when it is missing.
    pub fn sanitize(raw: &str) -> Result<Self, ShaderNameError> {
        if raw.is_empty() {
            return Err(ShaderNameError::Empty);
        }

        let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
        if base.is_empty() || base == "." || base == ".." {
            return Err(ShaderNameError::Invalid(raw.to_string()));
        }

        if base.ends_with(SHADER_EXTENSION) {
            Ok(Self(base.to_string()))
        } else {
            Ok(Self(format!("{base}{SHADER_EXTENSION}")))
        }
    }

    /// The sanitized filename.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShaderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A shader ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub name: ShaderName,
    pub code: String,
}

impl ShaderSource {
    pub fn new(name: ShaderName, code: impl Into<String>) -> Self {
        Self {
            name,
            code: code.into(),
        }
    }
}
