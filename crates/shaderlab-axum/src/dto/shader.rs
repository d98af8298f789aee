//! Shader save request body.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `POST /save`.
///
/// Both fields are optional at the wire level so that a missing field can be
/// answered with a 400 instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct SaveShaderRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl SaveShaderRequest {
    /// Parse a request body, which must be a JSON object.
    ///
    /// The positional form (`["name", "code"]`) is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(fields))
    }

    /// Requested filename, empty when absent.
    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or_default()
    }

    /// Shader code, empty when absent.
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }
}
