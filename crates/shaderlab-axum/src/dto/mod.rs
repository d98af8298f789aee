//! Request and response bodies for the JSON endpoints.

mod shader;
mod status;

pub use shader::SaveShaderRequest;
pub use status::{Status, StatusMessage};
