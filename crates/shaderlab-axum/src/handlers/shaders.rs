//! Shader handlers - listing and saving `.frag` files.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use shaderlab_core::SHADERS_DIR_NAME;

use crate::dto::{SaveShaderRequest, StatusMessage};
use crate::error::HttpError;
use crate::state::AppState;

/// List stored shader filenames.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>, HttpError> {
    Ok(Json(state.shaders.list().await?))
}

/// Save a shader from a `{filename, code}` body.
///
/// The body is parsed by hand: any content type is accepted, and a body
/// that is not a JSON object gets the JSON error envelope.
pub async fn save(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusMessage>, HttpError> {
    let req = SaveShaderRequest::from_json(&body)?;
    let name = state.shaders.save(req.filename(), req.code()).await?;

    Ok(Json(StatusMessage::ok(format!(
        "Saved to {SHADERS_DIR_NAME}/{name}"
    ))))
}
