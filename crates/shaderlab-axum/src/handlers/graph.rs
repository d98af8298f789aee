//! Graph handler - persists the editor graph document.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use shaderlab_core::GRAPH_FILE_NAME;

use crate::dto::StatusMessage;
use crate::error::HttpError;
use crate::state::AppState;

/// Store the raw request body as the graph document. Not parsed.
pub async fn save(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusMessage>, HttpError> {
    state.graph.save(&body).await?;
    Ok(Json(StatusMessage::ok(format!(
        "Graph saved to {GRAPH_FILE_NAME}"
    ))))
}
