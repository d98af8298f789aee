//! Route definitions and router construction.
//!
//! Known API routes are matched first. Every other GET or HEAD is answered
//! from the server root by `ServeDir`; any other method gets an empty 404.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::routing::{MethodRouter, get, get_service, post};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// `Cache-Control` value attached to every response.
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Static files for GET/HEAD, empty 404 for anything else.
fn static_responder(root: &Path) -> MethodRouter {
    get_service(ServeDir::new(root)).fallback(not_found)
}

/// Create the main Axum router.
///
/// Each API route falls back to the static responder for methods it does
/// not handle, so `GET /save` is a static lookup and `POST /shaders` is a 404.
pub fn create_router(ctx: AxumContext) -> Router {
    let static_files = static_responder(ctx.layout.root());
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route(
            "/shaders",
            get(handlers::shaders::list).fallback_service(static_files.clone()),
        )
        // Path used by the earliest editor builds
        .route(
            "/list_shaders",
            get(handlers::shaders::list).fallback_service(static_files.clone()),
        )
        .route(
            "/save",
            post(handlers::shaders::save).fallback_service(static_files.clone()),
        )
        .route(
            "/save_graph",
            post(handlers::graph::save).fallback_service(static_files.clone()),
        )
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
