//! Axum HTTP adapter for the ShaderLab dev server.
//!
//! Serves the editor's static assets from the server root and exposes the
//! shader listing, shader save and graph save endpoints. Every response is
//! marked uncacheable.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/shaders`, `/list_shaders` | [`handlers::shaders::list`] |
//! | POST | `/save` | [`handlers::shaders::save`] |
//! | POST | `/save_graph` | [`handlers::graph::save`] |
//! | GET/HEAD | anything else | static files under the root |
//! | other | anything else | empty 404 |

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are used by tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod listener;
pub mod routes;
pub mod shutdown;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, DEFAULT_HOST, DEFAULT_PORT, ServerConfig, bootstrap, serve, start_server,
};
pub use error::HttpError;
pub use listener::{BindError, bind_with_retry};
pub use routes::{NO_CACHE, create_router};
pub use state::AppState;
