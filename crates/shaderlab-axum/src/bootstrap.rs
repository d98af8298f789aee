//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where storage is wired together for the
//! web adapter. All concrete implementations are instantiated here.

use std::future::Future;
use std::path::PathBuf;

use anyhow::Result;
use shaderlab_core::{
    GraphService, Repos, ServerLayout, ShaderService, resource_root, verify_directory,
};
use shaderlab_store::StoreFactory;
use tokio::net::TcpListener;
use tracing::info;

use crate::listener::bind_with_retry;
use crate::routes::create_router;
use crate::shutdown::shutdown_signal;

/// Port tried first when none is configured.
pub const DEFAULT_PORT: u16 = 8000;

/// Address bound when none is configured (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Preferred port; later ports are tried while this one is taken.
    pub port: u16,
    /// Directory served to clients and holding `shaders/` and `graph.json`.
    pub root: PathBuf,
    /// Upper bound on bind attempts. `None` keeps trying until a port binds.
    pub max_port_attempts: Option<u32>,
}

impl ServerConfig {
    /// Create config with default host, port and resource root.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root: resource_root()?,
            max_port_attempts: None,
        })
    }

    /// Set the server root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the preferred port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Cap the number of bind attempts.
    #[must_use]
    pub const fn with_max_port_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_port_attempts = attempts;
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the resolved layout and the services handlers delegate to.
pub struct AxumContext {
    /// Paths everything is served from and written to.
    pub layout: ServerLayout,
    /// Shader listing and saving.
    pub shaders: ShaderService,
    /// Graph document saving.
    pub graph: GraphService,
}

impl AxumContext {
    /// Assemble a context from already-built repositories.
    pub fn new(layout: ServerLayout, repos: Repos) -> Self {
        Self {
            layout,
            shaders: ShaderService::new(repos.shaders),
            graph: GraphService::new(repos.graph),
        }
    }
}

/// Bootstrap the Axum server with filesystem storage rooted at `config.root`.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    verify_directory(&config.root)?;

    let layout = ServerLayout::new(&config.root);

    // Log resolved paths at startup for diagnostics
    info!(
        target: "shaderlab.paths",
        root = %layout.root().display(),
        shaders_dir = %layout.shaders_dir().display(),
        graph_file = %layout.graph_file().display(),
        "Axum bootstrap resolved paths"
    );

    let repos = StoreFactory::build_repos(&layout);
    Ok(AxumContext::new(layout, repos))
}

/// Serve `ctx` on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish once shutdown begins.
pub async fn serve<F>(listener: TcpListener, ctx: AxumContext, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(ctx);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Start the web server and run until interrupted.
///
/// Binds the first free port at or above `config.port`, then serves until
/// Ctrl-C (or SIGTERM on Unix).
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    let listener = bind_with_retry(&config.host, config.port, config.max_port_attempts).await?;
    let port = listener.local_addr()?.port();
    info!("Serving ShaderLab at http://localhost:{port}");

    serve(listener, ctx, shutdown_signal()).await
}
