//! ShaderLab entry point - the composition root.

use clap::Parser;

use shaderlab_cli::{Cli, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.server_config()?;
    shaderlab_axum::start_server(config).await
}
