//! Command-line arguments.
//!
//! Every option can also come from the environment (or a `.env` file);
//! flags win over environment variables.

use std::path::PathBuf;

use clap::Parser;
use shaderlab_axum::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use shaderlab_core::{PathError, resolve_root};

/// Local development server for the ShaderLab editor.
#[derive(Debug, Parser)]
#[command(name = "shaderlab")]
#[command(about = "Serve the ShaderLab editor and persist shaders locally")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "SHADERLAB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to try first; the next free port is used if it is taken
    #[arg(short, long, env = "SHADERLAB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory to serve and save into (defaults to the resource root)
    #[arg(long, env = "SHADERLAB_ROOT")]
    pub root: Option<PathBuf>,

    /// Give up after this many ports (unbounded when omitted)
    #[arg(
        long = "max-port-attempts",
        env = "SHADERLAB_MAX_PORT_ATTEMPTS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_port_attempts: Option<u32>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into a server configuration.
    ///
    /// Resolves the server root, falling back to the resource root when
    /// none was given.
    pub fn server_config(&self) -> Result<ServerConfig, PathError> {
        Ok(ServerConfig {
            host: self.host.clone(),
            port: self.port,
            root: resolve_root(self.root.as_deref())?,
            max_port_attempts: self.max_port_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "shaderlab",
            "--host",
            "127.0.0.1",
            "-p",
            "9100",
            "--max-port-attempts",
            "5",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 9100);
        assert_eq!(cli.max_port_attempts, Some(5));
        assert!(cli.verbose);
    }

    #[test]
    fn test_zero_port_attempts_rejected() {
        assert!(Cli::try_parse_from(["shaderlab", "--max-port-attempts", "0"]).is_err());
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        assert!(Cli::try_parse_from(["shaderlab", "--port", "http"]).is_err());
    }

    #[test]
    fn test_server_config_uses_explicit_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["shaderlab", "--root", root, "--port", "8123"]).unwrap();
        let config = cli.server_config().unwrap();

        assert_eq!(config.port, 8123);
        assert_eq!(config.root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_server_config_keeps_nonexistent_root_for_bootstrap_to_reject() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let cli = Cli::try_parse_from(["shaderlab", "--root", missing.to_str().unwrap()]).unwrap();
        let config = cli.server_config().unwrap();
        assert!(config.root.ends_with("nope"));
        assert!(!config.root.exists());
    }
}
