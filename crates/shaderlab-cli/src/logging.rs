//! Console logging setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
pub const fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the `--verbose` flag.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose).to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
