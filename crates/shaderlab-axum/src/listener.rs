//! Listening socket allocation with fallback to adjacent ports.

use std::io::ErrorKind;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, warn};

/// Errors from [`bind_with_retry`].
#[derive(Debug, Error)]
pub enum BindError {
    /// Every permitted port was already taken.
    #[error("No free port found after {attempts} attempt(s) starting at {first_port}")]
    PortsExhausted { first_port: u16, attempts: u32 },

    /// Binding failed for a reason other than the port being taken.
    #[error("Failed to bind {addr}: {source}")]
    Io {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind `host:port`, moving to the next port each time the address is in use.
///
/// With `max_attempts` unset the search only stops at a successful bind or
/// at port 65535. At least one attempt is always made. Errors other than
/// "address in use" are returned immediately.
pub async fn bind_with_retry(
    host: &str,
    port: u16,
    max_attempts: Option<u32>,
) -> Result<TcpListener, BindError> {
    let first_port = port;
    let mut port = port;
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);
        let addr = format!("{host}:{port}");

        match TcpListener::bind(&addr).await {
            Ok(listener) => {
                debug!(%addr, attempts, "Bound listener");
                return Ok(listener);
            }
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                let capped = max_attempts.is_some_and(|max| attempts >= max);
                let next = port.checked_add(1).filter(|_| !capped);
                let Some(next) = next else {
                    return Err(BindError::PortsExhausted {
                        first_port,
                        attempts,
                    });
                };

                warn!(port, next_port = next, "Port already in use, trying next");
                port = next;
            }
            Err(source) => return Err(BindError::Io { addr, source }),
        }
    }
}
