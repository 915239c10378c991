//! TCP connect prober.
//!
//! Classifies a port by attempting a full TCP handshake through the
//! operating system's socket API. Hostnames are resolved as part of the
//! connect, so a resolution failure is just another closed port.

use crate::error::ProbeResult;
use crate::scanner::traits::{PortState, Prober, Protocol};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{trace, warn};

/// Default per-port connect timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// TCP connect prober.
///
/// Does not require elevated privileges. Opens and closes exactly one
/// connection per probe; never retries.
#[derive(Debug, Clone)]
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    /// Create a new TCP prober with the given connect timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Attempt to connect to `host:port` within the timeout.
    async fn attempt_connect(&self, host: &str, port: u16) -> Option<TcpStream> {
        match timeout(self.timeout, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => Some(stream),
            Ok(Err(e)) => {
                trace!(host, port, error = %e, "connect failed");
                None
            }
            Err(_) => {
                trace!(host, port, timeout = ?self.timeout, "connect timed out");
                None
            }
        }
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

/// Shut the stream down and drop it; a failed shutdown is only logged.
async fn release(mut stream: TcpStream, host: &str, port: u16) {
    if let Err(e) = stream.shutdown().await {
        warn!(host, port, error = %e, "error closing the connection");
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, protocol: Protocol, host: &str, port: u16) -> ProbeResult<PortState> {
        let state = match protocol {
            Protocol::Tcp => match self.attempt_connect(host, port).await {
                Some(stream) => {
                    release(stream, host, port).await;
                    PortState::Open
                }
                None => PortState::Closed,
            },
        };
        Ok(state)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Probe one port with the default 60 second timeout.
pub async fn probe(protocol: Protocol, host: &str, port: u16) -> PortState {
    probe_with_timeout(protocol, host, port, DEFAULT_TIMEOUT).await
}

/// Probe one port with an explicit timeout.
///
/// Every failure, including DNS resolution, folds into [`PortState::Closed`].
pub async fn probe_with_timeout(
    protocol: Protocol,
    host: &str,
    port: u16,
    timeout: Duration,
) -> PortState {
    TcpProber::new(timeout)
        .probe(protocol, host, port)
        .await
        .unwrap_or(PortState::Closed)
}
