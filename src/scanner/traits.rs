//! Probe trait abstraction and the scan data model.
//!
//! The `Prober` trait is the seam between the range scanner and the
//! network, enabling substitute probes in tests.

use crate::error::ProbeResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Transport protocol used for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP connect (full handshake).
    #[default]
    Tcp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
        }
    }
}

impl std::str::FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            _ => Err(format!("unsupported protocol: {}", s)),
        }
    }
}

/// Reachability of a port after exactly one probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    /// A connection was established within the timeout.
    Open,
    /// The connection attempt failed for any reason.
    Closed,
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Result of probing a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub protocol: Protocol,
    pub port: u16,
    pub state: PortState,
}

impl ScanResult {
    pub fn new(protocol: Protocol, port: u16, state: PortState) -> Self {
        Self {
            protocol,
            port,
            state,
        }
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

/// Trait for single-port connectivity checks.
///
/// The TCP implementation never fails: every connect error is reported as
/// [`PortState::Closed`]. The signature stays fallible so the range scanner
/// can skip a port whose probe does report an error.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe one port on `host`.
    async fn probe(&self, protocol: Protocol, host: &str, port: u16) -> ProbeResult<PortState>;

    /// Get the configured timeout.
    fn timeout(&self) -> Duration;
}

/// A boxed prober for dynamic dispatch.
pub type BoxedProber = Box<dyn Prober>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_state_display() {
        assert_eq!(PortState::Open.to_string(), "open");
        assert_eq!(PortState::Closed.to_string(), "closed");
    }

    #[test]
    fn test_protocol_from_str() {
        assert_eq!("tcp".parse::<Protocol>().unwrap(), Protocol::Tcp);
        assert_eq!("TCP".parse::<Protocol>().unwrap(), Protocol::Tcp);
        assert!("udp".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_scan_result_serialization() {
        let result = ScanResult::new(Protocol::Tcp, 5000, PortState::Open);
        assert!(result.is_open());

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"protocol":"tcp","port":5000,"state":"open"}"#);
    }
}
