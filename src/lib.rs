//! # portprobe - a sequential TCP port range scanner
//!
//! portprobe walks a half-open port range `[begin, end)` on one host, one
//! port at a time, and classifies each port as open or closed. Detailed
//! scans additionally report progress at decile boundaries and announce
//! open ports as they are found.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portprobe::scanner::{scan_range_detailed, Protocol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), portprobe::ScanError> {
//!     let results = scan_range_detailed(Protocol::Tcp, "127.0.0.1", 1, 1024).await?;
//!     for result in results.iter().filter(|r| r.is_open()) {
//!         println!("{}/{} is {}", result.port, result.protocol, result.state);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`scanner`] - the `Prober` trait, the TCP prober, the progress schedule
//!   and the range scanner
//! - [`types`] - the `PortRange` type
//! - [`output`] - line sinks and result formatters
//! - [`config`] - persisted settings
//! - [`cli`] - command-line front end
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, ScanError};
pub use scanner::{
    probe, scan_range, scan_range_detailed, PortState, Prober, Protocol, RangeScanner, ScanResult,
};
pub use types::PortRange;
