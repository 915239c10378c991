//! Core type definitions.

mod port;

pub use port::PortRange;
