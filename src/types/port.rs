//! Port range type with validation and parsing.
//!
//! `PortRange` is a half-open interval `[begin, end)` over `u16`. An empty
//! range (`begin == end`) is valid and simply contains no ports.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A half-open range of ports, `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRange {
    begin: u16,
    end: u16,
}

impl PortRange {
    /// Create a new port range, rejecting `begin > end`.
    pub fn new(begin: u16, end: u16) -> Result<Self, ScanError> {
        if begin > end {
            Err(ScanError::InvalidRange { begin, end })
        } else {
            Ok(Self { begin, end })
        }
    }

    /// A range containing exactly `port`.
    ///
    /// Fails for 65535, which cannot be expressed with an exclusive `u16` end.
    pub fn single(port: u16) -> Result<Self, ScanError> {
        let end = port.checked_add(1).ok_or_else(|| {
            ScanError::InvalidPortSpec(format!("port {port} has no exclusive upper bound"))
        })?;
        Self::new(port, end)
    }

    /// First port in the range.
    #[inline]
    pub const fn begin(&self) -> u16 {
        self.begin
    }

    /// Exclusive upper bound.
    #[inline]
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports in the range.
    #[inline]
    pub const fn len(&self) -> u16 {
        self.end - self.begin
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    #[inline]
    pub const fn contains(&self, port: u16) -> bool {
        port >= self.begin && port < self.end
    }

    /// Ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.begin..self.end
    }

    /// Ports left to scan, counting `port` itself.
    #[inline]
    pub const fn remaining_from(&self, port: u16) -> u16 {
        self.end - port
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// Parses `"BEGIN-END"` (end exclusive) or a single port `"N"`.
impl FromStr for PortRange {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ScanError::InvalidPortSpec(
                "empty port specification".into(),
            ));
        }

        let parse = |part: &str| -> Result<u16, ScanError> {
            part.trim()
                .parse()
                .map_err(|_| ScanError::InvalidPortSpec(part.trim().to_string()))
        };

        match s.split_once('-') {
            Some((begin, end)) => Self::new(parse(begin)?, parse(end)?),
            None => Self::single(parse(s)?),
        }
    }
}
