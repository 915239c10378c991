//! Scanner module - drives a prober across a port range.
//!
//! Ports are probed one at a time in ascending order. Progress and
//! discovery notifications go to a [`LineSink`]; they never affect the
//! returned results.

pub mod progress;
pub mod tcp;
pub mod traits;

use crate::error::ProbeResult;
use crate::output::{LineSink, StdoutSink};
use crate::types::PortRange;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, error, info};

pub use progress::ProgressSchedule;
pub use tcp::{probe, probe_with_timeout, TcpProber, DEFAULT_TIMEOUT};
pub use traits::{BoxedProber, PortState, Prober, Protocol, ScanResult};

/// Complete scan results with run metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub host: String,
    pub protocol: Protocol,
    pub range: PortRange,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub ports_scanned: usize,
    pub open_ports: usize,
    pub closed_ports: usize,
    pub results: Vec<ScanResult>,
}

impl ScanSummary {
    fn new(
        host: &str,
        protocol: Protocol,
        range: PortRange,
        started_at: DateTime<Utc>,
        duration_ms: u64,
        results: Vec<ScanResult>,
    ) -> Self {
        let open_ports = results.iter().filter(|r| r.is_open()).count();
        Self {
            host: host.to_string(),
            protocol,
            range,
            started_at,
            duration_ms,
            ports_scanned: results.len(),
            open_ports,
            closed_ports: results.len() - open_ports,
            results,
        }
    }

    /// Open ports in ascending order.
    pub fn open(&self) -> impl Iterator<Item = &ScanResult> {
        self.results.iter().filter(|r| r.is_open())
    }
}

/// Sequential range scanner.
pub struct RangeScanner {
    prober: BoxedProber,
    sink: Box<dyn LineSink>,
}

impl RangeScanner {
    /// Create a scanner that reports to standard output.
    pub fn new(prober: impl Prober + 'static) -> Self {
        Self {
            prober: Box::new(prober),
            sink: Box::new(StdoutSink),
        }
    }

    /// Send notifications to `sink` instead of standard output.
    pub fn with_sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Scan every port in `range`, in ascending order.
    ///
    /// With `verbose`, progress labels are emitted at decile boundaries
    /// (ranges of 100 ports or more) and each open port is announced as
    /// soon as it is found. A port whose probe errors is logged and left
    /// out of the results.
    pub async fn scan(
        &self,
        protocol: Protocol,
        host: &str,
        range: PortRange,
        verbose: bool,
    ) -> Vec<ScanResult> {
        let schedule = match ProgressSchedule::build(u32::from(range.len())) {
            Ok(schedule) => Some(schedule),
            Err(e) => {
                debug!(%range, reason = %e, "progress reporting disabled");
                None
            }
        };

        debug!(host, %protocol, %range, timeout = ?self.prober.timeout(), "starting range scan");

        let mut results = Vec::with_capacity(usize::from(range.len()));
        for port in range.iter() {
            if verbose {
                let remaining = u32::from(range.remaining_from(port));
                if let Some(label) = schedule.as_ref().and_then(|s| s.label_for(remaining)) {
                    self.sink.emit(label);
                }
            }

            let state = match self.prober.probe(protocol, host, port).await {
                Ok(state) => state,
                Err(e) => {
                    error!(host, port, error = %e, "probe failed, skipping port");
                    continue;
                }
            };

            if verbose && state == PortState::Open {
                self.sink.emit(&format!("Found open port: {}", port));
            }
            results.push(ScanResult::new(protocol, port, state));
        }

        results
    }

    /// Scan `range` and wrap the results with timing and counts.
    pub async fn run(
        &self,
        protocol: Protocol,
        host: &str,
        range: PortRange,
        verbose: bool,
    ) -> ScanSummary {
        let started_at = Utc::now();
        let start = Instant::now();

        let results = self.scan(protocol, host, range, verbose).await;
        let summary = ScanSummary::new(
            host,
            protocol,
            range,
            started_at,
            start.elapsed().as_millis() as u64,
            results,
        );

        info!(
            host,
            %range,
            open = summary.open_ports,
            closed = summary.closed_ports,
            duration_ms = summary.duration_ms,
            "scan complete"
        );
        summary
    }
}

/// Scan `[port_begin, port_end)` silently with the default TCP prober.
pub async fn scan_range(
    protocol: Protocol,
    host: &str,
    port_begin: u16,
    port_end: u16,
) -> ProbeResult<Vec<ScanResult>> {
    let range = PortRange::new(port_begin, port_end)?;
    Ok(RangeScanner::new(TcpProber::default())
        .scan(protocol, host, range, false)
        .await)
}

/// Scan `[port_begin, port_end)`, printing progress and open ports to stdout.
pub async fn scan_range_detailed(
    protocol: Protocol,
    host: &str,
    port_begin: u16,
    port_end: u16,
) -> ProbeResult<Vec<ScanResult>> {
    let range = PortRange::new(port_begin, port_end)?;
    Ok(RangeScanner::new(TcpProber::default())
        .scan(protocol, host, range, true)
        .await)
}
