//! JSON output formatting.

use crate::scanner::ScanSummary;
use std::io::{self, Write};

/// Write the full summary as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, summary: &ScanSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::other)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{PortState, Protocol, ScanResult};
    use crate::types::PortRange;
    use chrono::Utc;

    #[test]
    fn test_json_contains_results() {
        let summary = ScanSummary {
            host: "localhost".into(),
            protocol: Protocol::Tcp,
            range: PortRange::new(80, 82).unwrap(),
            started_at: Utc::now(),
            duration_ms: 3,
            ports_scanned: 2,
            open_ports: 1,
            closed_ports: 1,
            results: vec![
                ScanResult::new(Protocol::Tcp, 80, PortState::Open),
                ScanResult::new(Protocol::Tcp, 81, PortState::Closed),
            ],
        };

        let mut buf = Vec::new();
        write_json(&mut buf, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["host"], "localhost");
        assert_eq!(value["range"]["begin"], 80);
        assert_eq!(value["results"][0]["state"], "open");
        assert_eq!(value["results"][1]["protocol"], "tcp");
    }
}
