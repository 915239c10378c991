//! CSV output formatting.

use crate::scanner::ScanSummary;
use std::io::{self, Write};

/// Write one row per port result.
pub fn write_csv<W: Write>(
    out: &mut W,
    summary: &ScanSummary,
    show_closed: bool,
) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["host", "protocol", "port", "state"])?;

    for result in summary
        .results
        .iter()
        .filter(|r| show_closed || r.is_open())
    {
        wtr.write_record([
            summary.host.as_str(),
            &result.protocol.to_string(),
            &result.port.to_string(),
            &result.state.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
