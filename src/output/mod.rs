//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of scan results,
//! plus the line sinks used for live notifications during a scan.

mod csv_format;
mod json_format;
mod plain;
mod sink;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_scan_header, print_warning, write_plain};
pub use sink::{LineSink, RecordingSink, StderrSink, StdoutSink};

use crate::cli::OutputFormat;
use crate::scanner::ScanSummary;
use std::io::{self, Write};

/// Format and print scan results according to the specified format.
pub fn print_results(
    summary: &ScanSummary,
    format: OutputFormat,
    show_closed: bool,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, summary, format, show_closed)?;
    out.flush()
}

/// Format scan results into any writer.
pub fn write_results<W: Write>(
    out: &mut W,
    summary: &ScanSummary,
    format: OutputFormat,
    show_closed: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, summary, show_closed),
        OutputFormat::Json => write_json(out, summary),
        OutputFormat::Csv => write_csv(out, summary, show_closed),
    }
}
