//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::scanner::{PortState, ScanSummary};
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Write results in human-readable plain text format.
pub fn write_plain<W: Write>(
    out: &mut W,
    summary: &ScanSummary,
    show_closed: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(
        out,
        "                    {} Scan Results",
        style("portprobe").cyan().bold()
    )?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    writeln!(out, "  {} {}", style("Host:").bold(), summary.host)?;
    writeln!(out, "  {} {}", style("Protocol:").bold(), summary.protocol)?;
    writeln!(out, "  {} {}", style("Ports:").bold(), summary.range)?;
    writeln!(
        out,
        "  {} {}",
        style("Started:").bold(),
        style(summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")).dim()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "  {} {} ports scanned in {:.2}s",
        style("Statistics:").bold(),
        summary.ports_scanned,
        summary.duration_ms as f64 / 1000.0
    )?;
    writeln!(
        out,
        "               {} open, {} closed",
        style(summary.open_ports).green().bold(),
        style(summary.closed_ports).red()
    )?;
    writeln!(out)?;

    let shown: Vec<_> = summary
        .results
        .iter()
        .filter(|r| show_closed || r.is_open())
        .collect();

    if shown.is_empty() {
        writeln!(out, "  {}", style("No ports to display.").dim())?;
    } else {
        writeln!(out, "  {}", style(THIN_RULE).dim())?;
        writeln!(
            out,
            "  {:>6}  {:^10}  {}",
            style("PORT").bold(),
            style("STATE").bold(),
            style("PROTO").bold()
        )?;
        writeln!(out, "  {}", style(THIN_RULE).dim())?;

        for result in shown {
            let state_style = match result.state {
                PortState::Open => Style::new().green().bold(),
                PortState::Closed => Style::new().red(),
            };

            writeln!(
                out,
                "  {:>6}  {:^10}  {}",
                result.port,
                state_style.apply_to(result.state.to_string()),
                result.protocol
            )?;
        }

        writeln!(out, "  {}", style(THIN_RULE).dim())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    Ok(())
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(host: &str, range: &str, ports: usize, timeout_secs: u64) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("portprobe").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Target: {}",
        style("•").dim(),
        style(host).white().bold()
    );
    println!(
        "{} Scanning {} ports ({}) with a {}s timeout...",
        style("•").dim(),
        style(ports).white().bold(),
        range,
        timeout_secs
    );
    println!();
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{Protocol, ScanResult};
    use crate::types::PortRange;
    use chrono::Utc;

    fn summary(results: Vec<ScanResult>) -> ScanSummary {
        let open_ports = results.iter().filter(|r| r.is_open()).count();
        ScanSummary {
            host: "127.0.0.1".into(),
            protocol: Protocol::Tcp,
            range: PortRange::new(4999, 5002).unwrap(),
            started_at: Utc::now(),
            duration_ms: 1500,
            ports_scanned: results.len(),
            open_ports,
            closed_ports: results.len() - open_ports,
            results,
        }
    }

    fn render(summary: &ScanSummary, show_closed: bool) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, summary, show_closed).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_plain_lists_ports() {
        let text = render(
            &summary(vec![
                ScanResult::new(Protocol::Tcp, 4999, PortState::Closed),
                ScanResult::new(Protocol::Tcp, 5000, PortState::Open),
            ]),
            true,
        );
        assert!(text.contains("Host: 127.0.0.1"));
        assert!(text.contains("Ports: 4999-5002"));
        assert!(text.contains("2 ports scanned in 1.50s"));
        assert!(text.contains("4999"));
        assert!(text.contains("5000"));
    }

    #[test]
    fn test_plain_hides_closed() {
        let results = vec![ScanResult::new(Protocol::Tcp, 4999, PortState::Closed)];
        let text = render(&summary(results), false);
        assert!(text.contains("No ports to display."));
    }
}
