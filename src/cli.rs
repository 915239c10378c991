//! Command-line interface definitions for portprobe.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output::{self, StderrSink, StdoutSink};
use crate::scanner::{Protocol, RangeScanner, ScanSummary, TcpProber};
use crate::types::PortRange;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Worst-case scan time above which a plain-text run prints a warning.
const SLOW_SCAN_WARNING_SECS: u64 = 3600;

/// A sequential TCP port range scanner.
#[derive(Parser, Debug)]
#[command(name = "portprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe a host's TCP ports over a range", long_about = None)]
pub struct Cli {
    /// Host name or IP address to scan
    #[arg(value_name = "HOST")]
    pub host: String,

    /// Ports to scan as BEGIN-END (end exclusive) or a single port
    #[arg(short, long, default_value = "1-1024")]
    pub ports: PortRange,

    /// Connect timeout per port in seconds [default: from settings, 60]
    #[arg(short = 't', long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Output format for results [default: from settings, plain]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Report progress and open ports while scanning
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the scan header
    #[arg(short, long)]
    pub quiet: bool,

    /// List closed ports in the final report, overriding settings
    #[arg(long, conflicts_with = "open_only")]
    pub closed: bool,

    /// Only list open ports in the final report
    #[arg(long)]
    pub open_only: bool,

    /// Path to a custom settings file
    #[arg(long, value_name = "PATH", env = "PORTPROBE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Effective options after merging flags over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub timeout: Duration,
    pub format: OutputFormat,
    pub verbose: bool,
    pub show_closed: bool,
}

impl ScanOptions {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

/// Upper bound on scan time when every port runs into the full timeout.
pub fn worst_case_secs(timeout: Duration, ports: u16) -> u64 {
    timeout.as_secs().saturating_mul(u64::from(ports))
}

impl Cli {
    /// Load settings from `--config`, or the default location.
    pub fn settings(&self) -> CliResult<AppSettings> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(settings)
    }

    /// Merge command-line flags over `settings`. Flags win.
    pub fn options(&self, settings: &AppSettings) -> CliResult<ScanOptions> {
        let timeout = self
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| settings.timeout());
        if timeout.is_zero() {
            return Err(CliError::Other(
                "timeout must be at least one second".into(),
            ));
        }

        let format = match self.output {
            Some(format) => format,
            None => settings
                .default_output_format
                .parse()
                .map_err(CliError::Other)?,
        };

        Ok(ScanOptions {
            timeout,
            format,
            verbose: self.verbose || settings.verbose,
            show_closed: if self.open_only {
                false
            } else {
                self.closed || settings.show_closed
            },
        })
    }

    /// Execute the scan and print the report.
    pub async fn execute(&self, options: &ScanOptions) -> CliResult<ScanSummary> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(CliError::Other("host must not be empty".into()));
        }

        if !self.quiet && options.format == OutputFormat::Plain {
            output::print_scan_header(
                host,
                &self.ports.to_string(),
                usize::from(self.ports.len()),
                options.timeout.as_secs(),
            );

            // Every closed port that drops packets costs a full timeout.
            let worst_case = worst_case_secs(options.timeout, self.ports.len());
            if worst_case > SLOW_SCAN_WARNING_SECS {
                output::print_warning(&format!(
                    "ports are probed one at a time; this scan may take up to {}s",
                    worst_case
                ));
            }
        }

        let scanner = RangeScanner::new(TcpProber::new(options.timeout));
        // Keep stdout parseable for structured formats.
        let scanner = if options.format == OutputFormat::Plain {
            scanner.with_sink(StdoutSink)
        } else {
            scanner.with_sink(StderrSink)
        };

        let summary = scanner
            .run(Protocol::Tcp, host, self.ports, options.verbose)
            .await;

        output::print_results(&summary, options.format, options.show_closed)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("portprobe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["127.0.0.1"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.ports, PortRange::new(1, 1024).unwrap());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_ports_flag() {
        let cli = parse(&["localhost", "-p", "4999-5002"]);
        assert_eq!(cli.ports, PortRange::new(4999, 5002).unwrap());

        let cli = parse(&["localhost", "--ports", "22"]);
        assert_eq!(cli.ports.len(), 1);
    }

    #[test]
    fn test_invalid_ports_rejected() {
        assert!(Cli::try_parse_from(["portprobe", "localhost", "-p", "100-50"]).is_err());
        assert!(Cli::try_parse_from(["portprobe", "localhost", "-p", "http"]).is_err());
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = AppSettings {
            timeout_secs: 30,
            default_output_format: "json".into(),
            ..Default::default()
        };

        let options = parse(&["h"]).options(&settings).unwrap();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.show_closed);

        let options = parse(&["h", "-t", "2", "-o", "csv", "-v", "--open-only"])
            .options(&settings)
            .unwrap();
        assert_eq!(options.timeout, Duration::from_secs(2));
        assert_eq!(options.format, OutputFormat::Csv);
        assert!(options.verbose);
        assert!(!options.show_closed);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = parse(&["h", "-t", "0"]).options(&AppSettings::default());
        assert!(matches!(result, Err(CliError::Other(_))));
    }

    #[test]
    fn test_unknown_settings_format_rejected() {
        let settings = AppSettings {
            default_output_format: "xml".into(),
            ..Default::default()
        };
        assert!(parse(&["h"]).options(&settings).is_err());
    }

    #[test]
    fn test_worst_case_saturates() {
        let options = parse(&["h", "-p", "1000-1003", "-t", "18446744073709551615"])
            .options(&AppSettings::default())
            .unwrap();
        assert_eq!(options.timeout, Duration::from_secs(u64::MAX));
        assert_eq!(worst_case_secs(options.timeout, 3), u64::MAX);
        assert_eq!(worst_case_secs(Duration::from_secs(60), 1024), 61_440);
    }

    #[test]
    fn test_closed_flag_overrides_settings() {
        let settings = AppSettings {
            show_closed: false,
            ..Default::default()
        };
        assert!(!parse(&["h"]).options(&settings).unwrap().show_closed);
        assert!(parse(&["h", "--closed"]).options(&settings).unwrap().show_closed);
        assert!(Cli::try_parse_from(["portprobe", "h", "--closed", "--open-only"]).is_err());
    }

    #[test]
    fn test_log_level_follows_merged_verbosity() {
        let quiet = parse(&["h"]).options(&AppSettings::default()).unwrap();
        assert_eq!(quiet.log_level(), "warn");

        let settings = AppSettings {
            verbose: true,
            ..Default::default()
        };
        let verbose = parse(&["h"]).options(&settings).unwrap();
        assert_eq!(verbose.log_level(), "info");
    }
}
