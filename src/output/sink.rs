//! Line sinks for live scan notifications.
//!
//! The scanner only needs to emit a line of text; where it goes is up to
//! the caller.

use std::sync::{Arc, Mutex, PoisonError};

/// Destination for progress and discovery lines.
pub trait LineSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Writes each line to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn emit(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps every emitted line in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to the
/// scanner and read the lines back through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LineSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
