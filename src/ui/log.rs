//! Push log sinks.
//!
//! The push log is an append-only text channel that receives the resolved
//! push parameters, discovery failures, and raw `git` output. It is passed
//! explicitly to every component that writes to it.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use console::Term;

use crate::error::Result;

use super::OutputMode;

/// Append-only log channel.
pub trait OutputLog {
    /// Append one line to the log.
    fn append_line(&self, line: &str);
}

impl<T: OutputLog + ?Sized> OutputLog for &T {
    fn append_line(&self, line: &str) {
        (**self).append_line(line);
    }
}

/// Writes log lines to standard error.
pub struct ConsoleLog {
    term: Term,
    mode: OutputMode,
}

impl ConsoleLog {
    /// Create a console log honoring the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stderr(),
            mode,
        }
    }
}

impl OutputLog for ConsoleLog {
    fn append_line(&self, line: &str) {
        if self.mode.shows_log() {
            self.term.write_line(line).ok();
        }
    }
}

/// Appends log lines to a file.
pub struct FileLog {
    file: Mutex<File>,
}

impl FileLog {
    /// Open (or create) a log file for appending.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl OutputLog for FileLog {
    fn append_line(&self, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "{}", line).ok();
        }
    }
}

/// Forwards every line to several logs.
#[derive(Default)]
pub struct TeeLog<'a> {
    sinks: Vec<Box<dyn OutputLog + 'a>>,
}

impl<'a> TeeLog<'a> {
    /// Create an empty tee.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn with(mut self, sink: Box<dyn OutputLog + 'a>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl OutputLog for TeeLog<'_> {
    fn append_line(&self, line: &str) {
        for sink in &self.sinks {
            sink.append_line(line);
        }
    }
}

/// Captures log lines in memory (for tests).
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Check if any line contains the given text.
    pub fn contains(&self, text: &str) -> bool {
        self.lines().iter().any(|l| l.contains(text))
    }
}

impl OutputLog for MemoryLog {
    fn append_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
