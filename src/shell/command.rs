//! External command execution.

use crate::error::{GerritPushError, Result};
use crate::ui::OutputLog;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Captured result of one successful subprocess invocation.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
        }
    }
}

/// Output line from command execution.
#[derive(Debug, Clone)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

impl OutputLine {
    /// The line text regardless of stream.
    pub fn text(&self) -> &str {
        match self {
            Self::Stdout(s) | Self::Stderr(s) => s,
        }
    }
}

/// Runs external tools.
///
/// Each call is an isolated subprocess; implementations hold no state that
/// one invocation could leak into another.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`.
    ///
    /// When `stream` is given, every output line is appended to it as soon
    /// as it is read. A non-zero exit is an error carrying the captured
    /// standard error.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        stream: Option<&dyn OutputLog>,
    ) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        stream: Option<&dyn OutputLog>,
    ) -> Result<CommandResult> {
        tracing::debug!("Running {} {:?} in {}", program, args, cwd.display());
        match stream {
            Some(log) => execute_streaming(program, args, cwd, &mut |line: OutputLine| {
                log.append_line(line.text())
            }),
            None => execute(program, args, cwd),
        }
    }
}

/// Execute a command and capture its output.
pub fn execute(program: &str, args: &[&str], cwd: &Path) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    finish(program, output.status, stdout, stderr, start.elapsed())
}

/// Execute a command, handing each output line to `callback` as it arrives.
///
/// The callback runs on the calling thread.
pub fn execute_streaming(
    program: &str,
    args: &[&str],
    cwd: &Path,
    callback: &mut dyn FnMut(OutputLine),
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
        (Some(out), Some(err)) => (out, err),
        _ => {
            return Err(GerritPushError::ProcessError {
                message: format!("failed to capture output of {}", program),
            })
        }
    };

    let (tx, rx) = mpsc::channel();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    let stdout_handle = thread::spawn(move || {
        forward_lines(BufReader::new(stdout), |line| {
            let _ = tx_stdout.send(OutputLine::Stdout(line));
        })
    });

    let stderr_handle = thread::spawn(move || {
        forward_lines(BufReader::new(stderr), |line| {
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        })
    });

    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let status = child.wait().map_err(|e| spawn_error(program, e))?;

    finish(
        program,
        status,
        stdout_output,
        stderr_output,
        start.elapsed(),
    )
}

/// Read `reader` to the end, passing each line to `send` and returning the full text.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the read,
/// so the pipe stays drained until the child exits.
fn forward_lines<R: BufRead>(mut reader: R, mut send: impl FnMut(String)) -> String {
    let mut output = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf)
                    .trim_end_matches(['\n', '\r'])
                    .to_string();
                output.push_str(&line);
                output.push('\n');
                send(line);
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
    output
}

fn spawn_error(program: &str, err: std::io::Error) -> GerritPushError {
    GerritPushError::ProcessError {
        message: format!("failed to start {}: {}", program, err),
    }
}

fn finish(
    program: &str,
    status: ExitStatus,
    stdout: String,
    stderr: String,
    duration: Duration,
) -> Result<CommandResult> {
    if status.success() {
        return Ok(CommandResult::success(stdout, stderr, duration));
    }

    Err(GerritPushError::ProcessError {
        message: failure_message(program, status.code(), &stderr),
    })
}

/// Message for a failed invocation: stderr if any, else the exit status.
pub fn failure_message(program: &str, code: Option<i32>, stderr: &str) -> String {
    let trimmed = stderr.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    match code {
        Some(code) => format!("{} exited with code {}", program, code),
        None => format!("{} was terminated by a signal", program),
    }
}
