//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning processes.
//! Responses are keyed by the argument vector joined with single spaces,
//! and every invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use gerrit_push::shell::{CommandRunner, MockRunner};
//! use std::path::Path;
//!
//! let runner = MockRunner::new();
//! runner.respond("remote", "origin\nupstream\n");
//!
//! let result = runner.run("git", &["remote"], Path::new("/repo"), None).unwrap();
//! assert_eq!(result.stdout, "origin\nupstream\n");
//! assert!(runner.was_called("remote"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{GerritPushError, Result};
use crate::ui::OutputLog;

use super::command::{failure_message, CommandResult, CommandRunner};

#[derive(Debug, Clone)]
enum MockResponse {
    Success { stdout: String, stderr: String },
    Failure { code: i32, stderr: String },
}

/// Command runner that replays canned responses.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, MockResponse>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for the given argument line.
    pub fn respond(&self, args: &str, stdout: &str) -> &Self {
        self.responses.borrow_mut().insert(
            args.to_string(),
            MockResponse::Success {
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Script a successful response that also writes to stderr.
    pub fn respond_with_stderr(&self, args: &str, stdout: &str, stderr: &str) -> &Self {
        self.responses.borrow_mut().insert(
            args.to_string(),
            MockResponse::Success {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Script a failing response for the given argument line.
    pub fn fail(&self, args: &str, code: i32, stderr: &str) -> &Self {
        self.responses.borrow_mut().insert(
            args.to_string(),
            MockResponse::Failure {
                code,
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// All recorded invocations as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Check whether an argument line was invoked.
    pub fn was_called(&self, args: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|call| call[1..].join(" ") == args)
    }

    /// Check whether any invocation's first argument was `subcommand`.
    pub fn was_called_with_subcommand(&self, subcommand: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|call| call.get(1).map(String::as_str) == Some(subcommand))
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        _cwd: &Path,
        stream: Option<&dyn OutputLog>,
    ) -> Result<CommandResult> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        let key = args.join(" ");
        let response = self.responses.borrow().get(&key).cloned();

        match response {
            Some(MockResponse::Success { stdout, stderr }) => {
                if let Some(log) = stream {
                    stdout
                        .lines()
                        .chain(stderr.lines())
                        .for_each(|l| log.append_line(l));
                }
                Ok(CommandResult::success(stdout, stderr, Duration::ZERO))
            }
            Some(MockResponse::Failure { code, stderr }) => {
                if let Some(log) = stream {
                    stderr.lines().for_each(|l| log.append_line(l));
                }
                Err(GerritPushError::ProcessError {
                    message: failure_message(program, Some(code), &stderr),
                })
            }
            None => Err(GerritPushError::ProcessError {
                message: format!("unexpected command: {} {}", program, key),
            }),
        }
    }
}
