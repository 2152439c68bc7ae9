//! Runs the review push.

use std::path::Path;

use crate::error::Result;
use crate::shell::{CommandResult, CommandRunner};
use crate::ui::OutputLog;

use super::target::PushTarget;

/// A push that git accepted.
#[derive(Debug, Clone)]
pub struct PushOutcome {
    pub remote: String,
    pub branch: String,
    pub result: CommandResult,
}

/// Invokes `git push <remote> <target>` with live output.
pub struct PushExecutor<'a> {
    program: String,
    runner: &'a dyn CommandRunner,
    log: &'a dyn OutputLog,
}

impl<'a> PushExecutor<'a> {
    pub fn new(
        program: impl Into<String>,
        runner: &'a dyn CommandRunner,
        log: &'a dyn OutputLog,
    ) -> Self {
        Self {
            program: program.into(),
            runner,
            log,
        }
    }

    /// The command line this executor would run.
    pub fn command_line(&self, remote: &str, target: &PushTarget) -> String {
        format!("{} push {} {}", self.program, remote, target)
    }

    /// Push once. A failure is returned as is and never retried.
    pub fn execute(&self, remote: &str, target: &PushTarget, root: &Path) -> Result<PushOutcome> {
        self.log
            .append_line(&format!("> {}", self.command_line(remote, target)));

        let result = self.runner.run(
            &self.program,
            &["push", remote, target.as_str()],
            root,
            Some(self.log),
        )?;
        tracing::debug!("Push finished in {:?}", result.duration);

        Ok(PushOutcome {
            remote: remote.to_string(),
            branch: target.branch().to_string(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GerritPushError;
    use crate::push::build_push_target;
    use crate::shell::MockRunner;
    use crate::ui::MemoryLog;

    fn target() -> PushTarget {
        build_push_target("main", &["alice".to_string()])
    }

    #[test]
    fn push_streams_output_to_log() {
        let runner = MockRunner::new();
        runner.respond_with_stderr(
            "push origin HEAD:refs/for/main%r=alice",
            "",
            "remote: Processing changes: new: 1, done\nremote:   https://review/c/1 [NEW]\n",
        );
        let log = MemoryLog::new();
        let executor = PushExecutor::new("git", &runner, &log);

        let outcome = executor
            .execute("origin", &target(), Path::new("/work/repo"))
            .unwrap();

        assert_eq!(outcome.remote, "origin");
        assert_eq!(outcome.branch, "main");
        assert_eq!(
            log.lines()[0],
            "> git push origin HEAD:refs/for/main%r=alice"
        );
        assert!(log.contains("[NEW]"));
    }

    #[test]
    fn push_failure_surfaces_stderr() {
        let runner = MockRunner::new();
        runner.fail(
            "push origin HEAD:refs/for/main%r=alice",
            1,
            "! [remote rejected] HEAD -> refs/for/main (no new changes)\n",
        );
        let log = MemoryLog::new();
        let executor = PushExecutor::new("git", &runner, &log);

        let err = executor
            .execute("origin", &target(), Path::new("/work/repo"))
            .unwrap_err();

        assert!(matches!(err, GerritPushError::ProcessError { .. }));
        assert_eq!(
            err.to_string(),
            "! [remote rejected] HEAD -> refs/for/main (no new changes)"
        );
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn command_line_uses_program() {
        let runner = MockRunner::new();
        let log = MemoryLog::new();
        let executor = PushExecutor::new("/usr/bin/git", &runner, &log);
        assert_eq!(
            executor.command_line("gerrit", &build_push_target("dev", &[])),
            "/usr/bin/git push gerrit HEAD:refs/for/dev"
        );
    }
}
