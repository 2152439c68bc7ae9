//! Integration tests for the gerrit-push binary against real git repositories.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tempfile::TempDir;

/// A working repository with a bare "review server" as `origin`.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let sandbox = Self {
            temp: TempDir::new().unwrap(),
        };
        fs::create_dir_all(sandbox.home()).unwrap();
        fs::create_dir_all(sandbox.work()).unwrap();

        sandbox.git(sandbox.temp.path(), &["init", "--bare", "-q", "server.git"]);
        sandbox.git(&sandbox.work(), &["init", "-q"]);
        sandbox.git(&sandbox.work(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        sandbox.git(
            &sandbox.work(),
            &[
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "commit",
                "-q",
                "--allow-empty",
                "-m",
                "init",
            ],
        );
        sandbox
    }

    fn with_origin() -> Self {
        let sandbox = Self::new();
        let server = sandbox.server().display().to_string();
        sandbox.git(&sandbox.work(), &["remote", "add", "origin", &server]);
        sandbox
    }

    fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    fn work(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    fn server(&self) -> PathBuf {
        self.temp.path().join("server.git")
    }

    fn git(&self, dir: &Path, args: &[&str]) -> String {
        let output = process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn server_refs(&self) -> String {
        let output = process::Command::new("git")
            .args(["show-ref"])
            .current_dir(self.server())
            .env("HOME", self.home())
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn cmd(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(cargo_bin("gerrit-push"));
        cmd.current_dir(dir)
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.temp.path())
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env_remove("GERRIT_PUSH_BRANCH")
            .env_remove("GERRIT_PUSH_REMOTE")
            .env_remove("GERRIT_PUSH_REVIEWERS")
            .env_remove("GERRIT_PUSH_GIT");
        cmd
    }

    fn write_config(&self, content: &str) {
        let dir = self.work().join(".gerrit-push");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
    }
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gerrit-push"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Push the current commit to Gerrit"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gerrit-push"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn push_outside_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let outside = sandbox.temp.path().join("outside");
    fs::create_dir_all(&outside)?;

    sandbox
        .cmd(&outside)
        .args(["push", "--yes", "--branch", "main"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No git repository found"));
    Ok(())
}

#[test]
fn push_without_remotes_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();

    sandbox
        .cmd(&sandbox.work())
        .args(["push", "--yes", "--branch", "main"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No git remotes found"));
    Ok(())
}

#[test]
fn dry_run_prints_push_command() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();

    sandbox
        .cmd(&sandbox.work())
        .args([
            "push",
            "--yes",
            "--dry-run",
            "--branch",
            "main",
            "--reviewers",
            "alice, r=bob",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "git push origin HEAD:refs/for/main%r=alice,r=bob",
        ));

    assert!(!sandbox.server_refs().contains("refs/for/main"));
    Ok(())
}

#[test]
fn dry_run_defaults_to_current_branch() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();

    sandbox
        .cmd(&sandbox.work())
        .args(["push", "--yes", "--dry-run", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git push origin HEAD:refs/for/main"));
    Ok(())
}

#[test]
fn branch_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();

    sandbox
        .cmd(&sandbox.work())
        .env("GERRIT_PUSH_BRANCH", "release")
        .args(["push", "--yes", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAD:refs/for/release"));
    Ok(())
}

#[test]
fn bare_invocation_reads_branch_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();

    sandbox
        .cmd(&sandbox.work())
        .env("GERRIT_PUSH_BRANCH", "release")
        .args(["--yes", "--dry-run", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git push origin HEAD:refs/for/release"));
    Ok(())
}

#[test]
fn push_creates_review_ref() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();

    sandbox
        .cmd(&sandbox.work())
        .args(["push", "--yes", "--branch", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed HEAD to origin refs/for/main"))
        .stderr(predicate::str::contains("> git push origin HEAD:refs/for/main"));

    let head = sandbox.git(&sandbox.work(), &["rev-parse", "HEAD"]);
    let refs = sandbox.server_refs();
    assert!(refs.contains(&format!("{} refs/for/main", head.trim())));
    Ok(())
}

#[test]
fn push_appends_to_configured_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();
    sandbox.write_config("log_file: push.log\n");

    sandbox
        .cmd(&sandbox.work())
        .args(["--quiet", "push", "--yes", "--branch", "main"])
        .assert()
        .success();

    let log = fs::read_to_string(sandbox.work().join("push.log"))?;
    assert!(log.contains("Push Ref: HEAD:refs/for/main"));
    assert!(log.contains("> git push origin HEAD:refs/for/main"));
    Ok(())
}

#[test]
fn unattended_push_requires_yes() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();

    sandbox
        .cmd(&sandbox.work())
        .args(["push", "--branch", "main", "--non-interactive"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Gerrit push failed"))
        .stderr(predicate::str::contains("'confirm'"));

    assert!(!sandbox.server_refs().contains("refs/for/main"));
    Ok(())
}

#[test]
fn push_rejected_by_remote_surfaces_git_error() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let missing = sandbox.temp.path().join("missing.git").display().to_string();
    sandbox.git(&sandbox.work(), &["remote", "add", "origin", &missing]);

    sandbox
        .cmd(&sandbox.work())
        .args(["push", "--yes", "--branch", "main"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Gerrit push failed"))
        .stderr(predicate::str::contains("Error: "));
    Ok(())
}

#[test]
fn config_shows_resolved_settings() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();
    sandbox.write_config("remote: gerrit\ndefault_branch: main\n");

    sandbox
        .cmd(&sandbox.work())
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remote\": \"gerrit\""))
        .stdout(predicate::str::contains("\"default_branch\": \"main\""));
    Ok(())
}

#[test]
fn config_rejects_unknown_keys() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::with_origin();
    sandbox.write_config("remotes: gerrit\n");

    sandbox
        .cmd(&sandbox.work())
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.yml"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gerrit-push"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gerrit-push"));
    Ok(())
}
