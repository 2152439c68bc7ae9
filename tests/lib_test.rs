//! Library integration tests.

use gerrit_push::GerritPushError;

#[test]
fn error_types_are_public() {
    let err = GerritPushError::ProcessError {
        message: "fatal: no such ref".into(),
    };
    assert_eq!(err.to_string(), "fatal: no such ref");
    assert!(GerritPushError::UserCancelled.is_cancelled());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gerrit_push::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use gerrit_push::cli::{Cli, Commands};

    let cli = Cli::parse_from(["gerrit-push", "push", "--branch", "main", "--yes"]);

    if let Some(Commands::Push(args)) = cli.command {
        assert_eq!(args.branch.as_deref(), Some("main"));
        assert!(args.yes);
    } else {
        panic!("Expected Push command");
    }
}
