//! External command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, execute_streaming, failure_message, CommandResult, CommandRunner, OutputLine,
    SystemRunner,
};
pub use mock::MockRunner;
pub use platform::{git_program, is_ci, GIT_PROGRAM_ENV};
