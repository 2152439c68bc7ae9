//! gerrit-push CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::Term;
use gerrit_push::cli::{Cli, CommandDispatcher};
use gerrit_push::shell::{is_ci, SystemRunner};
use gerrit_push::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gerrit_push=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gerrit_push=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gerrit-push starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = match cli.project.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot read current directory: {}", e);
                return ExitCode::from(1);
            }
        },
    };

    // Prompts need a terminal; CI or an explicit flag forces defaults
    let non_interactive = cli.push_args().is_some_and(|args| args.non_interactive);
    let is_interactive = !non_interactive && !is_ci() && Term::stdout().is_term();

    let mut ui = create_ui(is_interactive, output_mode);

    let runner = SystemRunner::new();
    let dispatcher = CommandDispatcher::new(project_root, cli.config.clone(), &runner);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
