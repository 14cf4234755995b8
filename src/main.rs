//! list-hook: mailing list to chat webhook notifier
//!
//! Entry point for use as a mail pipe: `list-hook --list announce < message`.

use std::path::Path;
use std::process::ExitCode;

use list_hook::config::{Cli, Command, write_default_config};

mod app;
mod run;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match &cli.command {
        Some(Command::Init { output }) => return handle_init(output),
        Some(Command::Route { list }) => return handle_route(&cli.config, list),
        None => {}
    }

    let Some(list) = cli.list.as_deref() else {
        eprintln!("Missing --list <LIST>: the list the message on stdin was posted to");
        return exit_code::CONFIG_ERROR;
    };

    let settings = run::load_settings(&cli.config);
    let message = match run::read_message(std::io::stdin().lock()) {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("{e}");
            return exit_code::runtime_error();
        }
    };

    run_application(settings, list, &message)
}

/// Handles the `init` subcommand.
fn handle_init(output: &Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `route` subcommand.
fn handle_route(config: &Path, list: &str) -> ExitCode {
    let settings = run::load_settings(config);
    println!("{}", run::describe_route(&settings, list));
    exit_code::SUCCESS
}

/// Delivers the notification on a fresh runtime.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(
    settings: list_hook::config::Settings,
    list: &str,
    message: &list_hook::message::RawMessage,
) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(settings, list, message)) {
        Ok(_) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
