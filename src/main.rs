//! stylebook - style guide generator
//!
//! Builds a browsable style guide from the comments in your stylesheets.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stylebook::{Result, SbError};
use stylebook::app::AppContext;
use stylebook::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&cli, &e);
            ExitCode::from(e.exit_status())
        }
    }
}

/// Robot mode prints the error as JSON on stdout. A failed strict check
/// follows its own diagnostic listing with a one-line summary.
fn report_error(cli: &Cli, e: &SbError) {
    if cli.robot_mode() {
        let error_json = serde_json::json!({
            "error": true,
            "code": e.code(),
            "message": e.to_string(),
        });
        println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
    } else if matches!(e, SbError::CheckFailed(_)) {
        eprintln!("{} {e}", "✗".red().bold());
    } else {
        eprintln!("Error: {e}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Init(args) = &cli.command {
        return stylebook::cli::commands::init::run_without_context(cli.robot_mode(), args);
    }
    let ctx = AppContext::from_cli(cli)?;
    stylebook::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,stylebook=info",
        1 => "info,stylebook=debug",
        2 => "debug,stylebook=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot_mode() {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
