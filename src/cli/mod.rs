//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// stylebook - Build a living style guide from stylesheet comments
#[derive(Parser, Debug)]
#[command(name = "stylebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption.
    #[arg(long, global = true)]
    pub robot: bool,

    /// Shorthand for --robot.
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ./stylebook.toml layered over ~/.config/stylebook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// True when output should be JSON.
    #[must_use]
    pub const fn robot_mode(&self) -> bool {
        self.robot || self.machine
    }

    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        OutputFormat::from_args(self.robot_mode())
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the style guide
    Build(commands::build::BuildArgs),

    /// Parse sources and report missing comments or headings
    Check(commands::check::CheckArgs),

    /// Print the parsed pages of stylesheets as JSON
    Inspect(commands::inspect::InspectArgs),

    /// Write a default stylebook.toml in the current directory
    Init(commands::init::InitArgs),
}
