//! stylebook init - Write a starter stylebook.toml

use std::fs;
use std::path::Path;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::config::{DEFAULT_CONFIG_TOML, PROJECT_CONFIG_FILE};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing stylebook.toml
    #[arg(long, short)]
    pub force: bool,
}

pub fn run(ctx: &AppContext, args: &InitArgs) -> Result<()> {
    init_in(&ctx.project_root, ctx.robot_mode, args)
}

/// Runs before any config is loaded, so a broken config can be replaced.
pub fn run_without_context(robot_mode: bool, args: &InitArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    init_in(&cwd, robot_mode, args)
}

fn init_in(dir: &Path, robot_mode: bool, args: &InitArgs) -> Result<()> {
    let target = dir.join(PROJECT_CONFIG_FILE);

    if target.exists() && !args.force {
        if robot_mode {
            println!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "message": "Already initialized",
                    "path": target.display().to_string()
                })
            );
        } else {
            println!(
                "{} Already initialized at {}",
                "!".yellow(),
                target.display()
            );
            println!("  Use --force to overwrite");
        }
        return Ok(());
    }

    fs::write(&target, DEFAULT_CONFIG_TOML)?;

    if robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "path": target.display().to_string(),
            })
        );
    } else {
        println!("{} Wrote {}", "✓".green().bold(), target.display());
        println!();
        println!("Build the style guide with:");
        println!("  stylebook build");
    }
    Ok(())
}
