//! stylebook check - Report undocumented stylesheets without rendering

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{emit_json, print_diagnostics};
use crate::error::{Result, SbError};
use crate::markdown::CommonMark;
use crate::site::Extractor;
use crate::utils::fs::LocalFs;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Exit with an error when any diagnostic is reported
    #[arg(long)]
    pub strict: bool,
}

pub fn run(ctx: &AppContext, args: &CheckArgs) -> Result<()> {
    let config = ctx.config.clone().resolved(&ctx.project_root);
    config.validate()?;

    let fs = LocalFs;
    let mut extractor = Extractor::new(&config, &ctx.project_root, &fs, &CommonMark);
    let extraction = extractor.extract()?;

    if ctx.robot_mode {
        let status = if extraction.diagnostics.is_empty() { "ok" } else { "warn" };
        emit_json(&json!({
            "status": status,
            "pages": extraction.pages.len(),
            "groups": extraction.groups.len(),
            "diagnostics": extraction.diagnostics,
            "collisions": extraction.collisions,
        }))?;
    } else {
        println!(
            "{} Checked {} pages in {} groups",
            "•".cyan(),
            extraction.pages.len(),
            extraction.groups.len()
        );
        print_diagnostics(&extraction.diagnostics);
    }

    if args.strict && !extraction.diagnostics.is_empty() {
        return Err(SbError::CheckFailed(format!(
            "{} diagnostics reported",
            extraction.diagnostics.len()
        )));
    }
    Ok(())
}
