//! stylebook build - Render the style guide
//!
//! Flags override the loaded configuration for this run only.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{emit_json, print_diagnostics};
use crate::config::{Config, IdMode};
use crate::error::Result;
use crate::markdown::CommonMark;
use crate::site::{BuildReport, Site, TeraTemplate};
use crate::utils::fs::LocalFs;

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory containing the stylesheets
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory the style guide is written to
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Tera page template
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Stylesheet inlined into every page
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Glob for extra .css/.js files linked from every page (repeatable)
    #[arg(long = "asset", value_name = "GLOB")]
    pub assets: Vec<String>,

    /// Number examples 00000, 00001, ... per page instead of randomly
    #[arg(long)]
    pub sequential_ids: bool,
}

impl BuildArgs {
    /// Apply the flags on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(source) = &self.source {
            config.source.root.clone_from(source);
        }
        if let Some(dest) = &self.dest {
            config.output.dest.clone_from(dest);
        }
        if let Some(template) = &self.template {
            config.theme.template = Some(template.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme.stylesheet = Some(theme.clone());
        }
        if !self.assets.is_empty() {
            config.theme.assets.clone_from(&self.assets);
        }
        if self.sequential_ids {
            config.examples.ids = IdMode::Sequential;
        }
        config
    }
}

pub fn run(ctx: &AppContext, args: &BuildArgs) -> Result<()> {
    let config = args.apply(ctx.config.clone()).resolved(&ctx.project_root);
    config.validate()?;

    let fs = LocalFs;
    let template = TeraTemplate::load(&fs, config.theme.template.as_deref())?;
    let mut site = Site::new(&config, &ctx.project_root, &fs, &CommonMark, &template);
    let report = site.build()?;

    if ctx.robot_mode {
        return emit_json(&json!({
            "status": "ok",
            "dest": config.output.dest.display().to_string(),
            "report": report,
        }));
    }

    print_human(&config, &report);
    Ok(())
}

fn print_human(config: &Config, report: &BuildReport) {
    println!(
        "{} Built {} pages in {} groups into {}",
        "✓".green().bold(),
        report.written.len(),
        report.groups,
        config.output.dest.display()
    );
    if report.readme_created {
        println!(
            "  {} Created placeholder readme at {}",
            "!".yellow(),
            report.readme.display()
        );
    }
    if !report.diagnostics.is_empty() {
        print_diagnostics(&report.diagnostics);
    }
}
