//! Per-invocation state shared by every command.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    /// Directory relative config paths are resolved against.
    pub project_root: PathBuf,
    pub config: Config,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        Ok(Self {
            project_root,
            config,
            robot_mode: cli.robot_mode(),
        })
    }
}
