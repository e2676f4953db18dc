//! Command implementations

pub mod build;
pub mod check;
pub mod init;
pub mod inspect;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Build(args) => build::run(ctx, args),
        Commands::Check(args) => check::run(ctx, args),
        Commands::Inspect(args) => inspect::run(ctx, args),
        Commands::Init(args) => init::run(ctx, args),
    }
}
