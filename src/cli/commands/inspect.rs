//! stylebook inspect - Dump parsed pages as JSON

use std::path::{Path, PathBuf};

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{Result, SbError};
use crate::extract::{Page, PageBuilder, SourceFile, report};
use crate::markdown::CommonMark;
use crate::site::id_source;
use crate::utils::fs::{FileSystem, LocalFs};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Stylesheets to parse
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Include diagnostics alongside each page
    #[arg(long)]
    pub diagnostics: bool,
}

pub fn run(ctx: &AppContext, args: &InspectArgs) -> Result<()> {
    let config = ctx.config.clone().resolved(&ctx.project_root);
    let builder = PageBuilder::new(&CommonMark).with_output_extension(&config.output.extension);
    let mut ids = id_source(config.examples.ids);

    let mut pages = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let path = ctx.project_root.join(file);
        let content = LocalFs
            .read_text(&path)
            .map_err(|err| SbError::SourceRead(format!("{}: {err}", path.display())))?;
        let relative = relative_source(&path, &config.source.root);
        let page = builder.build(&SourceFile::new(relative, content), ids.as_mut());
        pages.push(entry(page, args.diagnostics));
    }

    // Both modes print JSON.
    emit_json(&pages)
}

/// Paths under the source root keep their group; anything else is filed at the root.
fn relative_source(path: &Path, source_root: &Path) -> PathBuf {
    match path.strip_prefix(source_root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path.file_name().map(PathBuf::from).unwrap_or_default(),
    }
}

fn entry(page: Page, with_diagnostics: bool) -> serde_json::Value {
    if !with_diagnostics {
        return serde_json::json!(page);
    }
    let diagnostics = report(&page);
    serde_json::json!({ "page": page, "diagnostics": diagnostics })
}
