//! Project readme lookup for the style guide's index page.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::fs::{FileSystem, ListOptions};

/// File names accepted as a readme, compared without regard to case.
pub const README_NAMES: [&str; 3] = ["readme", "readme.md", "readme.markdown"];

/// Written when no readme exists yet.
pub const README_PLACEHOLDER: &str =
    "Styleguide\n==========\n\nFill me with your delicious readme content\n";

/// Search `start` and each parent directory up to and including `stop`.
///
/// When `start` is not below `stop` only `start` itself is searched.
pub fn find_readme(fs: &dyn FileSystem, start: &Path, stop: &Path) -> Result<Option<PathBuf>> {
    let mut dirs: Vec<&Path> = start
        .ancestors()
        .take_while(|dir| dir.starts_with(stop))
        .collect();
    if dirs.is_empty() {
        dirs.push(start);
    }

    for dir in dirs {
        let options = ListOptions::new(dir).case_insensitive().max_depth(1);
        for name in README_NAMES {
            if let Some(found) = fs.list_matching(name, &options)?.into_iter().next() {
                let path = dir.join(found);
                debug!(path = %path.display(), "Found readme");
                return Ok(Some(path));
            }
        }
    }
    Ok(None)
}

/// Where the readme lives, and whether it had to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeLocation {
    pub path: PathBuf,
    pub created: bool,
}

/// Find the readme, or create one with placeholder content next to the
/// source root.
pub fn ensure_readme(fs: &dyn FileSystem, source_root: &Path, project_root: &Path) -> Result<ReadmeLocation> {
    if let Some(path) = find_readme(fs, source_root, project_root)? {
        return Ok(ReadmeLocation { path, created: false });
    }

    let dir = source_root.parent().unwrap_or(project_root);
    let path = dir.join("README.md");
    warn!(path = %path.display(), "Readme file not found. Create it.");
    fs.write_text(&path, README_PLACEHOLDER)?;
    Ok(ReadmeLocation { path, created: true })
}
