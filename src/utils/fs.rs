//! Filesystem access.
//!
//! The site builder reaches the disk only through [`FileSystem`], so the
//! whole pipeline can run against [`crate::test_utils::MemoryFs`] in tests.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::{SbError, Result};

/// How [`FileSystem::list_matching`] walks and matches.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Directory the patterns are relative to.
    pub cwd: PathBuf,
    /// Match without regard to letter case.
    pub case_insensitive: bool,
    /// Patterns whose matches are dropped.
    pub exclude: Vec<String>,
    /// Limit on directory depth below `cwd` (1 = direct children only).
    pub max_depth: Option<usize>,
}

impl ListOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            case_insensitive: false,
            exclude: Vec::new(),
            max_depth: None,
        }
    }

    #[must_use]
    pub const fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    #[must_use]
    pub fn exclude(mut self, patterns: &[String]) -> Self {
        self.exclude = patterns.to_vec();
        self
    }

    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Glob options for these settings.
    #[must_use]
    pub const fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: !self.case_insensitive,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        }
    }

    /// True when relative path `path` matches `pattern` and no exclude pattern.
    pub fn accepts(&self, pattern: &Pattern, path: &Path) -> Result<bool> {
        let options = self.match_options();
        if !pattern.matches_path_with(path, options) {
            return Ok(false);
        }
        for exclude in &self.exclude {
            if Pattern::new(exclude)?.matches_path_with(path, options) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// The file operations the site builder needs.
pub trait FileSystem {
    fn read_text(&self, path: &Path) -> Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Files under `options.cwd` matching `pattern`, relative to `cwd`, sorted.
    fn list_matching(&self, pattern: &str, options: &ListOptions) -> Result<Vec<PathBuf>>;

    /// Write `text` to `path`, creating parent directories as needed.
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;

    fn make_dir(&self, path: &Path) -> Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_matching(&self, pattern: &str, options: &ListOptions) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(pattern)?;
        if !options.cwd.is_dir() {
            return Ok(Vec::new());
        }

        let mut walker = WalkDir::new(&options.cwd).follow_links(true).min_depth(1);
        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut out = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| {
                SbError::NotFound(format!("walk {}: {err}", options.cwd.display()))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&options.cwd) else {
                continue;
            };
            if options.accepts(&pattern, relative)? {
                out.push(relative.to_path_buf());
            }
        }
        out.sort();
        Ok(out)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    fn make_dir(&self, path: &Path) -> Result<()> {
        ensure_dir(path)
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.as_os_str().is_empty() && !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
