//! Shared test utilities for stylebook.

pub mod fixtures;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::Result;
use crate::utils::fs::{FileSystem, ListOptions};

/// In-memory [`FileSystem`]. Directories exist implicitly above every file.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&self, path: &str, content: &str) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), content.to_string());
    }

    /// Current content of a file.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    /// Every file path, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFs {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())).into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
            || self.files.borrow().keys().any(|file| file.starts_with(path))
    }

    fn list_matching(&self, pattern: &str, options: &ListOptions) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(pattern)?;
        let mut out = Vec::new();
        for file in self.files.borrow().keys() {
            let Ok(relative) = file.strip_prefix(&options.cwd) else {
                continue;
            };
            if relative.as_os_str().is_empty() {
                continue;
            }
            if options
                .max_depth
                .is_some_and(|depth| relative.components().count() > depth)
            {
                continue;
            }
            if options.accepts(&pattern, relative)? {
                out.push(relative.to_path_buf());
            }
        }
        Ok(out)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn make_dir(&self, path: &Path) -> Result<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Run table-driven tests, naming the failing case.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F)
where
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E,
{
    for case in cases {
        let actual = test_fn(case.input.clone());
        assert_eq!(
            actual, case.expected,
            "Test '{}' failed for input {:?}",
            case.name, case.input
        );
    }
}
