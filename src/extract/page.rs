//! Page assembly: metadata plus sections for one stylesheet.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::comments::extract_comments;
use super::ids::{IdSource, PageIds};
use super::normalize::normalize;
use super::segment::{Section, segment};
use crate::markdown::MarkdownRenderer;

/// Extension written for rendered pages unless configured otherwise.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

/// A stylesheet read from disk. `path` is relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Where a page's heading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingOrigin {
    /// A first-level heading in the file's comments.
    Document,
    /// No heading was found, so the slug stands in.
    SlugFallback,
    /// Set by the builder (the readme index page).
    Fixed,
}

/// Everything the renderer needs for one output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub slug: String,
    pub heading: String,
    pub heading_origin: HeadingOrigin,
    pub group: String,
    /// Output location relative to the destination root, `/`-separated.
    pub output_path: String,
    pub original_path: String,
    pub sections: Vec<Section>,
}

impl Page {
    /// Number of `/`-separated directories between the page and the site root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.output_path.matches('/').count()
    }
}

/// Builds [`Page`]s from source files.
pub struct PageBuilder<'a> {
    markdown: &'a dyn MarkdownRenderer,
    output_extension: String,
}

impl<'a> PageBuilder<'a> {
    pub fn new(markdown: &'a dyn MarkdownRenderer) -> Self {
        Self {
            markdown,
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_output_extension(mut self, extension: &str) -> Self {
        self.output_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Build the page for `file`, drawing example ids from `ids`.
    pub fn build(&self, file: &SourceFile, ids: &mut dyn IdSource) -> Page {
        let slug = slug_for(&file.path);

        let (heading, heading_origin) = match self.markdown.first_heading(&normalize(&file.content)) {
            Some(heading) => (heading, HeadingOrigin::Document),
            None => (slug.clone(), HeadingOrigin::SlugFallback),
        };

        let mut page_ids = PageIds::new(ids);
        page_ids.start_page();
        let sections = extract_comments(&file.content)
            .into_iter()
            .map(|comment| segment(comment, self.markdown, &mut page_ids))
            .collect();

        Page {
            slug,
            heading,
            heading_origin,
            group: group_for(&file.path),
            output_path: to_slash(&file.path.with_extension(&self.output_extension)),
            original_path: to_slash(&file.path),
            sections,
        }
    }

    /// The synthetic index page rendered from the project readme.
    pub fn readme_page(&self, readme: &str, readme_path: &Path) -> Page {
        Page {
            slug: "index".to_string(),
            heading: "Home".to_string(),
            heading_origin: HeadingOrigin::Fixed,
            group: String::new(),
            output_path: format!("index.{}", self.output_extension),
            original_path: to_slash(readme_path),
            sections: vec![Section::prose(self.markdown.render(readme))],
        }
    }
}

/// File name without its extension.
#[must_use]
pub fn slug_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// First directory of a source-root-relative path, or `""` at the root.
#[must_use]
pub fn group_for(path: &Path) -> String {
    path.parent()
        .and_then(|parent| {
            parent.components().find_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
        })
        .unwrap_or_default()
}

/// Join the normal components of `path` with `/`.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
