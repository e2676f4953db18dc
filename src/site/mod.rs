//! Site builder: turns a source tree into a rendered style guide.
//!
//! A build runs in a fixed order. The destination is created first, then
//! the theme and assets are loaded, every stylesheet is extracted into a
//! [`Page`], every page is rendered with the complete navigation, and the
//! readme index is written last.

pub mod readme;
pub mod template;
pub mod theme;

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, IdMode};
use crate::error::{Result, SbError};
use crate::extract::page::to_slash;
use crate::extract::{
    Diagnostic, GroupIndex, IdSource, Page, PageBuilder, RandomIds, SequentialIds, SourceFile,
    report,
};
use crate::markdown::MarkdownRenderer;
use crate::utils::fs::{FileSystem, ListOptions};

pub use readme::{README_PLACEHOLDER, ReadmeLocation, ensure_readme, find_readme};
pub use template::{PageContext, SiteIndex, TemplateRenderer, TeraTemplate};
pub use theme::{asset_tags, compact_css, theme_tag};

/// The id source selected by `examples.ids`.
#[must_use]
pub fn id_source(mode: IdMode) -> Box<dyn IdSource> {
    match mode {
        IdMode::Random => Box::new(RandomIds),
        IdMode::Sequential => Box::new(SequentialIds::new()),
    }
}

/// Two sources that render to the same output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputCollision {
    pub output_path: String,
    /// Source whose page is kept.
    pub kept: String,
    /// Source whose page replaced it on disk.
    pub replaced_by: String,
}

/// Pages and diagnostics for a source tree, before rendering.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub pages: Vec<Page>,
    pub diagnostics: Vec<Diagnostic>,
    pub groups: GroupIndex,
    pub collisions: Vec<OutputCollision>,
}

/// What a finished build wrote.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
    pub readme: PathBuf,
    pub readme_created: bool,
    pub groups: usize,
}

/// Reads and parses a source tree. Needs no template, so `check` can run
/// without one.
pub struct Extractor<'a> {
    config: Config,
    fs: &'a dyn FileSystem,
    markdown: &'a dyn MarkdownRenderer,
    ids: Box<dyn IdSource>,
}

impl<'a> Extractor<'a> {
    /// Relative paths in `config` are taken relative to `project_root`.
    pub fn new(
        config: &Config,
        project_root: &Path,
        fs: &'a dyn FileSystem,
        markdown: &'a dyn MarkdownRenderer,
    ) -> Self {
        Self {
            config: config.clone().resolved(project_root),
            ids: id_source(config.examples.ids),
            fs,
            markdown,
        }
    }

    #[must_use]
    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    fn page_builder(&self) -> PageBuilder<'a> {
        PageBuilder::new(self.markdown).with_output_extension(&self.config.output.extension)
    }

    /// Source files under the source root, relative to it and sorted.
    pub fn collect_sources(&self) -> Result<Vec<PathBuf>> {
        self.require_source_root()?;
        let root = &self.config.source.root;
        let options = ListOptions::new(root).exclude(&self.config.source.exclude);
        let mut found = BTreeSet::new();
        for pattern in &self.config.source.patterns {
            found.extend(self.fs.list_matching(pattern, &options)?);
        }
        debug!(root = %root.display(), count = found.len(), "Collected sources");
        Ok(found.into_iter().collect())
    }

    /// Read and parse every source file.
    pub fn extract(&mut self) -> Result<Extraction> {
        let builder = self.page_builder();
        let mut extraction = Extraction {
            pages: Vec::new(),
            diagnostics: Vec::new(),
            groups: GroupIndex::new(),
            collisions: Vec::new(),
        };
        let mut outputs: HashMap<String, String> = HashMap::new();

        for relative in self.collect_sources()? {
            let path = self.config.source.root.join(&relative);
            let content = self
                .fs
                .read_text(&path)
                .map_err(|err| SbError::SourceRead(format!("{}: {err}", path.display())))?;

            let page = builder.build(&SourceFile::new(relative, content), self.ids.as_mut());
            debug!(path = %page.original_path, sections = page.sections.len(), "Parsed page");

            for diagnostic in report(&page) {
                warn!(kind = %diagnostic.kind, path = %diagnostic.path, "{}", diagnostic.kind);
                extraction.diagnostics.push(diagnostic);
            }

            if let Some(kept) = outputs.insert(page.output_path.clone(), page.original_path.clone()) {
                warn!(
                    output = %page.output_path,
                    kept = %kept,
                    replaced_by = %page.original_path,
                    "Two sources render to the same page; the later one wins"
                );
                extraction.collisions.push(OutputCollision {
                    output_path: page.output_path.clone(),
                    kept,
                    replaced_by: page.original_path.clone(),
                });
            }

            extraction.groups.add(&page);
            extraction.pages.push(page);
        }

        Ok(extraction)
    }

    fn require_source_root(&self) -> Result<()> {
        let root = &self.config.source.root;
        if self.fs.exists(root) {
            Ok(())
        } else {
            Err(SbError::NotFound(format!(
                "source root {} does not exist",
                root.display()
            )))
        }
    }
}

pub struct Site<'a> {
    config: Config,
    project_root: PathBuf,
    fs: &'a dyn FileSystem,
    markdown: &'a dyn MarkdownRenderer,
    template: &'a dyn TemplateRenderer,
    extractor: Extractor<'a>,
}

impl<'a> Site<'a> {
    /// Relative paths in `config` are taken relative to `project_root`.
    pub fn new(
        config: &Config,
        project_root: impl Into<PathBuf>,
        fs: &'a dyn FileSystem,
        markdown: &'a dyn MarkdownRenderer,
        template: &'a dyn TemplateRenderer,
    ) -> Self {
        let project_root = project_root.into();
        Self {
            config: config.clone().resolved(&project_root),
            extractor: Extractor::new(config, &project_root, fs, markdown),
            project_root,
            fs,
            markdown,
            template,
        }
    }

    /// Replace the id source chosen from the config.
    #[must_use]
    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.extractor = self.extractor.with_ids(ids);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn page_builder(&self) -> PageBuilder<'a> {
        PageBuilder::new(self.markdown).with_output_extension(&self.config.output.extension)
    }

    pub fn collect_sources(&self) -> Result<Vec<PathBuf>> {
        self.extractor.collect_sources()
    }

    /// Read and parse every source file without rendering anything.
    pub fn extract(&mut self) -> Result<Extraction> {
        self.extractor.extract()
    }

    /// Build the whole site into the destination directory.
    pub fn build(&mut self) -> Result<BuildReport> {
        self.config.validate()?;
        self.extractor.require_source_root()?;
        let dest = self.config.output.dest.clone();
        self.fs.make_dir(&dest)?;

        let theme = theme_tag(self.fs, self.config.theme.stylesheet.as_deref())?;
        let assets = asset_tags(self.fs, &self.config.theme.assets, &self.project_root)?;

        let extraction = self.extract()?;

        let root_path = self.relative_to_project(&dest);
        let site = SiteIndex {
            assets_path: format!("/{root_path}/assets"),
            root_path,
            groups: extraction.groups.groups().to_vec(),
            index_path: format!("index.{}", self.config.output.extension.trim_start_matches('.')),
        };

        let mut written = Vec::with_capacity(extraction.pages.len() + 1);
        for page in &extraction.pages {
            written.push(self.write_page(page, &site, &theme, &assets)?);
        }

        let readme = self.locate_readme()?;
        let text = self.fs.read_text(&readme.path)?;
        let readme_relative = self.relative_to_project(&readme.path);
        let index = self
            .page_builder()
            .readme_page(&text, Path::new(&readme_relative));
        written.push(self.write_page(&index, &site, &theme, &assets)?);

        info!(
            pages = extraction.pages.len(),
            groups = site.groups.len(),
            diagnostics = extraction.diagnostics.len(),
            dest = %dest.display(),
            "Style guide built"
        );

        Ok(BuildReport {
            written,
            diagnostics: extraction.diagnostics,
            readme: readme.path,
            readme_created: readme.created,
            groups: site.groups.len(),
        })
    }

    fn write_page(&self, page: &Page, site: &SiteIndex, theme: &str, assets: &str) -> Result<PathBuf> {
        let html = self
            .template
            .render(&PageContext::new(page, site, theme, assets))?;
        let path = self.config.output.dest.join(&page.output_path);
        self.fs.write_text(&path, &html)?;
        debug!(path = %path.display(), "Wrote page");
        Ok(path)
    }

    fn locate_readme(&self) -> Result<ReadmeLocation> {
        match &self.config.readme.path {
            Some(path) if self.fs.exists(path) => Ok(ReadmeLocation {
                path: path.clone(),
                created: false,
            }),
            Some(path) => Err(SbError::NotFound(format!(
                "readme {} does not exist",
                path.display()
            ))),
            None => ensure_readme(self.fs, &self.config.source.root, &self.project_root),
        }
    }

    fn relative_to_project(&self, path: &Path) -> String {
        to_slash(path.strip_prefix(&self.project_root).unwrap_or(path))
    }
}
