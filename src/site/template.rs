//! Page templates.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, warn};

use crate::error::{Result, SbError};
use crate::extract::{Group, Page};
use crate::utils::fs::FileSystem;

/// Template shipped with the binary, used when no template is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/template.html");

/// Site-wide data shared by every page.
#[derive(Debug, Clone, Serialize)]
pub struct SiteIndex {
    /// Destination directory as written in the config.
    pub root_path: String,
    pub groups: Vec<Group>,
    pub assets_path: String,
    /// Location of the readme index page relative to the site root.
    pub index_path: String,
}

/// Everything a template sees when rendering one page.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub page: &'a Page,
    pub site: &'a SiteIndex,
    /// Relative prefix from the page back to the site root (`""`, `"../"`, ...).
    pub base: String,
    /// Inline `<style>` element for the theme.
    pub theme: &'a str,
    /// `<link>`/`<script>` elements for configured assets.
    pub assets: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(page: &'a Page, site: &'a SiteIndex, theme: &'a str, assets: &'a str) -> Self {
        Self {
            page,
            site,
            base: "../".repeat(page.depth()),
            theme,
            assets,
        }
    }
}

/// Turns a page context into a complete document.
pub trait TemplateRenderer {
    fn render(&self, context: &PageContext<'_>) -> Result<String>;
}

/// Tera-backed template.
///
/// Autoescaping is off because most fields are already HTML; plain-text
/// fields (headings, group names) go through `| escape` in the template.
pub struct TeraTemplate {
    tera: Tera,
}

impl TeraTemplate {
    const NAME: &'static str = "page.html";

    /// Compile a template from its source text.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_template(Self::NAME, source)
            .map_err(|err| SbError::TemplateLoad(describe(&err)))?;
        Ok(Self { tera })
    }

    /// The template shipped with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_source(DEFAULT_TEMPLATE)
    }

    /// Load the configured template, or the bundled one when none is set.
    pub fn load(fs: &dyn FileSystem, path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            warn!("User template not specified. Using default.");
            return Self::bundled();
        };

        let source = fs
            .read_text(path)
            .map_err(|err| SbError::TemplateLoad(format!("{}: {err}", path.display())))?;
        debug!(path = %path.display(), "Loaded template");
        Self::from_source(&source).map_err(|err| match err {
            SbError::TemplateLoad(message) => {
                SbError::TemplateLoad(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }
}

impl TemplateRenderer for TeraTemplate {
    fn render(&self, context: &PageContext<'_>) -> Result<String> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(Self::NAME, &context)?)
    }
}

/// Tera nests the useful part of a message in the error source chain.
fn describe(err: &tera::Error) -> String {
    use std::error::Error;

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
