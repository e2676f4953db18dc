//! Theme stylesheet and asset tags injected into every page.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Result, SbError};
use crate::extract::page::to_slash;
use crate::utils::fs::{FileSystem, ListOptions};

/// Stylesheet shipped with the binary, used when no theme is configured.
pub const DEFAULT_THEME: &str = include_str!("../../assets/theme.css");

static CSS_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PUNCTUATION_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{};,])\s*").unwrap());

/// Strip comments and redundant whitespace from a stylesheet.
///
/// Only whitespace next to `{`, `}`, `;` and `,` is removed. Whitespace next
/// to `:` stays (`a :hover` and `a:hover` are different selectors).
#[must_use]
pub fn compact_css(css: &str) -> String {
    let without_comments = CSS_COMMENT_REGEX.replace_all(css, "");
    let collapsed = WHITESPACE_REGEX.replace_all(&without_comments, " ");
    PUNCTUATION_SPACE_REGEX
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}

/// The `<style>` element for the configured theme, or the bundled one.
pub fn theme_tag(fs: &dyn FileSystem, path: Option<&Path>) -> Result<String> {
    let css = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading theme");
            fs.read_text(path)
                .map_err(|err| SbError::ThemeRead(format!("{}: {err}", path.display())))?
        }
        None => {
            warn!("User stylesheet not specified. Using default.");
            DEFAULT_THEME.to_string()
        }
    };
    Ok(format!("<style>{}</style>", compact_css(&css)))
}

/// `<link>`/`<script>` elements for every file matching the asset patterns.
///
/// Patterns are relative to `base`. Every matched file must be readable.
pub fn asset_tags(fs: &dyn FileSystem, patterns: &[String], base: &Path) -> Result<String> {
    if patterns.is_empty() {
        warn!("No assets specified");
        return Ok(String::new());
    }

    let options = ListOptions::new(base);
    let mut tags = String::new();
    for pattern in patterns {
        for relative in fs.list_matching(pattern, &options)? {
            fs.read_text(&base.join(&relative))
                .map_err(|err| SbError::AssetRead(format!("{}: {err}", relative.display())))?;

            let href = to_slash(&relative);
            match relative.extension().and_then(|ext| ext.to_str()) {
                Some("css") => tags.push_str(&format!("<link rel=\"stylesheet\" href=\"/{href}\" />")),
                Some("js") => tags.push_str(&format!("<script src=\"/{href}\"></script>")),
                _ => debug!(path = %href, "Skipping asset with unknown type"),
            }
        }
    }
    Ok(tags)
}
