use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SbError};

/// Name of the per-project config file.
pub const PROJECT_CONFIG_FILE: &str = "stylebook.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub readme: ReadmeConfig,
    #[serde(default)]
    pub examples: ExamplesConfig,
}

impl Config {
    /// Layer defaults, config files and `STYLEBOOK_*` environment overrides.
    ///
    /// An explicit path (argument or `STYLEBOOK_CONFIG`) replaces the global
    /// and project files instead of adding to them.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("STYLEBOOK_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(SbError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Parse a complete config from TOML text, starting from defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| SbError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("stylebook/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SbError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SbError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.source {
            self.source.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
        if let Some(patch) = patch.theme {
            self.theme.merge(patch);
        }
        if let Some(patch) = patch.readme {
            self.readme.merge(patch);
        }
        if let Some(patch) = patch.examples {
            self.examples.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("STYLEBOOK_SOURCE_ROOT") {
            self.source.root = PathBuf::from(value);
        }
        if let Some(values) = env_list("STYLEBOOK_SOURCE_PATTERNS") {
            self.source.patterns = values;
        }
        if let Some(values) = env_list("STYLEBOOK_SOURCE_EXCLUDE") {
            self.source.exclude = merge_unique(values, &self.source.exclude);
        }

        if let Some(value) = env_string("STYLEBOOK_OUTPUT_DEST") {
            self.output.dest = PathBuf::from(value);
        }
        if let Some(value) = env_string("STYLEBOOK_OUTPUT_EXTENSION") {
            self.output.extension = value;
        }

        if let Some(value) = env_string("STYLEBOOK_THEME_TEMPLATE") {
            self.theme.template = Some(PathBuf::from(value));
        }
        if let Some(value) = env_string("STYLEBOOK_THEME_STYLESHEET") {
            self.theme.stylesheet = Some(PathBuf::from(value));
        }
        if let Some(values) = env_list("STYLEBOOK_THEME_ASSETS") {
            self.theme.assets = merge_unique(values, &self.theme.assets);
        }

        if let Some(value) = env_string("STYLEBOOK_README_PATH") {
            self.readme.path = Some(PathBuf::from(value));
        }

        if let Some(value) = env_string("STYLEBOOK_EXAMPLES_IDS") {
            self.examples.ids = parse_id_mode(&value)?;
        }

        Ok(())
    }

    /// Reject settings that would leave required paths unresolved.
    pub fn validate(&self) -> Result<()> {
        if self.source.root.as_os_str().is_empty() {
            return Err(SbError::MissingConfig("source.root".to_string()));
        }
        if self.output.dest.as_os_str().is_empty() {
            return Err(SbError::MissingConfig("output.dest".to_string()));
        }
        if self.source.patterns.iter().all(|pattern| pattern.trim().is_empty()) {
            return Err(SbError::MissingConfig("source.patterns".to_string()));
        }
        if self.output.extension.trim_start_matches('.').is_empty() {
            return Err(SbError::MissingConfig("output.extension".to_string()));
        }
        for pattern in self.source.patterns.iter().chain(&self.source.exclude) {
            glob::Pattern::new(pattern)
                .map_err(|err| SbError::Config(format!("invalid pattern {pattern}: {err}")))?;
        }
        Ok(())
    }

    /// Resolve relative paths in the config against `base`.
    ///
    /// Empty paths stay empty so that [`Config::validate`] still rejects them.
    #[must_use]
    pub fn resolved(mut self, base: &Path) -> Self {
        self.source.root = resolve(base, &self.source.root);
        self.output.dest = resolve(base, &self.output.dest);
        self.theme.template = self.theme.template.map(|path| resolve(base, &path));
        self.theme.stylesheet = self.theme.stylesheet.map(|path| resolve(base, &path));
        self.readme.path = self.readme.path.map(|path| resolve(base, &path));
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory scanned for stylesheets; also the root of page groups.
    #[serde(default)]
    pub root: PathBuf,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("styles"),
            patterns: vec![
                "**/*.css".to_string(),
                "**/*.scss".to_string(),
                "**/*.sass".to_string(),
                "**/*.less".to_string(),
            ],
            exclude: Vec::new(),
        }
    }
}

impl SourceConfig {
    fn merge(&mut self, patch: SourcePatch) {
        if let Some(value) = patch.root {
            self.root = value;
        }
        if let Some(values) = patch.patterns {
            self.patterns = values;
        }
        if let Some(values) = patch.exclude {
            self.exclude = merge_unique(values, &self.exclude);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub dest: PathBuf,
    #[serde(default)]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dest: PathBuf::from("styleguide"),
            extension: "html".to_string(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.dest {
            self.dest = value;
        }
        if let Some(value) = patch.extension {
            self.extension = value;
        }
    }
}

/// Presentation settings. Anything left unset falls back to the bundled theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub template: Option<PathBuf>,
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,
    /// Glob patterns for extra `.css`/`.js` files linked from every page.
    #[serde(default)]
    pub assets: Vec<String>,
}

impl ThemeConfig {
    fn merge(&mut self, patch: ThemePatch) {
        if let Some(value) = patch.template {
            self.template = Some(value);
        }
        if let Some(value) = patch.stylesheet {
            self.stylesheet = Some(value);
        }
        if let Some(values) = patch.assets {
            self.assets = merge_unique(values, &self.assets);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadmeConfig {
    /// Explicit readme; when unset the source root and its parents are searched.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ReadmeConfig {
    fn merge(&mut self, patch: ReadmePatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    #[default]
    Random,
    Sequential,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamplesConfig {
    #[serde(default)]
    pub ids: IdMode,
}

impl ExamplesConfig {
    fn merge(&mut self, patch: ExamplesPatch) {
        if let Some(value) = patch.ids {
            self.ids = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub source: Option<SourcePatch>,
    pub output: Option<OutputPatch>,
    pub theme: Option<ThemePatch>,
    pub readme: Option<ReadmePatch>,
    pub examples: Option<ExamplesPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SourcePatch {
    pub root: Option<PathBuf>,
    pub patterns: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub dest: Option<PathBuf>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ThemePatch {
    pub template: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
    pub assets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ReadmePatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ExamplesPatch {
    pub ids: Option<IdMode>,
}

/// Commented starting point written by `stylebook init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# stylebook configuration

[source]
# Directory scanned for stylesheets. Its first-level folders become page groups.
root = "styles"
patterns = ["**/*.css", "**/*.scss", "**/*.sass", "**/*.less"]
exclude = []

[output]
dest = "styleguide"
extension = "html"

[theme]
# template = "theme/page.html"
# stylesheet = "theme/guide.css"
assets = []

[readme]
# path = "README.md"

[examples]
# "random" or "sequential" (deterministic output)
ids = "random"
"#;

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || path.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.into_iter().chain(existing.iter().cloned()) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

fn parse_id_mode(value: &str) -> Result<IdMode> {
    match value.to_lowercase().as_str() {
        "random" => Ok(IdMode::Random),
        "sequential" | "counter" => Ok(IdMode::Sequential),
        _ => Err(SbError::Config(format!(
            "invalid id mode {value} (expected random|sequential)"
        ))),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
}
