use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SbError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read source file: {0}")]
    SourceRead(String),

    #[error("Cannot load template: {0}")]
    TemplateLoad(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Cannot read theme: {0}")]
    ThemeRead(String),

    #[error("Cannot read asset: {0}")]
    AssetRead(String),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Check failed: {0}")]
    CheckFailed(String),
}

impl SbError {
    /// Stable machine-readable name, used in robot-mode error output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::SourceRead(_) => "source_read",
            Self::TemplateLoad(_) | Self::Template(_) => "template",
            Self::ThemeRead(_) => "theme_read",
            Self::AssetRead(_) => "asset_read",
            Self::Pattern(_) => "pattern",
            Self::Json(_) => "json",
            Self::Config(_) | Self::MissingConfig(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::CheckFailed(_) => "check_failed",
        }
    }

    /// `check --strict` findings exit with 2 so scripts can tell them from
    /// build failures.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::CheckFailed(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SbError>;
