//! Advisory checks on built pages.
//!
//! Diagnostics never stop a build. The site builder logs them and keeps
//! going; `stylebook check --strict` is the only place they become fatal.

use std::fmt;

use serde::Serialize;

use super::page::{HeadingOrigin, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The file contains no block comments.
    CommentMissing,
    /// No first-level heading; the slug was used instead.
    HeadingMissing,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommentMissing => "Comment missing",
            Self::HeadingMissing => "Heading missing",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Source path of the page the diagnostic is about.
    pub path: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.path)
    }
}

/// Inspect `page` and return its advisory diagnostics.
#[must_use]
pub fn report(page: &Page) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if page.sections.is_empty() {
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::CommentMissing,
            path: page.original_path.clone(),
        });
    }
    if page.heading_origin == HeadingOrigin::SlugFallback {
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::HeadingMissing,
            path: page.original_path.clone(),
        });
    }
    diagnostics
}
