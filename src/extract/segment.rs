//! Splitting one comment into prose and a code example.
//!
//! The scanner walks the normalized comment line by line in one of two
//! states. It starts in [`ScanState::Prose`] and switches to
//! [`ScanState::Code`] at the first fence or four-space-indented line; it
//! never switches back. Everything after the boundary is the example, so a
//! comment produces at most one example no matter how many fences follow.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::ids::IdSource;
use super::normalize::{is_code_line, normalize};
use crate::markdown::MarkdownRenderer;

/// Fence marker opening or closing a fenced code block.
pub const FENCE: &str = "```";

static SPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {3,}").unwrap());

/// One documented comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Rendered prose.
    pub comment: String,
    /// The code example, when the comment carries one.
    #[serde(flatten)]
    pub example: Option<Example>,
}

/// A code example and its live-preview form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Opaque token linking the source listing to its preview.
    pub id: String,
    /// Rendered code markup.
    pub source: String,
    /// The code flattened onto a single line for inline embedding.
    pub result: String,
}

impl Section {
    /// A section with prose only.
    #[must_use]
    pub const fn prose(comment: String) -> Self {
        Self {
            comment,
            example: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.example.as_ref().map(|example| example.id.as_str())
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.example.as_ref().map(|example| example.source.as_str())
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.example.as_ref().map(|example| example.result.as_str())
    }

    #[must_use]
    pub const fn has_example(&self) -> bool {
        self.example.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Prose,
    Code,
}

/// A comment split at its example boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub prose: String,
    pub code: Option<String>,
}

/// Split normalized comment text at the first fence or indented line.
#[must_use]
pub fn split_example(normalized: &str) -> Split {
    let mut state = ScanState::Prose;
    let mut prose = Vec::new();
    let mut code = Vec::new();

    for line in normalized.split('\n') {
        if state == ScanState::Prose && (is_fence(line) || is_code_line(line)) {
            state = ScanState::Code;
        }
        match state {
            ScanState::Prose => prose.push(line),
            ScanState::Code => code.push(line),
        }
    }

    Split {
        prose: prose.join("\n"),
        code: (state == ScanState::Code).then(|| code.join("\n")),
    }
}

/// Build a [`Section`] from one comment.
///
/// `comment` may still carry its delimiters; it is normalized here, which is
/// a no-op for text that is already normalized.
pub fn segment(
    comment: &str,
    markdown: &dyn MarkdownRenderer,
    ids: &mut dyn IdSource,
) -> Section {
    let split = split_example(&normalize(comment));

    let Some(code) = split.code else {
        return Section::prose(markdown.render(&split.prose));
    };

    let result = flatten(&code);
    let source = if has_body(&code) {
        markdown.render(&code)
    } else {
        String::new()
    };

    Section {
        comment: markdown.render(&split.prose),
        example: Some(Example {
            id: ids.next_id(),
            source,
            result,
        }),
    }
}

/// Collapse code onto one line: no fences, indentation or line breaks.
#[must_use]
pub fn flatten(code: &str) -> String {
    let joined: String = code
        .split('\n')
        .filter(|line| !is_fence(line))
        .map(|line| line.trim_start().trim_end_matches('\r'))
        .collect();
    let spaced = joined.replace(['\t', '\r'], " ");
    SPACE_RUN_REGEX.replace_all(&spaced, " ").trim().to_string()
}

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

fn has_body(code: &str) -> bool {
    code.split('\n')
        .any(|line| !is_fence(line) && !line.trim().is_empty())
}
