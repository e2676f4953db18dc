//! Markdown rendering.
//!
//! The extraction engine only needs two things from markdown: HTML for a
//! piece of prose or code, and the text of the first top-level heading.
//! Both sit behind [`MarkdownRenderer`] so the engine can be driven with any
//! renderer; [`CommonMark`] is the pulldown-cmark implementation used by the
//! CLI.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

/// Converts markdown text to HTML.
pub trait MarkdownRenderer {
    /// Render `text` to an HTML fragment.
    fn render(&self, text: &str) -> String;

    /// Literal text of the first level-1 heading in `text`, if any.
    fn first_heading(&self, text: &str) -> Option<String> {
        first_heading(text)
    }
}

/// CommonMark renderer with tables and strikethrough enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl CommonMark {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }
}

impl MarkdownRenderer for CommonMark {
    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, Self::options());
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Find the first `# Heading` / setext `===` heading and return its text.
///
/// Inline markup inside the heading is dropped; only text and inline code
/// contribute. Headings inside code blocks are never seen because the parser
/// reports them as code text.
#[must_use]
pub fn first_heading(text: &str) -> Option<String> {
    let mut inside = false;
    let mut heading = String::new();

    for event in Parser::new_ext(text, CommonMark::options()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => inside = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if inside => {
                let trimmed = heading.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                inside = false;
                heading.clear();
            }
            Event::Text(value) | Event::Code(value) if inside => heading.push_str(&value),
            Event::SoftBreak | Event::HardBreak if inside => heading.push(' '),
            _ => {}
        }
    }

    None
}
