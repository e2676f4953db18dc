//! Comment text normalization.
//!
//! Removes block-comment delimiters and `*` continuation markers, then
//! canonicalizes indentation: anything at the comment's base level loses its
//! indentation, anything one level deeper lands on exactly four spaces. The
//! segmenter relies on that four-space column to find indented examples.
//!
//! [`normalize`] is idempotent. Heading detection runs it over the whole file
//! while the segmenter runs it again over each comment, so a second pass must
//! never change already-normalized text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Width of the canonical indentation that marks a code line.
pub const CODE_INDENT: usize = 4;

/// Indentation at or below this width is treated as the comment's base level.
const BASE_INDENT: usize = 2;

/// Comment delimiters (`/*`, `/**`, `*/`, `**/`) with one adjacent inner space.
static DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*+ ?| ?\*+/").unwrap());

/// Normalize a comment (or any text) for markdown rendering.
#[must_use]
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let uncommented = strip_delimiters(&unified);

    uncommented
        .split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove every `/*` and `*/` delimiter.
///
/// Removal can splice two halves into a new delimiter (`/ */*` becomes `/*`),
/// so this repeats until the text is delimiter-free.
#[must_use]
pub fn strip_delimiters(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        match DELIMITER_REGEX.replace_all(&current, "") {
            Cow::Borrowed(_) => return current,
            Cow::Owned(next) => current = next,
        }
    }
}

/// Number of leading columns a line is indented by, counting a tab as four.
#[must_use]
pub fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|ch| *ch == ' ' || *ch == '\t')
        .map(|ch| if ch == '\t' { CODE_INDENT } else { 1 })
        .sum()
}

/// True when the line sits at the canonical code indentation.
#[must_use]
pub fn is_code_line(line: &str) -> bool {
    !line.trim().is_empty() && indent_width(line) >= CODE_INDENT
}

fn normalize_line(line: &str) -> String {
    let line = strip_marker(line);
    if line.trim().is_empty() {
        return String::new();
    }

    let width = indent_width(line);
    let rest = line.trim_start_matches([' ', '\t']);
    let target = match width {
        0..=BASE_INDENT => 0,
        3 => CODE_INDENT,
        other => other,
    };

    let mut out = String::with_capacity(target + rest.len());
    out.extend(std::iter::repeat_n(' ', target));
    out.push_str(rest);
    out
}

/// Strip a ` *` continuation marker and at most one space after it.
///
/// Normalized lines never start with exactly one space, so a second pass
/// finds no marker to strip.
fn strip_marker(line: &str) -> &str {
    match line.strip_prefix(" *") {
        Some(after) => after.strip_prefix(' ').unwrap_or(after),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_delimiters() {
        assert_eq!(strip_delimiters("/* hello */"), "hello");
        assert_eq!(strip_delimiters("/*hello*/"), "hello");
        assert_eq!(strip_delimiters("/** docblock **/"), "docblock");
        assert_eq!(strip_delimiters("no comment here"), "no comment here");
    }

    #[test]
    fn delimiter_removal_reaches_fixpoint() {
        assert_eq!(strip_delimiters("/ */*"), "");
        assert!(!strip_delimiters("a //** b **// c").contains("/*"));
    }

    #[test]
    fn sass_style_comment_loses_base_indent() {
        let input = "/*\n  Title\n  =====\n\n  Paragraph text.\n*/";
        assert_eq!(normalize(input), "\nTitle\n=====\n\nParagraph text.\n");
    }

    #[test]
    fn extra_level_becomes_four_spaces() {
        let input = "/*\n  Buttons\n\n    <a class=\"btn\">Go</a>\n*/";
        let normalized = normalize(input);
        assert!(normalized.contains("\n    <a class=\"btn\">Go</a>"));
        assert!(normalized.contains("\nButtons\n"));
    }

    #[test]
    fn three_space_indent_is_promoted() {
        assert_eq!(normalize("   code"), "    code");
    }

    #[test]
    fn deeper_indent_is_preserved() {
        assert_eq!(normalize("      nested"), "      nested");
    }

    #[test]
    fn continuation_markers_are_stripped() {
        let input = "/**\n * Forms\n * =====\n *\n *     <input>\n */";
        let normalized = normalize(input);
        assert!(normalized.contains("\nForms\n=====\n"));
        assert!(normalized.contains("\n    <input>"));
    }

    #[test]
    fn markers_without_trailing_space_are_stripped() {
        assert_eq!(normalize("/**\n *Title\n *=====\n */"), "\nTitle\n=====\n");
        assert_eq!(normalize(" *    <b>x</b>"), "    <b>x</b>");
    }

    #[test]
    fn column_zero_bullets_survive() {
        assert_eq!(normalize("* first\n* second"), "* first\n* second");
    }

    #[test]
    fn tabs_count_as_code_indent() {
        assert_eq!(normalize("\tcode"), "    code");
        assert!(is_code_line(&normalize("\tcode")));
    }

    #[test]
    fn crlf_is_unified() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn whitespace_only_lines_become_empty() {
        assert_eq!(normalize("a\n      \nb"), "a\n\nb");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        let samples = [
            "/*\n  Title\n  =====\n\n  Text\n\n    .btn {}\n*/",
            "/**\n *  * nested marker\n *   three\n */",
            "/**\n *Tight\n *=====\n *\n *     <hr>\n */",
            "//** odd **//",
            "\t\tdouble tab\n   three\n  two\n one",
            "```\n.btn { color: red; }\n```",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn code_line_detection() {
        assert!(is_code_line("    .btn"));
        assert!(is_code_line("\t.btn"));
        assert!(!is_code_line("  .btn"));
        assert!(!is_code_line("        "));
    }
}
