//! Block comment discovery.

use std::sync::LazyLock;

use regex::Regex;

/// A `/* ... */` region, ending at the first closing delimiter.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Find every block comment in `source`, delimiters included, in source order.
///
/// Comments do not nest. A trailing `/*` that is never closed is ignored. An
/// empty result is not an error: the caller reports it as a missing comment.
#[must_use]
pub fn extract_comments(source: &str) -> Vec<&str> {
    BLOCK_COMMENT_REGEX
        .find_iter(source)
        .map(|found| found.as_str())
        .collect()
}
