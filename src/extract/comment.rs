//! Comment resolution: turn a node's leading comments into description text.

use crate::parser::script::Comment;
use regex::Regex;
use std::sync::LazyLock;

// JSDoc continuation prefix: "   * text"
static RE_STAR_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*+\s?").unwrap());

/// Description from the first leading comment, or `None` when there is no
/// comment or it is blank.
pub fn resolve(comments: &[Comment]) -> Option<String> {
    comments
        .first()
        .map(|c| clean(&c.value, c.block))
        .filter(|text| !text.is_empty())
}

/// Trim a comment body. Block comments lose their leading `*` markers and
/// their lines are joined with single spaces.
pub fn clean(value: &str, block: bool) -> String {
    if !block {
        return value.trim().to_string();
    }
    value
        .lines()
        .map(|line| RE_STAR_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
