//! SQL text normalization.
//!
//! Produces the canonical input for statement segmentation: comments
//! removed, whitespace collapsed outside literals, ends trimmed.
//!
//! Comment stripping runs before any literal masking, so a `--` or `/*`
//! sequence inside a string literal is stripped as if it were a comment.
//! Known limitation: comments are rare inside literal SQL values, and the
//! formatting path is unaffected since it masks literals and never strips
//! comments.

use std::sync::LazyLock;

use regex::Regex;

use crate::scan;

/// Regex for line comments (`--` to end of line).
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)--.*$").expect("valid regex"));

/// Regex for block comments (`/* */`, non-greedy, spanning lines).
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

/// Normalize raw SQL: strip comments, collapse whitespace, trim.
///
/// Blank input yields an empty string. Never fails.
pub fn normalize(sql: &str) -> String {
    if sql.trim().is_empty() {
        return String::new();
    }
    let without_line = LINE_COMMENT.replace_all(sql, "");
    let without_block = BLOCK_COMMENT.replace_all(&without_line, "");
    scan::collapse_whitespace(&without_block)
}
