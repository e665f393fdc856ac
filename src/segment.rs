//! Statement segmentation.
//!
//! Splits normalized SQL into an ordered sequence of statements: first on
//! the `GO` batch separator, then on the `;` statement terminator. Empty
//! fragments are discarded and each surviving fragment is trimmed. The
//! resulting order is significant: analysis rules report
//! `statement_index` values referencing it.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for the `GO` batch separator.
///
/// Normalization has already collapsed line structure, so a separator that
/// stood alone on its own line arrives as a standalone `GO` token. The
/// split is not literal-aware: a bare `GO` or `;` inside a string literal
/// still acts as a boundary (accepted heuristic).
static BATCH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bGO\b").expect("valid regex"));

/// Split normalized SQL into trimmed, non-empty statements in source order.
pub fn split_statements(sql: &str) -> Vec<String> {
    if sql.trim().is_empty() {
        return Vec::new();
    }
    BATCH_SEPARATOR
        .split(sql)
        .flat_map(|batch| batch.split(';'))
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(str::to_string)
        .collect()
}
