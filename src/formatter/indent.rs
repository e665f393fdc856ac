//! Indentation state machine for newline-broken statements.
//!
//! A single integer level counter drives the layout. SELECT blocks and
//! block-opening clauses raise it; closing parens and clause keywords that
//! end a block lower it, floored at zero so unbalanced input cannot push
//! the layout negative.

use std::sync::LazyLock;

use regex::Regex;

use crate::scan;

/// Regex for a line led by SELECT.
static SELECT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SELECT\b").expect("valid regex"));

/// Regex capturing SELECT plus any DISTINCT/TOP modifiers as the header.
static SELECT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(SELECT\s+(?:DISTINCT\s+|TOP\s+\d+\s+|TOP\s*\(\s*\d+\s*\)\s+)*)")
        .expect("valid regex")
});

/// Regex for clause keywords that close the current block before emission.
///
/// FROM both closes the SELECT block and opens its own, so it appears here
/// and in [`INDENT_AFTER`]; the same double role applies to WHERE and
/// HAVING.
static DEDENT_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:ON|WHERE|HAVING|FROM)\b").expect("valid regex"));

/// Regex for clause keywords that open a new block after emission.
static INDENT_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:FROM|WHERE|GROUP BY|ORDER BY|HAVING|UNION|VALUES|SET)\b")
        .expect("valid regex")
});

/// Indent the newline-broken statement with a four-space unit per level.
pub(super) fn apply(sql: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut level: usize = 0;

    for raw in sql.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if SELECT_LINE.is_match(line) {
            let pad = "    ".repeat(level);
            for select_line in split_select_columns(line) {
                lines.push(format!("{}{}", pad, select_line));
            }
            level += 1;
            continue;
        }

        if line.starts_with(')') || DEDENT_BEFORE.is_match(line) {
            level = level.saturating_sub(1);
        }

        lines.push(format!("{}{}", "    ".repeat(level), line));

        if INDENT_AFTER.is_match(line) || line.ends_with('(') {
            level += 1;
        }
    }

    lines.join("\n")
}

/// Break a SELECT line into a header and one column-list line.
///
/// The column list is split on top-level commas (quote- and paren-aware,
/// so commas inside function calls or literals never split) and rejoined
/// with normalized `, ` separators under a two-space lead.
fn split_select_columns(line: &str) -> Vec<String> {
    let Some(caps) = SELECT_HEADER.captures(line) else {
        return vec![line.to_string()];
    };

    let header = caps[1].trim().to_string();
    let columns_part = line[caps[0].len()..].trim();
    if columns_part.is_empty() {
        return vec![header];
    }

    let columns: Vec<String> = scan::split_top_level(columns_part, ',')
        .iter()
        .map(|column| column.trim().to_string())
        .filter(|column| !column.is_empty())
        .collect();
    if columns.is_empty() {
        return vec![line.to_string()];
    }

    vec![header, format!("  {}", columns.join(", "))]
}
