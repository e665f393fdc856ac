//! Indentation-driven SQL pretty-printer.
//!
//! Re-emits SQL text with normalized keyword casing, clause line breaks
//! and nesting. The pipeline runs per statement, in this fixed order:
//!
//! 1. **Mask literals** ([`MaskedText`]) so no later step can touch
//!    literal content
//! 2. **Collapse whitespace** and trim
//! 3. **Uppercase** the core keyword set
//! 4. **Break before clauses**: compound two-word clauses first, then
//!    JOIN phrases kept as one unit, then single keywords
//! 5. **Break AND/OR** onto new lines
//! 6. **Indent** ([`indent`])
//! 7. **Restore literals**
//!
//! Statements are split from the raw input on `;` and rejoined with
//! `;\n\n` plus a trailing `;`. Formatting is idempotent; malformed SQL
//! yields best-effort output rather than an error, and blank input yields
//! empty output.

mod indent;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::scan::MaskedText;

/// Regex for whitespace runs in masked text.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Regex for the core keyword set rewritten to upper case.
static CORE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(SELECT|FROM|WHERE|JOIN|INNER|LEFT|RIGHT|FULL|OUTER|CROSS|GROUP|BY|ORDER|HAVING|UNION|INSERT|INTO|UPDATE|DELETE|VALUES|ON|SET|AND|OR)\b"
    )
    .expect("valid regex")
});

/// Regex for compound two-word clauses, broken first so they stay intact
/// through the later passes.
static COMPOUND_CLAUSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(GROUP BY|ORDER BY|INSERT INTO|DELETE FROM)\b").expect("valid regex")
});

/// Regex for JOIN phrases kept as one unit.
static JOIN_CLAUSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(INNER JOIN|LEFT JOIN|RIGHT JOIN|FULL JOIN|OUTER JOIN|CROSS JOIN|JOIN)\b")
        .expect("valid regex")
});

/// Regex for single-word clause keywords.
static SINGLE_CLAUSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(FROM|WHERE|HAVING|UNION|UPDATE|VALUES|SET)\b").expect("valid regex")
});

/// Regex for AND/OR surrounded by whitespace.
static AND_OR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(AND|OR)\s+").expect("valid regex"));

/// Format raw SQL into canonical, indented form.
///
/// Splits the input on `;`, formats each non-empty statement and rejoins
/// with `;\n\n` and a trailing `;`. Blank input yields an empty string.
/// Never fails; formatting twice yields the same result.
pub fn format(sql: &str) -> String {
    let formatted: Vec<String> = sql
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(format_statement)
        .filter(|statement| !statement.is_empty())
        .collect();

    if formatted.is_empty() {
        String::new()
    } else {
        format!("{};", formatted.join(";\n\n"))
    }
}

fn format_statement(sql: &str) -> String {
    let masked = MaskedText::mask(sql);
    let collapsed = WHITESPACE.replace_all(masked.text(), " ");
    let cased = uppercase_keywords(collapsed.trim());
    let broken = break_before_clauses(&cased);
    let split = AND_OR.replace_all(&broken, "\n${1} ");
    let indented = indent::apply(&split);
    masked.restore(&indented)
}

fn uppercase_keywords(sql: &str) -> String {
    CORE_KEYWORDS
        .replace_all(sql, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

fn break_before_clauses(sql: &str) -> String {
    let compound = COMPOUND_CLAUSES.replace_all(sql, "\n${1}");
    let joins = JOIN_CLAUSES.replace_all(&compound, "\n${1}");
    let singles = SINGLE_CLAUSES.replace_all(&joins, "\n${1}");
    singles.trim_start_matches('\n').to_string()
}
