use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;

use super::{Issue, Rule, RuleCategory, RuleInfo, Severity, Span};
use crate::scan;

/// Regex capturing the FROM clause up to the next major clause or end.
///
/// Shared by the comma-join and Cartesian risk rules so both see identical
/// clause boundaries.
static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bFROM\s+(.*?)(?:\bWHERE\b|\bGROUP\b|\bORDER\b|\bHAVING\b|$)")
        .expect("valid regex")
});

/// Regex for the JOIN keyword anywhere in a clause.
static JOIN_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bJOIN\b").expect("valid regex"));

/// Regex for an explicit CROSS JOIN.
static CROSS_JOIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCROSS\s+JOIN\b").expect("valid regex"));

/// Regex for NOLOCK table hints, with or without the WITH wrapper.
static NOLOCK_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWITH\s*\(\s*NOLOCK\s*\)|\(NOLOCK\)").expect("valid regex"));

/// Regex for TOP with a row count, parenthesized or bare.
static TOP_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bTOP\s+\d+|\bTOP\s*\(\s*\d+\s*\)").expect("valid regex"));

/// Regex for the ORDER BY clause.
static ORDER_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bORDER\s+BY\b").expect("valid regex"));

/// Regex for join phrases followed by a table reference. CROSS JOIN is
/// matched too and skipped in code since it takes no ON clause (the regex
/// crate has no lookbehind).
static JOIN_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:(?:INNER|LEFT|RIGHT|FULL|CROSS)\s+)?JOIN\s+\w+").expect("valid regex")
});

/// Regex for the clause boundary ending a join's ON search window.
static NEXT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:WHERE|GROUP\s+BY|ORDER\s+BY|HAVING|UNION|(?:(?:INNER|LEFT|RIGHT|FULL)\s+)?JOIN)\b"
    )
    .expect("valid regex")
});

/// Regex for the ON keyword.
static ON_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bON\b").expect("valid regex"));

/// Regex for a CROSS-prefixed join phrase.
static CROSS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^CROSS\b").expect("valid regex"));

/// Regex for WHERE or ON anywhere in a statement.
static WHERE_OR_ON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:WHERE|ON)\b").expect("valid regex"));

/// Regex for two adjacent bare identifiers (table plus alias or table pair).
static IDENTIFIER_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s+\w+").expect("valid regex"));

/// Extract the FROM clause text of a statement, if it has one.
fn from_clause(statement: &str) -> Option<&str> {
    FROM_CLAUSE
        .captures(statement)
        .and_then(|caps| caps.get(1))
        .map(|found| found.as_str())
}

/// CROSS JOIN produces a full Cartesian product
pub struct ExplicitCrossJoin;

impl Rule for ExplicitCrossJoin {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL030",
            name:     "Explicit CROSS JOIN",
            severity: Severity::Warning,
            category: RuleCategory::Performance
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if let Some(found) = CROSS_JOIN.find(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "CROSS JOIN detected".to_string(),
                suggestion: Some("Verify cartesian product is intended".to_string()),
                statement_index: Some(statement_index),
                span: Some(Span::of_match(statement, &found))
            }];
        }
        vec![]
    }
}

/// Comma-separated tables in FROM without explicit JOIN syntax
pub struct ImplicitCommaJoin;

impl Rule for ImplicitCommaJoin {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL031",
            name:     "Implicit comma join",
            severity: Severity::Warning,
            category: RuleCategory::Performance
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if let Some(clause) = from_clause(statement)
            && clause.contains(',')
            && !JOIN_KEYWORD.is_match(clause)
        {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "Implicit comma join detected".to_string(),
                suggestion: Some("Use explicit JOIN syntax".to_string()),
                statement_index: Some(statement_index),
                span: None
            }];
        }
        vec![]
    }
}

/// NOLOCK trades read consistency for lock-free access
pub struct NolockHint;

impl Rule for NolockHint {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL040",
            name:     "NOLOCK hint",
            severity: Severity::Warning,
            category: RuleCategory::Performance
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if let Some(found) = NOLOCK_HINT.find(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "NOLOCK hint detected".to_string(),
                suggestion: Some("NOLOCK may cause dirty reads".to_string()),
                statement_index: Some(statement_index),
                span: Some(Span::of_match(statement, &found))
            }];
        }
        vec![]
    }
}

/// TOP without ORDER BY returns an arbitrary row subset
pub struct TopWithoutOrderBy;

impl Rule for TopWithoutOrderBy {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL041",
            name:     "TOP without ORDER BY",
            severity: Severity::Warning,
            category: RuleCategory::Performance
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if TOP_CLAUSE.is_match(statement) && !ORDER_BY.is_match(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "TOP without ORDER BY".to_string(),
                suggestion: Some("Add ORDER BY for consistent results".to_string()),
                statement_index: Some(statement_index),
                span: None
            }];
        }
        vec![]
    }
}

/// JOIN with no ON condition before the next clause
pub struct JoinMissingOn;

impl Rule for JoinMissingOn {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL043",
            name:     "JOIN missing ON",
            severity: Severity::Error,
            category: RuleCategory::Performance
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        for found in JOIN_PHRASE.find_iter(statement) {
            // CROSS JOIN takes no ON clause
            if CROSS_PREFIX.is_match(found.as_str()) {
                continue;
            }

            let rest = &statement[found.end()..];
            let window = match NEXT_CLAUSE.find(rest) {
                Some(next) => &rest[..next.start()],
                None => rest
            };

            if !ON_KEYWORD.is_match(window) {
                let info = self.info();
                // Report at most once per statement
                return vec![Issue {
                    rule_id: info.id,
                    severity: info.severity,
                    message: "JOIN missing ON clause".to_string(),
                    suggestion: Some("Add ON clause to specify join condition".to_string()),
                    statement_index: Some(statement_index),
                    span: None
                }];
            }
        }
        vec![]
    }
}

/// Multiple FROM tables with no WHERE or ON anywhere in the statement
pub struct CartesianRisk;

impl Rule for CartesianRisk {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL044",
            name:     "Cartesian product risk",
            severity: Severity::Warning,
            category: RuleCategory::Performance
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        let Some(clause) = from_clause(statement) else {
            return vec![];
        };

        // Top-level comma split keeps commas inside function calls and
        // literals out of the table count
        let references: Vec<CompactString> = scan::split_top_level(clause, ',')
            .iter()
            .map(|segment| CompactString::from(segment.trim()))
            .filter(|segment| !segment.is_empty())
            .collect();

        let comma_tables = references.len() > 1;
        let adjacent_pair =
            IDENTIFIER_PAIR.find_iter(clause).count() > 1 && !JOIN_KEYWORD.is_match(clause);

        if (comma_tables || adjacent_pair) && !WHERE_OR_ON.is_match(statement) {
            let info = self.info();
            let message = if comma_tables {
                let names: Vec<&str> = references.iter().map(|name| name.as_str()).collect();
                format!(
                    "Cartesian product risk: FROM lists {} table references ({})",
                    references.len(),
                    names.join(", ")
                )
            } else {
                "Cartesian product risk: FROM has multiple table references".to_string()
            };
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message,
                suggestion: Some("Add WHERE or JOIN conditions".to_string()),
                statement_index: Some(statement_index),
                span: None
            }];
        }
        vec![]
    }
}
