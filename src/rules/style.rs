use std::sync::LazyLock;

use regex::Regex;

use super::{Issue, Rule, RuleCategory, RuleInfo, Severity, Span};

/// Regex for `SELECT` followed by `*`, allowing `DISTINCT`/`TOP n`/`TOP(n)`
/// modifiers in between so `SELECT TOP 10 *` still matches.
static SELECT_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bSELECT\s+(?:(?:DISTINCT|TOP\s*\(\s*\d+\s*\)|TOP\s+\d+)\s+)*\*")
        .expect("valid regex")
});

/// Regex for `SELECT *` feeding an `INTO` target in the same statement.
static SELECT_INTO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\bSELECT\s+\*.*\bINTO\b").expect("valid regex"));

/// SELECT * hides the column contract of the query
pub struct SelectStar;

impl Rule for SelectStar {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL001",
            name:     "SELECT * usage",
            severity: Severity::Warning,
            category: RuleCategory::Style
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if let Some(found) = SELECT_STAR.find(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "SELECT * should be avoided".to_string(),
                suggestion: Some("Specify explicit column names".to_string()),
                statement_index: Some(statement_index),
                span: Some(Span::of_match(statement, &found))
            }];
        }
        vec![]
    }
}

/// SELECT INTO copying every column creates a table with an implicit shape
pub struct SelectIntoWithoutColumns;

impl Rule for SelectIntoWithoutColumns {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL042",
            name:     "SELECT INTO without column list",
            severity: Severity::Warning,
            category: RuleCategory::Style
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if SELECT_INTO.is_match(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "SELECT INTO without explicit column list".to_string(),
                suggestion: Some("Specify explicit columns in SELECT".to_string()),
                statement_index: Some(statement_index),
                span: None
            }];
        }
        vec![]
    }
}
