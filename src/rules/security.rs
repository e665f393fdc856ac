use std::sync::LazyLock;

use regex::Regex;

use super::{Issue, Rule, RuleCategory, RuleInfo, Severity};

/// Regex for statements opening with a DROP of a schema object.
static DROP_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*DROP\s+(?:TABLE|DATABASE|SCHEMA|INDEX|VIEW|PROCEDURE|FUNCTION)\b")
        .expect("valid regex")
});

/// Regex for statements opening with TRUNCATE TABLE.
static TRUNCATE_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*TRUNCATE\s+TABLE\b").expect("valid regex"));

/// Regex for ALTER TABLE statements that drop a column or constraint.
static ALTER_DROP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*ALTER\s+TABLE\s+.*\bDROP\s+(?:COLUMN|CONSTRAINT)\b").expect("valid regex")
});

/// Regex for statements opening with DELETE FROM a named table.
static DELETE_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*DELETE\s+FROM\s+\w+").expect("valid regex"));

/// Regex for statements opening with UPDATE ... SET.
static UPDATE_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*UPDATE\s+\w+\s+SET\s").expect("valid regex"));

/// Regex for the WHERE keyword anywhere in a statement.
static WHERE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWHERE\b").expect("valid regex"));

/// Detects destructive DDL at the start of a statement
///
/// DROP and TRUNCATE destroy data or schema with no WHERE clause to limit
/// scope; ALTER TABLE ... DROP removes columns or constraints. One
/// statement can trigger several of these findings.
pub struct DestructiveStatement;

impl Rule for DestructiveStatement {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL010",
            name:     "Destructive statement",
            severity: Severity::Error,
            category: RuleCategory::Security
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        let info = self.info();
        let mut issues = Vec::new();

        if DROP_STATEMENT.is_match(statement) {
            issues.push(Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "Destructive DROP statement detected".to_string(),
                suggestion: Some("Ensure backup exists before dropping".to_string()),
                statement_index: Some(statement_index),
                span: None
            });
        }

        if TRUNCATE_STATEMENT.is_match(statement) {
            issues.push(Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "Destructive TRUNCATE statement detected".to_string(),
                suggestion: Some("TRUNCATE cannot be rolled back".to_string()),
                statement_index: Some(statement_index),
                span: None
            });
        }

        // Dropping a column loses data but keeps the table, hence Warning
        if ALTER_DROP.is_match(statement) {
            issues.push(Issue {
                rule_id: info.id,
                severity: Severity::Warning,
                message: "Destructive ALTER TABLE statement detected".to_string(),
                suggestion: Some("Dropping columns may cause data loss".to_string()),
                statement_index: Some(statement_index),
                span: None
            });
        }

        issues
    }
}

/// DELETE without WHERE removes all rows
pub struct MissingWhereInDelete;

impl Rule for MissingWhereInDelete {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL020",
            name:     "DELETE without WHERE",
            severity: Severity::Error,
            category: RuleCategory::Security
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if DELETE_FROM.is_match(statement) && !WHERE_KEYWORD.is_match(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "DELETE without WHERE clause".to_string(),
                suggestion: Some("Add WHERE clause to limit scope".to_string()),
                statement_index: Some(statement_index),
                span: None
            }];
        }
        vec![]
    }
}

/// UPDATE without WHERE affects all rows
pub struct MissingWhereInUpdate;

impl Rule for MissingWhereInUpdate {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id:       "SQL021",
            name:     "UPDATE without WHERE",
            severity: Severity::Error,
            category: RuleCategory::Security
        }
    }

    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
        if UPDATE_SET.is_match(statement) && !WHERE_KEYWORD.is_match(statement) {
            let info = self.info();
            return vec![Issue {
                rule_id: info.id,
                severity: info.severity,
                message: "UPDATE without WHERE clause".to_string(),
                suggestion: Some("Add WHERE clause to limit scope".to_string()),
                statement_index: Some(statement_index),
                span: None
            }];
        }
        vec![]
    }
}
