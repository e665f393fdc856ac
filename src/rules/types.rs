//! Type definitions for the static analysis rule system.
//!
//! This module defines the core types used throughout the rule engine:
//! - [`Severity`] - Issue severity levels (Info, Warning, Error)
//! - [`RuleCategory`] - Rule categories (Performance, Style, Security)
//! - [`Span`] - Character offset range into a statement
//! - [`Issue`] - Individual rule findings with context
//! - [`AnalysisReport`] - Complete analysis results

use serde::Serialize;

/// Severity level of a reported issue.
///
/// Ordered from lowest to highest severity for sorting purposes.
/// Exit codes are determined by the highest severity issue found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Informational suggestion, does not affect exit code
    Info,
    /// Warning that may indicate a problem (exit code 1)
    Warning,
    /// Critical issue that must be addressed (exit code 2)
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

/// Category of a rule for grouping and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleCategory {
    /// Rules that detect join, hint and result-shape problems
    Performance,
    /// Rules that enforce coding style and best practices
    Style,
    /// Rules that identify destructive or unbounded operations
    Security
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Performance => write!(f, "Performance"),
            Self::Style => write!(f, "Style"),
            Self::Security => write!(f, "Security")
        }
    }
}

/// Character offset range into the statement text an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Zero-based character offset where the triggering text starts
    pub start:  usize,
    /// Number of characters covered
    pub length: usize
}

impl Span {
    /// Span of a regex match within `text`, in character offsets.
    pub(crate) fn of_match(text: &str, found: &regex::Match<'_>) -> Self {
        Self {
            start:  text[..found.start()].chars().count(),
            length: found.as_str().chars().count()
        }
    }
}

/// A single issue found in a statement.
///
/// Immutable once created: produced by exactly one rule invocation and
/// never mutated afterward (severity overrides are applied by the runner
/// before the issue reaches a report). Field names serialize in camelCase
/// (`ruleId`, `statementIndex`, ...) because downstream consumers key on
/// that wire shape; optional fields are omitted when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique rule identifier (e.g., "SQL001")
    pub rule_id:         &'static str,
    /// Severity level of this issue
    pub severity:        Severity,
    /// Detailed description of the finding
    pub message:         String,
    /// Optional suggestion for fixing the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion:      Option<String>,
    /// Zero-based index of the statement in the segmented input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_index: Option<usize>,
    /// Offset range of the triggering text, when a rule computes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span:            Option<Span>
}

/// Metadata about a rule for identification and configuration.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Unique rule identifier (e.g., "SQL001")
    pub id:       &'static str,
    /// Human-readable rule name
    pub name:     &'static str,
    /// Default severity level
    pub severity: Severity,
    /// Rule category
    pub category: RuleCategory
}

/// Complete analysis report containing all issues.
///
/// Issues keep segmentation order: `statement_index` values are
/// non-decreasing, and issues within one statement follow rule
/// registration order. Use [`error_count`](Self::error_count),
/// [`warning_count`](Self::warning_count) and
/// [`info_count`](Self::info_count) for counts by severity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// All issues found during analysis
    pub issues:           Vec<Issue>,
    /// Number of statements analyzed
    pub statements_count: usize,
    /// Number of rules executed
    pub rules_count:      usize
}

impl AnalysisReport {
    pub fn new(statements_count: usize, rules_count: usize) -> Self {
        Self {
            issues: Vec::new(),
            statements_count,
            rules_count
        }
    }

    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Whether any issue has [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Info)
            .count()
    }
}
