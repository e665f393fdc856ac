//! Static analysis rule engine for SQL statements.
//!
//! This module provides a parallel rule execution engine that inspects SQL
//! statement text for style problems, destructive operations and join
//! hazards. Rules are implemented as types that implement the [`Rule`]
//! trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ Statements  │────▶│  RuleRunner  │────▶│   Report    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │   Rules     │
//!                     │  (parallel) │
//!                     └─────────────┘
//! ```
//!
//! The [`RuleRunner`] executes all enabled rules over each statement in
//! parallel using [`rayon`], collecting issues into an [`AnalysisReport`].
//! Statements are processed concurrently; within one statement, issues
//! follow rule registration order, so the report is stable across runs.
//!
//! # Detection model
//!
//! Every rule is a stateless, pure function of
//! `(statement_text, statement_index)`. Detection is textual: regex
//! patterns over the trimmed, whitespace-normalized statement, never a
//! grammar parse. False negatives are acceptable; each rule stays cheap
//! (one or a few regex passes) and independent, so rules compose without
//! seeing each other's results.
//!
//! # Rule Categories
//!
//! - **Style** (`SQL001`, `SQL042`) - Column-contract hygiene
//! - **Security** (`SQL010`-`SQL021`) - Destructive or unbounded writes
//! - **Performance** (`SQL030`-`SQL044`) - Join and hint hazards
//!
//! # Configuration
//!
//! Rules can be disabled or have their severity overridden via
//! [`RulesConfig`]:
//!
//! ```toml
//! [rules]
//! disabled = ["SQL001"]
//!
//! [rules.severity]
//! SQL040 = "error"
//! ```
//!
//! # Implementing Custom Rules
//!
//! ```ignore
//! use crate::rules::{Rule, RuleInfo, Severity, RuleCategory, Issue};
//!
//! pub struct MyRule;
//!
//! impl Rule for MyRule {
//!     fn info(&self) -> RuleInfo {
//!         RuleInfo {
//!             id: "CUSTOM001",
//!             name: "My custom rule",
//!             severity: Severity::Warning,
//!             category: RuleCategory::Style,
//!         }
//!     }
//!
//!     fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue> {
//!         // Implementation here
//!         vec![]
//!     }
//! }
//! ```

mod performance;
mod security;
mod style;
mod types;

use rayon::prelude::*;
pub use types::{AnalysisReport, Issue, RuleCategory, RuleInfo, Severity, Span};

use crate::{config::RulesConfig, normalize::normalize, segment::split_statements};

/// Trait for implementing SQL analysis rules.
///
/// Rules are stateless analyzers that examine a single statement's text
/// and return any issues found. They must be `Send + Sync` for parallel
/// execution.
pub trait Rule: Send + Sync {
    /// Returns metadata about this rule.
    fn info(&self) -> RuleInfo;

    /// Analyzes one statement and returns any issues found.
    ///
    /// # Arguments
    ///
    /// * `statement` - Trimmed, normalized statement text
    /// * `statement_index` - Zero-based index of this statement in the
    ///   segmented input
    ///
    /// # Returns
    ///
    /// A vector of issues, empty if the statement passes this rule.
    fn check(&self, statement: &str, statement_index: usize) -> Vec<Issue>;
}

/// Parallel rule execution engine.
///
/// The runner holds a collection of rules and executes them against each
/// statement using [`rayon`]. It supports rule filtering and severity
/// overrides via configuration.
///
/// # Example
///
/// ```ignore
/// let config = RulesConfig {
///     disabled: vec!["SQL001".into()],
///     ..Default::default()
/// };
///
/// let runner = RuleRunner::with_config(config);
/// let report = runner.analyze(&statements);
///
/// println!("Found {} errors", report.error_count());
/// ```
pub struct RuleRunner {
    rules:          Vec<Box<dyn Rule>>,
    severity_cache: std::collections::HashMap<&'static str, Severity>
}

impl Default for RuleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRunner {
    /// Create a new runner with all default rules
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Create a new runner with configuration
    pub fn with_config(config: RulesConfig) -> Self {
        // Registered in rule id order; issues within a statement follow
        // this order
        let all_rules: Vec<Box<dyn Rule>> = vec![
            Box::new(style::SelectStar),
            Box::new(security::DestructiveStatement),
            Box::new(security::MissingWhereInDelete),
            Box::new(security::MissingWhereInUpdate),
            Box::new(performance::ExplicitCrossJoin),
            Box::new(performance::ImplicitCommaJoin),
            Box::new(performance::NolockHint),
            Box::new(performance::TopWithoutOrderBy),
            Box::new(style::SelectIntoWithoutColumns),
            Box::new(performance::JoinMissingOn),
            Box::new(performance::CartesianRisk),
        ];

        // Filter out disabled rules
        let rules: Vec<Box<dyn Rule>> = all_rules
            .into_iter()
            .filter(|rule| {
                !config
                    .disabled
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(rule.info().id))
            })
            .collect();

        // Build severity override cache
        let mut severity_cache = std::collections::HashMap::new();
        for rule in &rules {
            let rule_id = rule.info().id;
            if let Some(sev_str) = config.severity.get(rule_id)
                && let Some(sev) = parse_severity(sev_str)
            {
                severity_cache.insert(rule_id, sev);
            }
        }

        Self {
            rules,
            severity_cache
        }
    }

    /// Run all rules on the provided statements (parallel execution).
    ///
    /// Issues keep segmentation order: `statement_index` is non-decreasing
    /// across the report and, within one statement, issues follow rule
    /// registration order.
    pub fn analyze(&self, statements: &[String]) -> AnalysisReport {
        let mut report = AnalysisReport::new(statements.len(), self.rules.len());

        // Statements run in parallel; the indexed collect keeps order
        let issues: Vec<Issue> = statements
            .par_iter()
            .enumerate()
            .flat_map_iter(|(index, statement)| {
                self.rules
                    .iter()
                    .flat_map(move |rule| rule.check(statement, index))
            })
            .collect();

        // Apply severity overrides and add to report
        for mut issue in issues {
            if let Some(&severity) = self.severity_cache.get(issue.rule_id) {
                issue.severity = severity;
            }
            report.add_issue(issue);
        }

        report
    }
}

/// Analyze raw SQL with the default rule set.
///
/// Normalizes and segments the input, then runs every built-in rule over
/// each statement. Blank input yields an empty report. Never fails on
/// malformed SQL; absence of a pattern simply yields no issue.
pub fn analyze(sql: &str) -> AnalysisReport {
    let statements = split_statements(&normalize(sql));
    RuleRunner::new().analyze(&statements)
}

/// Parse severity string to enum
fn parse_severity(s: &str) -> Option<Severity> {
    match s.to_lowercase().as_str() {
        "error" => Some(Severity::Error),
        "warning" | "warn" => Some(Severity::Warning),
        "info" => Some(Severity::Info),
        _ => None
    }
}
