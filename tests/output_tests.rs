// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_review::output::{OutputFormat, OutputOptions, format_report};
use sql_review::rules::{AnalysisReport, Issue, Severity, Span};

fn make_issue(
    rule_id: &'static str,
    message: &str,
    severity: Severity,
    statement_index: usize,
    suggestion: Option<&str>
) -> Issue {
    Issue {
        rule_id,
        severity,
        message: message.to_string(),
        suggestion: suggestion.map(|s| s.to_string()),
        statement_index: Some(statement_index),
        span: None
    }
}

fn sample_report() -> AnalysisReport {
    let mut report = AnalysisReport::new(2, 11);
    report.add_issue(make_issue(
        "SQL001",
        "SELECT * should be avoided",
        Severity::Warning,
        0,
        Some("Specify explicit column names")
    ));
    report.add_issue(make_issue(
        "SQL020",
        "DELETE without WHERE clause",
        Severity::Error,
        1,
        None
    ));
    report
}

fn plain_text_options() -> OutputOptions {
    OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: false
    }
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert!(opts.colored);
    assert!(!opts.verbose);
}

#[test]
fn test_text_report_lists_issues_and_summary() {
    let output = format_report(&sample_report(), &[], &plain_text_options());
    assert!(output.contains("SQL001"));
    assert!(output.contains("SELECT * should be avoided"));
    assert!(output.contains("(statement 0)"));
    assert!(output.contains("suggestion: Specify explicit column names"));
    assert!(output.contains("2 statement(s), 11 rule(s): 1 error(s), 1 warning(s), 0 info"));
}

#[test]
fn test_text_report_without_issues() {
    let report = AnalysisReport::new(1, 11);
    let output = format_report(&report, &[], &plain_text_options());
    assert!(output.contains("No issues found."));
}

#[test]
fn test_text_report_renders_span() {
    let mut report = AnalysisReport::new(1, 11);
    let mut issue = make_issue("SQL030", "CROSS JOIN detected", Severity::Warning, 0, None);
    issue.span = Some(Span { start: 10, length: 10 });
    report.add_issue(issue);

    let output = format_report(&report, &[], &plain_text_options());
    assert!(output.contains("[10..20]"));
}

#[test]
fn test_verbose_text_report_lists_statements() {
    let statements = vec!["SELECT * FROM a".to_string(), "DELETE FROM b".to_string()];
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: true
    };
    let output = format_report(&sample_report(), &statements, &opts);
    assert!(output.contains("Statements:"));
    assert!(output.contains("[0] SELECT * FROM a"));
    assert!(output.contains("[1] DELETE FROM b"));
}

#[test]
fn test_json_report_uses_wire_field_names() {
    let opts = OutputOptions {
        format:  OutputFormat::Json,
        colored: false,
        verbose: false
    };
    let output = format_report(&sample_report(), &[], &opts);
    assert!(output.contains("\"ruleId\": \"SQL001\""));
    assert!(output.contains("\"statementIndex\": 0"));
    assert!(output.contains("\"severity\": \"Error\""));
}

#[test]
fn test_yaml_report_contains_issues() {
    let opts = OutputOptions {
        format:  OutputFormat::Yaml,
        colored: false,
        verbose: false
    };
    let output = format_report(&sample_report(), &[], &opts);
    assert!(output.contains("issues:"));
    assert!(output.contains("ruleId: SQL001"));
}
