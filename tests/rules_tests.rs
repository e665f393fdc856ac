use indexmap::IndexMap;
use sql_review::config::RulesConfig;
use sql_review::normalize::normalize;
use sql_review::rules::{RuleRunner, Severity, Span, analyze};
use sql_review::segment::split_statements;

fn rule_ids(sql: &str) -> Vec<String> {
    analyze(sql)
        .issues
        .iter()
        .map(|issue| issue.rule_id.to_string())
        .collect()
}

fn rule_ids_with(sql: &str, config: RulesConfig) -> Vec<String> {
    let statements = split_statements(&normalize(sql));
    let runner = RuleRunner::with_config(config);
    runner
        .analyze(&statements)
        .issues
        .iter()
        .map(|issue| issue.rule_id.to_string())
        .collect()
}

#[test]
fn test_select_star_reports_single_warning() {
    let report = analyze("SELECT * FROM Users");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].rule_id, "SQL001");
    assert_eq!(report.issues[0].severity, Severity::Warning);
}

#[test]
fn test_select_star_span_covers_match() {
    let report = analyze("SELECT * FROM Users");
    assert_eq!(report.issues[0].span, Some(Span { start: 0, length: 8 }));
}

#[test]
fn test_explicit_columns_ok() {
    let violations = rule_ids("SELECT id, name FROM Users WHERE id = 1");
    assert!(violations.is_empty());
}

#[test]
fn test_select_star_with_top_modifier() {
    let violations = rule_ids("SELECT TOP 10 * FROM T");
    assert_eq!(violations, ["SQL001", "SQL041"]);
}

#[test]
fn test_top_with_order_by_ok() {
    let violations = rule_ids("SELECT TOP 10 * FROM T ORDER BY Id");
    assert!(violations.contains(&"SQL001".to_string()));
    assert!(!violations.contains(&"SQL041".to_string()));
}

#[test]
fn test_top_parenthesized_form() {
    let violations = rule_ids("SELECT TOP(5) * FROM T");
    assert!(violations.contains(&"SQL001".to_string()));
    assert!(violations.contains(&"SQL041".to_string()));
}

#[test]
fn test_delete_without_where() {
    let report = analyze("DELETE FROM Users");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].rule_id, "SQL020");
    assert_eq!(report.issues[0].severity, Severity::Error);
}

#[test]
fn test_delete_with_where_ok() {
    let violations = rule_ids("DELETE FROM Users WHERE Id = 1");
    assert!(!violations.contains(&"SQL020".to_string()));
}

#[test]
fn test_update_without_where() {
    let violations = rule_ids("UPDATE Users SET Active = 0");
    assert_eq!(violations, ["SQL021"]);
}

#[test]
fn test_update_with_where_ok() {
    let violations = rule_ids("UPDATE Users SET Active = 0 WHERE Id = 1");
    assert!(!violations.contains(&"SQL021".to_string()));
}

#[test]
fn test_drop_table_is_error() {
    let report = analyze("DROP TABLE Users");
    assert_eq!(report.issues[0].rule_id, "SQL010");
    assert_eq!(report.issues[0].severity, Severity::Error);
}

#[test]
fn test_truncate_table_is_error() {
    let report = analyze("TRUNCATE TABLE Logs");
    assert_eq!(report.issues[0].rule_id, "SQL010");
    assert_eq!(report.issues[0].severity, Severity::Error);
}

#[test]
fn test_alter_drop_column_is_warning() {
    let report = analyze("ALTER TABLE Users DROP COLUMN Email");
    assert_eq!(report.issues[0].rule_id, "SQL010");
    assert_eq!(report.issues[0].severity, Severity::Warning);
}

#[test]
fn test_cross_join_detected_with_span() {
    let report = analyze("SELECT Id FROM A CROSS JOIN B");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].rule_id, "SQL030");
    assert!(report.issues[0].span.is_some());
}

#[test]
fn test_comma_join_and_cartesian_risk() {
    let violations = rule_ids("SELECT a FROM T1, T2");
    assert_eq!(violations, ["SQL031", "SQL044"]);
}

#[test]
fn test_comma_join_with_where_has_no_cartesian_risk() {
    let violations = rule_ids("SELECT a FROM T1, T2 WHERE T1.Id = T2.Id");
    assert!(violations.contains(&"SQL031".to_string()));
    assert!(!violations.contains(&"SQL044".to_string()));
}

#[test]
fn test_nolock_with_wrapper() {
    let violations = rule_ids("SELECT Id FROM Users WITH (NOLOCK)");
    assert_eq!(violations, ["SQL040"]);
}

#[test]
fn test_nolock_bare_form() {
    let violations = rule_ids("SELECT Id FROM Users (NOLOCK)");
    assert!(violations.contains(&"SQL040".to_string()));
}

#[test]
fn test_select_into_without_columns() {
    let violations = rule_ids("SELECT * INTO Backup FROM Users");
    assert_eq!(violations, ["SQL001", "SQL042"]);
}

#[test]
fn test_join_missing_on() {
    let report = analyze("SELECT a FROM T1 INNER JOIN T2");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].rule_id, "SQL043");
    assert_eq!(report.issues[0].severity, Severity::Error);
}

#[test]
fn test_join_with_on_ok() {
    let violations = rule_ids("SELECT a FROM T1 INNER JOIN T2 ON T1.Id = T2.Id");
    assert!(violations.is_empty());
}

#[test]
fn test_join_missing_on_reported_once() {
    let violations = rule_ids("SELECT a FROM T1 JOIN T2 JOIN T3");
    let count = violations.iter().filter(|id| *id == "SQL043").count();
    assert_eq!(count, 1);
}

#[test]
fn test_cross_join_does_not_require_on() {
    let violations = rule_ids("SELECT Id FROM A CROSS JOIN B");
    assert!(!violations.contains(&"SQL043".to_string()));
}

#[test]
fn test_statement_indexes_follow_segmentation_order() {
    let report = analyze("SELECT * FROM A; DELETE FROM B");
    let indexes: Vec<Option<usize>> = report
        .issues
        .iter()
        .map(|issue| issue.statement_index)
        .collect();
    assert_eq!(indexes, [Some(0), Some(1)]);
    assert!(indexes.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_reanalysis_is_stable() {
    let sql = "SELECT * FROM A; SELECT b FROM T1, T2; DELETE FROM C";
    assert_eq!(rule_ids(sql), rule_ids(sql));
}

#[test]
fn test_go_batches_are_separate_statements() {
    let report = analyze("SELECT * FROM A\nGO\nSELECT * FROM B");
    assert_eq!(report.statements_count, 2);
    assert_eq!(report.issues[0].statement_index, Some(0));
    assert_eq!(report.issues[1].statement_index, Some(1));
}

#[test]
fn test_empty_input_yields_empty_report() {
    let report = analyze("");
    assert!(report.issues.is_empty());
    assert_eq!(report.statements_count, 0);
    assert!(!report.has_errors());
}

#[test]
fn test_comment_only_input_yields_no_issues() {
    let report = analyze("-- just a comment");
    assert!(report.issues.is_empty());
}

#[test]
fn test_disabled_rule_is_skipped() {
    let config = RulesConfig {
        disabled: vec!["SQL001".to_string()],
        ..Default::default()
    };
    let violations = rule_ids_with("SELECT * FROM Users", config);
    assert!(violations.is_empty());
}

#[test]
fn test_disabling_one_rule_leaves_others_unchanged() {
    let config = RulesConfig {
        disabled: vec!["SQL031".to_string()],
        ..Default::default()
    };
    let violations = rule_ids_with("SELECT a FROM T1, T2", config);
    assert_eq!(violations, ["SQL044"]);
}

#[test]
fn test_severity_override_promotes_rule() {
    let mut severity = IndexMap::new();
    severity.insert("SQL001".to_string(), "error".to_string());
    let config = RulesConfig {
        disabled: vec![],
        severity
    };

    let statements = split_statements(&normalize("SELECT * FROM Users"));
    let report = RuleRunner::with_config(config).analyze(&statements);
    assert_eq!(report.issues[0].severity, Severity::Error);
    assert!(report.has_errors());
}

#[test]
fn test_unknown_severity_override_is_ignored() {
    let mut severity = IndexMap::new();
    severity.insert("SQL001".to_string(), "critical".to_string());
    let config = RulesConfig {
        disabled: vec![],
        severity
    };

    let statements = split_statements(&normalize("SELECT * FROM Users"));
    let report = RuleRunner::with_config(config).analyze(&statements);
    assert_eq!(report.issues[0].severity, Severity::Warning);
}
