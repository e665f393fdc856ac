use colored::Colorize;

use crate::rules::{AnalysisReport, Issue, Severity};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Format an analysis report based on output options.
///
/// `statements` is the segmented input the report was produced from; it is
/// only rendered in verbose text mode.
pub fn format_report(
    report: &AnalysisReport,
    statements: &[String],
    opts: &OutputOptions
) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(report).unwrap_or_default(),
        OutputFormat::Text => format_text_report(report, statements, opts)
    }
}

fn format_text_report(
    report: &AnalysisReport,
    statements: &[String],
    opts: &OutputOptions
) -> String {
    let mut output = String::new();

    if opts.colored {
        output.push_str(&"=== SQL Review ===\n\n".bold().to_string());
    } else {
        output.push_str("=== SQL Review ===\n\n");
    }

    if report.issues.is_empty() {
        let line = "No issues found.";
        if opts.colored {
            output.push_str(&line.green().to_string());
        } else {
            output.push_str(line);
        }
        output.push('\n');
    } else {
        for issue in &report.issues {
            output.push_str(&format_issue(issue, opts));
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "\n{} statement(s), {} rule(s): {} error(s), {} warning(s), {} info\n",
        report.statements_count,
        report.rules_count,
        report.error_count(),
        report.warning_count(),
        report.info_count()
    ));

    if opts.verbose && !statements.is_empty() {
        output.push_str("\nStatements:\n");
        for (index, statement) in statements.iter().enumerate() {
            output.push_str(&format!("  [{}] {}\n", index, statement));
        }
    }

    output
}

fn format_issue(issue: &Issue, opts: &OutputOptions) -> String {
    let severity = if opts.colored {
        match issue.severity {
            Severity::Error => issue.severity.to_string().red().bold().to_string(),
            Severity::Warning => issue.severity.to_string().yellow().to_string(),
            Severity::Info => issue.severity.to_string().cyan().to_string()
        }
    } else {
        issue.severity.to_string()
    };

    let mut line = format!("{} [{}] {}", severity, issue.rule_id, issue.message);
    if let Some(index) = issue.statement_index {
        line.push_str(&format!(" (statement {})", index));
    }
    if let Some(span) = issue.span {
        line.push_str(&format!(" [{}..{}]", span.start, span.start + span.length));
    }
    if let Some(suggestion) = &issue.suggestion {
        line.push_str(&format!("\n    suggestion: {}", suggestion));
    }
    line
}
