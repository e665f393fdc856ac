//! # SQL Review
//!
//! Heuristic quality/safety analysis and canonical formatting for raw SQL.
//!
//! `sql-review` inspects SQL text before it runs anywhere: it reports
//! heuristic quality and safety issues and re-emits a canonically
//! formatted version of the same text. It does not parse SQL into a
//! grammar-validated AST; detection works on text through pattern
//! recognition and a lightweight lexical scanner that understands only
//! quoting, escaping and parenthesis nesting.
//!
//! # Architecture
//!
//! Two independent paths share no mutable state:
//!
//! 1. **Analysis** - raw text is normalized (comments stripped, whitespace
//!    collapsed), segmented into statements on `GO`/`;` boundaries, and
//!    every built-in rule runs over each statement in parallel using
//!    [`rayon`].
//!
//! 2. **Formatting** - each statement is re-rendered with masked
//!    literals, uppercase core keywords, clause line breaks and an
//!    indentation state machine, then the literals are restored.
//!
//! # Quick Start
//!
//! ```bash
//! # Analyze a file
//! sql-review analyze queries.sql
//!
//! # Stream from stdin, machine-readable output
//! echo "SELECT * FROM users" | sql-review analyze - -f json
//!
//! # Canonical formatting
//! sql-review format queries.sql
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. `.sql-review.toml` in current directory
//! 3. `~/.config/sql-review/config.toml`
//!
//! ## Example Configuration
//!
//! ```toml
//! [rules]
//! # Disable specific rules by ID
//! disabled = ["SQL001"]
//!
//! # Override default severity levels
//! [rules.severity]
//! SQL040 = "error"   # Promote to error
//! SQL042 = "info"    # Demote to info
//! ```
//!
//! # Rules
//!
//! | ID | Name | Severity | Description |
//! |----|------|----------|-------------|
//! | SQL001 | SELECT * usage | Warning | Explicit column list preferred |
//! | SQL010 | Destructive statement | Error | DROP/TRUNCATE/ALTER ... DROP detected |
//! | SQL020 | DELETE without WHERE | Error | Unbounded delete removes all rows |
//! | SQL021 | UPDATE without WHERE | Error | Unbounded update affects all rows |
//! | SQL030 | Explicit CROSS JOIN | Warning | Cartesian product requested |
//! | SQL031 | Implicit comma join | Warning | Comma-separated FROM tables |
//! | SQL040 | NOLOCK hint | Warning | Dirty reads possible |
//! | SQL041 | TOP without ORDER BY | Warning | Arbitrary row subset |
//! | SQL042 | SELECT INTO without column list | Warning | Implicit target shape |
//! | SQL043 | JOIN missing ON | Error | Join without condition |
//! | SQL044 | Cartesian product risk | Warning | Multiple tables, no WHERE/ON |
//!
//! # Exit Codes
//!
//! The process exit code reflects the highest severity issue found:
//!
//! - `0` - Success, no issues or only informational messages
//! - `1` - Warnings found
//! - `2` - Errors found
//!
//! # Output Formats
//!
//! - `text` - Human-readable colored output (default)
//! - `json` - Structured JSON for programmatic processing
//! - `yaml` - YAML format for configuration management
//!
//! # Modules
//!
//! - [`rules`] - Static analysis rule engine and built-in rules
//! - [`scan`] - Quote- and paren-aware scanning primitives
//! - [`normalize`] - Comment stripping and whitespace collapse
//! - [`segment`] - GO/semicolon statement segmentation
//! - [`formatter`] - Canonical SQL formatting
//! - [`config`] - Configuration loading and validation
//! - [`output`] - Result formatting for various output formats
//! - [`error`] - Error types and constructors

mod cli;
mod config;
mod error;
mod formatter;
mod normalize;
mod output;
mod rules;
mod scan;
mod segment;

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::Path,
    process
};

use clap::Parser;

use crate::{
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, empty_input_error, file_read_error},
    output::{OutputFormat, OutputOptions, format_report},
    rules::RuleRunner,
    segment::split_statements
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output_format,
            no_color,
            verbose
        } => {
            let config = Config::load()?;
            let sql = read_input(&input)?;
            if sql.trim().is_empty() {
                return Err(empty_input_error());
            }

            let statements = split_statements(&normalize::normalize(&sql));
            let runner = RuleRunner::with_config(config.rules);
            let report = runner.analyze(&statements);

            let output_opts = OutputOptions {
                format: match output_format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml
                },
                colored: !no_color,
                verbose
            };

            println!("{}", format_report(&report, &statements, &output_opts));

            // Exit code reflects the highest severity found
            let exit_code = if report.has_errors() {
                2
            } else if report.warning_count() > 0 {
                1
            } else {
                0
            };
            Ok(exit_code)
        }
        Commands::Format {
            input
        } => {
            let sql = read_input(&input)?;
            if sql.trim().is_empty() {
                return Err(empty_input_error());
            }
            println!("{}", formatter::format(&sql));
            Ok(0)
        }
    }
}

/// Read SQL from a file path, or stdin when the path is `-`.
fn read_input(path: &Path) -> AppResult<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))
    }
}
