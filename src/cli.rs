use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Review - heuristic analysis and canonical formatting for SQL text
#[derive(Parser, Debug)]
#[command(name = "sql-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze SQL text for quality and safety issues
    Analyze {
        /// Path to SQL file (use - for stdin)
        input: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long, env = "NO_COLOR")]
        no_color: bool,

        /// Include the segmented statements in the report
        #[arg(short, long)]
        verbose: bool
    },

    /// Re-emit SQL text in canonical formatted form
    Format {
        /// Path to SQL file (use - for stdin)
        input: PathBuf
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
