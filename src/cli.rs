use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::registry::ThemeMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "literal-guard")]
#[command(
    author,
    version,
    about = "Flag suspicious literals: YAML 1.1 legacy values and hardcoded design values"
)]
#[command(long_about = "Scans text line by line for literals that are legal but suspicious.\n\n\
    Exit codes:\n  \
    0 - No blocking issues\n  \
    1 - Blocking issues found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the report on stdout and the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse YAML files and report YAML 1.1 values whose meaning changed in 1.2
    Yaml(YamlArgs),

    /// Audit UI sources for hardcoded colors, spacing and border radii
    Audit(AuditArgs),
}

#[derive(Parser, Debug)]
pub struct YamlArgs {
    /// YAML files to check; directories are searched for YAML extensions
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// File or directory to audit
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Design-token JSON document extending the allowed values
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Only accept token colors of this theme mode [possible values: light, dark]
    #[arg(long)]
    pub mode: Option<ThemeMode>,

    /// File extensions to audit (comma-separated, e.g., tsx,css)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Entries listed per category before the rest are summarized
    #[arg(long)]
    pub max_listed: Option<usize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
