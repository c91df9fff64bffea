use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rcrd-scan")]
#[command(author, version, about = "Record copy scanner - find recently touched archive directories")]
#[command(long_about = "Scans a project share for record copy archive directories and reports\n\
    the ones containing recent file activity.\n\n\
    Exit codes:\n  \
    0 - Scan completed (warnings included)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
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
    /// Scan the share for recently touched record copy directories
    Scan(ScanArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),

    /// Subtract reference rows from a CSV report
    Diff(DiffArgs),

    /// Build a synthetic project tree for trial runs
    Fixture(FixtureArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Share root containing the office directories (overrides config)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Offices to scan (comma-separated, e.g., SSC,GLC)
    #[arg(long = "office", value_delimiter = ',')]
    pub offices: Vec<String>,

    /// Disciplines to probe per project (comma-separated, e.g., CVL,STR)
    #[arg(long = "discipline", value_delimiter = ',')]
    pub disciplines: Vec<String>,

    /// Recency window in days (overrides config)
    #[arg(long)]
    pub days: Option<u64>,

    /// Archive directory name (overrides config)
    #[arg(long)]
    pub archive_dir: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json, csv]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the report as JSON to this path
    #[arg(long)]
    pub write_json: Option<PathBuf>,

    /// Also write the report as CSV to this path
    #[arg(long)]
    pub write_csv: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".rcrd-scan.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file (default: .rcrd-scan.toml)
        #[arg(short, long, default_value = ".rcrd-scan.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// CSV report produced by `scan --format csv`
    #[arg(long)]
    pub report: PathBuf,

    /// Reference CSV whose path column marks already-handled rows
    #[arg(long)]
    pub reference: PathBuf,

    /// Write surviving rows to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FixtureArgs {
    /// Directory to build the tree in
    #[arg(long, default_value = "test_dirs")]
    pub root: PathBuf,

    /// Office directories to create (comma-separated)
    #[arg(long = "office", value_delimiter = ',', default_value = "SSC,GLC,SYD")]
    pub offices: Vec<String>,

    /// Discipline folders to create per archive (comma-separated)
    #[arg(long = "discipline", value_delimiter = ',', default_value = "CVL,STR,ARC")]
    pub disciplines: Vec<String>,

    /// Delete the root before building (refused unless it is named test_dirs)
    #[arg(long)]
    pub wipe: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
