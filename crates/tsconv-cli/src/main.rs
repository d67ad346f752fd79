//! tsconv CLI tool.
//!
//! Usage:
//! ```bash
//! tsconv                      # check the current directory
//! tsconv check [OPTIONS] [PATH]
//! tsconv list-rules
//! tsconv init
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_file;

/// Report file written when no `--output` is given.
pub const DEFAULT_REPORT: &str = "convention_report.md";

/// TypeScript convention checker
#[derive(Parser)]
#[command(name = "tsconv")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run convention checks and write the report (default)
    Check(CheckArgs),

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Options for a check run.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Project root to check (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report file (default: convention_report.md, or .json with --format json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
    pub format: ReportFormat,

    /// Skip the external linter (ESLint)
    #[arg(long)]
    pub no_external: bool,
}

/// Report format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Markdown grouped by file.
    #[default]
    Markdown,
    /// Full result as JSON.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Check(args)) => commands::check::run(&args, cli.config.as_deref()),
        None => commands::check::run(&cli.check, cli.config.as_deref()),
        Some(Commands::ListRules) => {
            commands::list_rules::run();
            Ok(())
        }
        Some(Commands::Init { force }) => commands::init::run(force),
    }
}
