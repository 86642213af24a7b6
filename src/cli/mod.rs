//! Command-line interface for glyphpick.
//!
//! Provides scriptable access to the symbol catalog alongside the TUI:
//! - `tui`: Launch the interactive picker (also the default)
//! - `search`: Filter the catalog from the command line
//! - `list`: List symbols or categories
//! - `copy`: Resolve one symbol and copy it to the clipboard
//! - `recent`: Show or clear the recently copied list
//! - `favorites`: Show or edit the favorites list
//! - `pick`: Fuzzy-select a symbol in the terminal and copy it

mod commands;

pub use commands::*;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Terminal symbol picker: search, copy, and pin special characters.
#[derive(Debug, Parser)]
#[command(name = "glyphpick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run (launches the TUI when omitted).
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a custom symbol catalog JSON file.
    #[arg(short = 'c', long, global = true, env = "GLYPHPICK_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to the recent/favorites state file.
    #[arg(long, global = true, env = "GLYPHPICK_STATE")]
    pub state: Option<PathBuf>,

    /// Output format for structured data.
    #[arg(short = 'o', long, global = true, default_value = "text", env = "GLYPHPICK_OUTPUT")]
    pub output: OutputFormat,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true, env = "GLYPHPICK_QUIET")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", env = "GLYPHPICK_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format (text, json, compact, pretty).
    #[arg(long, global = true, default_value = "text", env = "GLYPHPICK_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to custom configuration file.
    #[arg(long, global = true, env = "GLYPHPICK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter level.
    #[must_use]
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// Structured JSON format for machine consumption.
    Json,
    /// Compact single-line format.
    Compact,
    /// Pretty format with full details.
    Pretty,
}

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive picker TUI.
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Search the catalog.
    #[command(alias = "s", alias = "find")]
    Search(SearchArgs),

    /// List symbols or categories.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Copy one symbol to the clipboard.
    #[command(alias = "cp")]
    Copy(CopyArgs),

    /// Show or clear recently copied symbols.
    Recent(RecentArgs),

    /// Show or edit favorite symbols.
    #[command(alias = "fav")]
    Favorites(FavoritesArgs),

    /// Fuzzy-select a symbol and copy it.
    #[command(alias = "p")]
    Pick(PickArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the tui command.
#[derive(Debug, Clone, clap::Args)]
pub struct TuiArgs {
    /// Color theme (dark, light, high-contrast).
    #[arg(short = 't', long)]
    pub theme: Option<String>,
}

/// Arguments for the search command.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Query matched against names, aliases, and categories.
    pub query: String,

    /// Limit number of results.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the list command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Only list symbols in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// List category names instead of symbols.
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the copy command.
#[derive(Debug, Clone, clap::Args)]
pub struct CopyArgs {
    /// Glyph, name, or alias of the symbol to copy.
    pub query: String,
}

/// Arguments for the recent command.
#[derive(Debug, Clone, clap::Args)]
pub struct RecentArgs {
    /// Clear the recent list.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the favorites command.
#[derive(Debug, Clone, clap::Args)]
pub struct FavoritesArgs {
    /// Add a symbol (by glyph, name, or alias) to favorites.
    #[arg(short = 'a', long, value_name = "QUERY")]
    pub add: Option<String>,

    /// Remove a symbol from favorites.
    #[arg(short = 'r', long, value_name = "QUERY")]
    pub remove: Option<String>,

    /// Clear the favorites list.
    #[arg(long, conflicts_with_all = ["add", "remove"])]
    pub clear: bool,
}

/// Arguments for the pick command.
#[derive(Debug, Clone, clap::Args)]
pub struct PickArgs {
    /// Initial filter text.
    pub query: Option<String>,

    /// Print the symbol without copying it to the clipboard.
    #[arg(long)]
    pub no_copy: bool,
}

/// Arguments for the completions command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    Powershell,
    /// Elvish shell.
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completions and print to stdout.
pub fn generate_completions(shell: CompletionShell) {
    let mut cmd = Cli::command();
    let shell: Shell = shell.into();
    generate(shell, &mut cmd, "glyphpick", &mut io::stdout());
}

/// Initialize tracing/logging based on CLI options.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{
        fmt::{self, format::FmtSpan},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_string()));

    // Build subscriber based on log format
    let result = match cli.log_format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    match &cli.command {
        None => commands::tui::run(&cli, &config, &TuiArgs { theme: None }),
        Some(Commands::Tui(args)) => commands::tui::run(&cli, &config, args),
        Some(Commands::Search(args)) => commands::search::run(&cli, &config, args),
        Some(Commands::List(args)) => commands::list::run(&cli, &config, args),
        Some(Commands::Copy(args)) => commands::copy::run(&cli, &config, args),
        Some(Commands::Recent(args)) => commands::recent::run(&cli, &config, args),
        Some(Commands::Favorites(args)) => commands::favorites::run(&cli, &config, args),
        Some(Commands::Pick(args)) => commands::pick::run(&cli, &config, args),
        Some(Commands::Completions(args)) => {
            generate_completions(args.shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_format_variants() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
        assert!(matches!(LogFormat::Json, LogFormat::Json));
        assert!(matches!(LogFormat::Compact, LogFormat::Compact));
        assert!(matches!(LogFormat::Pretty, LogFormat::Pretty));
    }

    #[test]
    fn test_log_level_to_filter() {
        assert_eq!(LogLevel::Error.to_filter_string(), "error");
        assert_eq!(LogLevel::Warn.to_filter_string(), "warn");
        assert_eq!(LogLevel::Info.to_filter_string(), "info");
        assert_eq!(LogLevel::Debug.to_filter_string(), "debug");
        assert_eq!(LogLevel::Trace.to_filter_string(), "trace");
    }

    #[test]
    fn test_default_output_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
