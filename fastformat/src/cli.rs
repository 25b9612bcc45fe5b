// fastformat/src/cli.rs
//! This file defines the command-line interface (CLI) for the fastformat
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fastformat",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite ASCII shorthand markup into HTML spans",
    long_about = "Fastformat rewrites a small set of ASCII shorthand conventions (*bold*, _italic_, `red`, [gray-italic], ...) into equivalent HTML spans, leaving existing markup tags untouched and honoring backslash-escaped literal delimiters. Rules are an ordered, user-configurable cascade of regular-expression substitutions; the built-in set can be extended or replaced from a YAML file.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fastformat` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Formats an input file or stdin, rewriting shorthand into HTML.
    #[command(about = "Formats an input file or stdin, rewriting shorthand into HTML.")]
    Format(FormatCommand),

    /// Reports which rules would fire on the input, without rewriting it.
    #[command(about = "Reports which rules would fire on the input, without rewriting it.")]
    Stats(StatsCommand),

    /// Lists the active rule set in application order.
    #[command(about = "Lists the active rule set in application order.")]
    Rules(RulesCommand),
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write formatted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Do not append the built-in rule set after custom rules.
    #[arg(long = "no-defaults", help = "Do not append the built-in rule set after custom rules.")]
    pub no_defaults: bool,

    /// Card category of the input; excluded categories pass through unchanged.
    #[arg(long = "category", value_name = "NAME", help = "Card category of the input; excluded categories pass through unchanged.")]
    pub category: Option<String>,

    /// Let rules match inside and across structural markup tags.
    #[arg(long = "no-protect-tags", help = "Let rules match inside and across structural markup tags.")]
    pub no_protect_tags: bool,

    /// Do not shield media reference tags from the rule cascade.
    #[arg(long = "no-protect-media", help = "Do not shield media reference tags from the rule cascade.")]
    pub no_protect_media: bool,

    /// Suppress the per-rule summary.
    #[arg(long = "no-summary", help = "Suppress the per-rule summary.")]
    pub no_summary: bool,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Do not append the built-in rule set after custom rules.
    #[arg(long = "no-defaults", help = "Do not append the built-in rule set after custom rules.")]
    pub no_defaults: bool,

    /// Export rule outcomes to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the rule outcomes to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print rule outcomes as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the rule outcomes to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Do not append the built-in rule set after custom rules.
    #[arg(long = "no-defaults", help = "Do not append the built-in rule set after custom rules.")]
    pub no_defaults: bool,
}
