// fastformat/src/main.rs
//! FastFormat CLI entry point.
//!
//! Loads and merges the rule configuration, builds the cascade engine, and
//! dispatches to the requested subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use fastformat::cli::{Cli, Commands};
use fastformat::commands::{format, rules, stats};
use fastformat::logger;
use fastformat_core::{merge_rules, CascadeEngine, FormatConfig};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Format(cmd) => {
            let mut config = load_config(cmd.config.as_deref(), cmd.no_defaults)?;
            if cmd.no_protect_tags {
                config.protect_tags = false;
            }
            if cmd.no_protect_media {
                config.protect_media = false;
            }
            let engine = CascadeEngine::new(config);
            let input = read_input(cmd.input_file.as_deref())?;
            format::run_format_opts(
                &engine,
                format::FormatOptions {
                    input,
                    output_path: cmd.output,
                    category: cmd.category,
                    no_summary: cmd.no_summary,
                    quiet: args.quiet,
                },
            )
        }
        Commands::Stats(cmd) => {
            let config = load_config(cmd.config.as_deref(), cmd.no_defaults)?;
            let engine = CascadeEngine::new(config);
            let input = read_input(cmd.input_file.as_deref())?;
            stats::run_stats_opts(
                &engine,
                stats::StatsOptions {
                    input,
                    json_stdout: cmd.json_stdout,
                    json_file: cmd.json_file,
                },
            )
        }
        Commands::Rules(cmd) => {
            let config = load_config(cmd.config.as_deref(), cmd.no_defaults)?;
            let engine = CascadeEngine::new(config);
            rules::run_rules(&engine)
        }
    }
}

/// Loads the user configuration (if any) and merges in the built-in rules.
fn load_config(path: Option<&Path>, no_defaults: bool) -> Result<FormatConfig> {
    let mut user = match path {
        Some(path) => FormatConfig::load_from_file(path)
            .with_context(|| format!("Failed to load rule configuration from {}", path.display()))?,
        None => FormatConfig::default(),
    };
    if no_defaults {
        user.include_defaults = false;
    }
    let defaults = FormatConfig::load_default_rules()?;
    Ok(merge_rules(user, defaults))
}

/// Reads the input text from a file or stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
