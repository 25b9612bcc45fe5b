// fastformat/src/commands/stats.rs
//! Stats command implementation: analysis without rewriting.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use fastformat_core::engine::FormatEngine;

use crate::ui::summary;

/// Options for the `stats` subcommand.
pub struct StatsOptions {
    pub input: String,
    pub json_stdout: bool,
    pub json_file: Option<PathBuf>,
}

/// Analyzes the input and reports per-rule outcomes, optionally as JSON.
pub fn run_stats_opts(engine: &dyn FormatEngine, opts: StatsOptions) -> Result<()> {
    info!("Starting stats operation.");
    let outcomes = engine.analyze(&opts.input);

    if opts.json_stdout {
        let json =
            serde_json::to_string_pretty(&outcomes).context("Failed to serialize rule outcomes")?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(path) = &opts.json_file {
        let json =
            serde_json::to_string_pretty(&outcomes).context("Failed to serialize rule outcomes")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
        info!("Rule outcomes written to {}", path.display());
        return Ok(());
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    summary::print_summary(&outcomes, &mut writer, supports_color)?;
    writer.flush()?;
    Ok(())
}
