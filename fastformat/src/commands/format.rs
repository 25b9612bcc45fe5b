// fastformat/src/commands/format.rs
//! Format command implementation: the main rewrite path of the CLI.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use fastformat_core::engine::FormatEngine;

use crate::ui::summary;

/// Options for the ergonomic `run_format_opts` API.
pub struct FormatOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub category: Option<String>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// The main operation runner for the `format` subcommand.
pub fn run_format_opts(engine: &dyn FormatEngine, opts: FormatOptions) -> Result<()> {
    info!("Starting format operation.");

    let output = match &opts.category {
        Some(category) => engine.format_card(&opts.input, category),
        None => engine.format(&opts.input),
    };

    debug!(
        "Content formatted. Original length: {}, formatted length: {}",
        opts.input.len(),
        output.text.len()
    );

    if let Some(path) = &opts.output_path {
        info!("Writing formatted content to file: {}", path.display());
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", output.text)?;
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", output.text)?;
    }

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(&output.outcomes, &mut io::stderr(), stderr_supports_color)?;
    }

    info!("Format operation completed.");
    Ok(())
}
