// fastformat/src/commands/rules.rs
//! Rules command implementation: lists the active rule set.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use fastformat_core::engine::FormatEngine;

/// Prints the compiled rule set in application order, one rule per line.
pub fn run_rules(engine: &dyn FormatEngine) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    for rule in &engine.compiled_rules().rules {
        if supports_color {
            writeln!(writer, "{}  {}", rule.name.bold(), rule.regex.as_str())?;
        } else {
            writeln!(writer, "{}  {}", rule.name, rule.regex.as_str())?;
        }
    }
    Ok(())
}
