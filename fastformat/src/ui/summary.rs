// fastformat/src/ui/summary.rs
//! Renders the per-rule outcome summary.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use fastformat_core::engine::{RuleOutcome, RuleStatus};

/// Prints one line per rule outcome, in cascade order.
///
/// Colors are applied only when the destination reported itself as a
/// terminal; callers decide that, since `writer` may be a file or a pipe.
pub fn print_summary<W: Write>(
    outcomes: &[RuleOutcome],
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    if outcomes.is_empty() {
        writeln!(writer, "No rules fired.")?;
        return Ok(());
    }

    writeln!(writer, "--- Formatting Summary ---")?;
    for outcome in outcomes {
        match &outcome.status {
            RuleStatus::Applied { occurrences } => {
                let noun = if *occurrences == 1 { "occurrence" } else { "occurrences" };
                if supports_color {
                    writeln!(
                        writer,
                        "{} ({} {})",
                        outcome.rule_name.green(),
                        occurrences,
                        noun
                    )?;
                } else {
                    writeln!(writer, "{} ({} {})", outcome.rule_name, occurrences, noun)?;
                }
            }
            RuleStatus::Skipped { reason } => {
                if supports_color {
                    writeln!(
                        writer,
                        "{} (skipped: {})",
                        outcome.rule_name.yellow(),
                        reason
                    )?;
                } else {
                    writeln!(writer, "{} (skipped: {})", outcome.rule_name, reason)?;
                }
            }
        }
    }
    writeln!(writer, "--------------------------")?;
    Ok(())
}
