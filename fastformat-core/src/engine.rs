// fastformat-core/src/engine.rs
//! Defines the core FormatEngine trait and per-call result types.
//!
//! The `FormatEngine` trait decouples hosts, the CLI, and tests from the
//! concrete substitution engine, so the seam stays the same whichever
//! protection policy an engine applies.

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::rules::compiler::CompiledRules;

/// The outcome of one rule over one `format` call.
///
/// Degradation is a value, not an exception: a rule that cannot be applied
/// is reported as `Skipped` with its reason, so tests can assert exactly
/// which rules were inert for a given call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    /// The rule ran; `occurrences` matches were rewritten.
    Applied { occurrences: usize },
    /// The rule left the text untouched for this call.
    Skipped { reason: String },
}

/// Per-rule report entry for a single `format` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_name: String,
    pub status: RuleStatus,
}

/// The result of a single `format` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOutput {
    /// The rewritten text.
    pub text: String,
    /// One entry per rule that matched or was skipped, in cascade order.
    pub outcomes: Vec<RuleOutcome>,
}

/// A trait that defines the core functionality of a formatting engine.
///
/// Engines are read-only after construction; every method is a pure
/// function of the input text, so concurrent calls need no coordination.
pub trait FormatEngine: Send + Sync {
    /// Applies the full rule cascade to `text`.
    ///
    /// Never fails: a rule that cannot be applied is reported in the
    /// outcomes and the cascade continues. The worst case leaves the
    /// original shorthand characters in place.
    fn format(&self, text: &str) -> FormatOutput;

    /// Like [`format`](Self::format), but returns `text` untouched when
    /// `category` is excluded by the configuration.
    fn format_card(&self, text: &str, category: &str) -> FormatOutput;

    /// Reports which rules would fire on `text` without returning the
    /// rewritten content.
    fn analyze(&self, text: &str) -> Vec<RuleOutcome>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &FormatConfig;
}
