// fastformat-core/src/lib.rs
//! # FastFormat Core Library
//!
//! `fastformat-core` provides the fundamental, host-independent logic for
//! rewriting ASCII shorthand markup (`*bold*`, `_italic_`, `` `red` ``,
//! `[gray-italic]`, ...) into equivalent HTML spans. It defines the core
//! data structures for rewrite rules, compiles them into an ordered
//! cascade, and implements a pluggable `FormatEngine` trait for applying
//! the cascade to text.
//!
//! The library is designed to be pure and stateless: given the same text
//! and rule set it always produces the same output, engines are read-only
//! after construction, and no invocation mutates shared state.
//!
//! ## Modules
//!
//! * `config`: Defines `FormatRule`s and `FormatConfig`, plus loading and
//!   merging of rule configurations.
//! * `rules`: Compiles the ordered rule list into ready-to-apply regexes.
//! * `engine`: Defines the `FormatEngine` trait and per-call result types.
//! * `engines`: Contains concrete implementations of the `FormatEngine`
//!   trait.
//! * `headless`: Convenience wrapper for one-shot, non-interactive use.
//! * `errors`: The library's structured error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use fastformat_core::{headless_format_string, FormatConfig};
//!
//! let config = FormatConfig::load_default_rules().expect("embedded rules parse");
//! let html = headless_format_string(config, "*bold* and _italic_");
//! assert_eq!(html, "<b>bold</b> and <i>italic</i>");
//! ```
//!
//! ## Error Handling
//!
//! Configuration loading uses `anyhow::Error`; the transformation entry
//! points never fail. A rule that does not compile is dropped, and a rule
//! that cannot be applied is skipped with its reason reported in the
//! per-call [`RuleOutcome`] list, so a misconfigured rule degrades to
//! visible leftover shorthand rather than breaking rendering.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `FormatEngine` trait allows different
//!   protection policies or matching strategies to be swapped out.
//! * **Stateless:** No global caches; compiled rules are a caller-owned
//!   immutable value.
//! * **Order-preserving:** Rule order is preserved from configuration
//!   through compilation through application.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;

/// Re-exports the public configuration types and functions.
pub use config::{merge_rules, FormatConfig, FormatRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FastformatError;

/// Re-exports types related to the core formatting engine trait.
pub use engine::{FormatEngine, FormatOutput, RuleOutcome, RuleStatus};

/// Re-exports the concrete `CascadeEngine` implementation.
pub use engines::cascade_engine::CascadeEngine;

/// Re-exports the one-shot convenience wrapper.
pub use headless::headless_format_string;

/// Re-exports key types from the rule compiler for advanced usage.
pub use rules::compiler::{compile_rules, CompiledRule, CompiledRules};
