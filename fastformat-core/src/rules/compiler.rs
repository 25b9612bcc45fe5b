//! compiler.rs - Compiles format rules into ready-to-apply regexes.
//!
//! The compiler turns a `Vec<FormatRule>` into `CompiledRules`, preserving
//! input order exactly among surviving entries. There is no global cache:
//! compiled rules are an explicit, caller-owned value, and recompiling after
//! a configuration edit is cheap and idempotent.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::config::{FormatRule, MAX_PATTERN_LENGTH};
use crate::errors::FastformatError;

/// Represents a single compiled rewrite rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The replacement template; `$N` references are expanded per match.
    pub replacement: String,
    /// The unique name of the rule.
    pub name: String,
    /// Explicit enable/disable override carried from the configuration.
    pub enabled: Option<bool>,
}

/// Represents the ordered collection of compiled rules for one engine.
#[derive(Debug)]
pub struct CompiledRules {
    /// A vector of `CompiledRule` instances in application order.
    pub rules: Vec<CompiledRule>,
}

/// Compiles `rules_to_compile` in order, dropping entries that fail.
///
/// Dropping is deliberate: one malformed user-authored pattern must not take
/// down the whole cascade. The dropped rule is reported via `warn!` and the
/// remaining entries still compile.
pub fn compile_rules(rules_to_compile: Vec<FormatRule>) -> CompiledRules {
    debug!("Starting compilation of {} rule(s).", rules_to_compile.len());

    let mut compiled = Vec::new();
    for rule in rules_to_compile {
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            warn!(
                "Dropping rule: {}",
                FastformatError::PatternLengthExceeded(
                    rule.name,
                    rule.pattern.len(),
                    MAX_PATTERN_LENGTH
                )
            );
            continue;
        }

        let regex_result = RegexBuilder::new(&rule.pattern)
            .multi_line(rule.multiline)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                debug!("Rule '{}' compiled successfully.", &rule.name);
                compiled.push(CompiledRule {
                    regex,
                    replacement: rule.replacement,
                    name: rule.name,
                    enabled: rule.enabled,
                });
            }
            Err(e) => {
                warn!(
                    "Dropping rule: {}",
                    FastformatError::RuleCompilationError(rule.name, e)
                );
            }
        }
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
    CompiledRules { rules: compiled }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, pattern: &str, replacement: &str) -> FormatRule {
        FormatRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            ..FormatRule::default()
        }
    }

    #[test]
    fn malformed_pattern_is_dropped_without_aborting() {
        let compiled = compile_rules(vec![
            rule("broken", "(unterminated", "x"),
            rule("ok", "ok", "z"),
        ]);
        assert_eq!(compiled.rules.len(), 1);
        assert_eq!(compiled.rules[0].name, "ok");
    }

    #[test]
    fn surviving_rules_keep_input_order() {
        let compiled = compile_rules(vec![
            rule("first", "a", "1"),
            rule("bad", "[", "?"),
            rule("second", "b", "2"),
            rule("third", "c", "3"),
        ]);
        let names: Vec<&str> = compiled.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn oversized_pattern_is_dropped() {
        let huge = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let compiled = compile_rules(vec![rule("huge", &huge, "x")]);
        assert!(compiled.rules.is_empty());
    }

    #[test]
    fn dot_matches_newline_by_default() {
        let compiled = compile_rules(vec![rule("dotall", "a.b", "x")]);
        assert!(compiled.rules[0].regex.is_match("a\nb"));
    }
}
