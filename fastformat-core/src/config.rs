//! Configuration management for `fastformat-core`.
//!
//! This module defines the core data structures for format rules and engine
//! configuration. It handles serialization/deserialization of YAML
//! configurations and provides utilities for loading and merging them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single shorthand rewrite rule.
///
/// A rule's position in its containing list is semantically significant:
/// earlier rules run first and their output is the input to later rules.
/// That ordering is what lets an unescape rule (`\*` to `*`) fire only on
/// delimiters its span rule left behind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatRule {
    /// Unique identifier for the rule (e.g., "asterisk_bold").
    pub name: String,
    /// Human-readable description of the shorthand.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// The replacement template; `$1`, `$2`, ... reference capture groups.
    pub replacement: String,
    /// If true, `^` and `$` also match at line boundaries.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    /// Card text is handled as one logical string, so this defaults to true.
    pub dot_matches_new_line: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for FormatRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replacement: String::new(),
            multiline: false,
            dot_matches_new_line: true,
            enabled: None,
        }
    }
}

/// Represents the complete, explicitly enumerated engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatConfig {
    /// The ordered list of rewrite rules.
    pub rules: Vec<FormatRule>,
    /// Whether the built-in rule set is appended after `rules`.
    pub include_defaults: bool,
    /// Card categories for which formatting is skipped entirely.
    pub excluded_categories: HashSet<String>,
    /// Keep rules out of structural markup tags (`<...>`).
    pub protect_tags: bool,
    /// Vault media reference tags so no rule can touch their paths.
    pub protect_media: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            include_defaults: true,
            excluded_categories: HashSet::new(),
            protect_tags: true,
            protect_media: true,
        }
    }
}

impl FormatConfig {
    /// Loads a rule configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FormatConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded {} rule(s) from file {}.", config.rules.len(), path.display());
        Ok(config)
    }

    /// Loads the built-in rule set from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: FormatConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rule(s).", config.rules.len());
        Ok(config)
    }
}

/// Merges the built-in rule set into a user configuration.
///
/// User rules keep their position ahead of the defaults, so they are applied
/// first; with `include_defaults` off the built-ins are dropped entirely. A
/// default rule whose name is already taken by a user rule is not appended.
pub fn merge_rules(user: FormatConfig, defaults: FormatConfig) -> FormatConfig {
    let mut merged = user;
    if !merged.include_defaults {
        debug!(
            "include_defaults is off; keeping {} user rule(s) only.",
            merged.rules.len()
        );
        return merged;
    }

    let shadowed: HashSet<String> = merged.rules.iter().map(|r| r.name.clone()).collect();
    for rule in defaults.rules {
        if shadowed.contains(&rule.name) {
            debug!("Default rule '{}' is shadowed by a user rule.", rule.name);
            continue;
        }
        merged.rules.push(rule);
    }

    debug!("Final total rules after merge: {}", merged.rules.len());
    merged
}
