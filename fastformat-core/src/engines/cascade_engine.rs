// fastformat-core/src/engines/cascade_engine.rs
//! A `FormatEngine` implementation that folds the rule list left to right
//! over the input, rewriting every non-overlapping match of each rule.
//!
//! Structural markup tags and media references are shielded from the
//! cascade before any rule runs and re-threaded into the result afterwards,
//! so no rule can corrupt a tag's attribute text or a media file path.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Captures, Regex};

use crate::config::FormatConfig;
use crate::engine::{FormatEngine, FormatOutput, RuleOutcome, RuleStatus};
use crate::errors::FastformatError;
use crate::rules::compiler::{compile_rules, CompiledRule, CompiledRules};

/// Marker for vaulted spans: U+FFFC OBJECT REPLACEMENT CHARACTER, a code
/// point that never carries content in card text.
const PLACEHOLDER_MARK: char = '\u{FFFC}';

lazy_static! {
    /// A complete structural markup tag. DOTALL, so attributes may span lines.
    static ref TAG_RE: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    /// Media reference tags whose bytes must survive the cascade untouched,
    /// plus any literal placeholder marker already present in the input.
    static ref MEDIA_RE: Regex =
        Regex::new(r"(?is)<(?:img|audio|source|object|embed)\b[^>]*>|\x{FFFC}").unwrap();
    /// A vault placeholder: marker, decimal index, marker.
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\x{FFFC}(\d+)\x{FFFC}").unwrap();
    /// `$N` capture group references in a replacement template.
    static ref GROUP_REF_RE: Regex = Regex::new(r"\$\{?(\d+)").unwrap();
}

/// Side list of protected spans, swapped for indexed placeholders while the
/// cascade runs and restored afterwards.
///
/// Literal U+FFFC characters in the input are vaulted too, so after the
/// protect pass every marker in the working text delimits a placeholder this
/// vault issued. Placeholders are assigned sequentially from 0 in order of
/// first appearance.
#[derive(Debug, Default)]
struct MediaVault {
    spans: Vec<String>,
}

impl MediaVault {
    fn protect(&mut self, text: &str) -> String {
        MEDIA_RE
            .replace_all(text, |caps: &Captures| {
                let index = self.spans.len();
                self.spans.push(caps[0].to_string());
                format!("{}{}{}", PLACEHOLDER_MARK, index, PLACEHOLDER_MARK)
            })
            .into_owned()
    }

    fn restore(&self, text: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.spans.get(index))
                    .cloned()
                    // An index the vault never issued passes through as-is.
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// The ordered-cascade implementation of [`FormatEngine`].
#[derive(Debug)]
pub struct CascadeEngine {
    compiled_rules: CompiledRules,
    config: FormatConfig,
}

impl CascadeEngine {
    /// Builds an engine from `config`.
    ///
    /// Construction cannot fail: rules that do not compile are dropped by
    /// the compiler and simply never run.
    pub fn new(config: FormatConfig) -> Self {
        let compiled_rules = compile_rules(config.rules.clone());
        Self {
            compiled_rules,
            config,
        }
    }

    /// Checks that `rule`'s replacement template only references capture
    /// groups its pattern defines. Returns the skip reason if not.
    ///
    /// This runs per call rather than at compile time, so a template edited
    /// to reference a missing group degrades to an inert rule instead of
    /// poisoning the compiled set.
    fn check_group_refs(rule: &CompiledRule) -> Option<String> {
        let group_count = rule.regex.captures_len().saturating_sub(1);
        for caps in GROUP_REF_RE.captures_iter(&rule.replacement) {
            if let Ok(group_num) = caps[1].parse::<usize>() {
                if group_num > group_count {
                    return Some(
                        FastformatError::MissingCaptureGroup(rule.name.clone(), group_num)
                            .to_string(),
                    );
                }
            }
        }
        None
    }

    /// Applies one rule to one text segment, counting rewrites.
    fn apply_rule(rule: &CompiledRule, text: &str, occurrences: &mut usize) -> String {
        rule.regex
            .replace_all(text, |caps: &Captures| {
                *occurrences += 1;
                let mut expanded = String::new();
                caps.expand(&rule.replacement, &mut expanded);
                expanded
            })
            .into_owned()
    }

    /// Folds every non-skipped rule, in order, over one text segment.
    fn apply_rules_to_segment(
        &self,
        segment: &str,
        skipped: &[Option<String>],
        occurrences: &mut [usize],
    ) -> String {
        if segment.is_empty() {
            return String::new();
        }
        let mut current = segment.to_string();
        for (i, rule) in self.compiled_rules.rules.iter().enumerate() {
            if skipped[i].is_some() {
                continue;
            }
            current = Self::apply_rule(rule, &current, &mut occurrences[i]);
        }
        current
    }

    /// Runs the cascade over `text`, honoring the configured protection
    /// flags, and reports per-rule outcomes.
    fn run_cascade(&self, text: &str) -> FormatOutput {
        let rules = &self.compiled_rules.rules;
        let mut occurrences = vec![0usize; rules.len()];

        let skipped: Vec<Option<String>> = rules
            .iter()
            .map(|rule| {
                if let Some(false) = rule.enabled {
                    return Some("disabled by configuration".to_string());
                }
                if let Some(reason) = Self::check_group_refs(rule) {
                    warn!("Skipping rule '{}': {}", rule.name, reason);
                    return Some(reason);
                }
                None
            })
            .collect();

        let mut vault = MediaVault::default();
        let working = if self.config.protect_media {
            vault.protect(text)
        } else {
            text.to_string()
        };

        let formatted = if self.config.protect_tags {
            // Rules see only the text between tags; the tags themselves are
            // concatenated back in their original positions untouched.
            let mut result = String::with_capacity(working.len());
            let mut last = 0;
            for tag in TAG_RE.find_iter(&working) {
                result.push_str(&self.apply_rules_to_segment(
                    &working[last..tag.start()],
                    &skipped,
                    &mut occurrences,
                ));
                result.push_str(tag.as_str());
                last = tag.end();
            }
            result.push_str(&self.apply_rules_to_segment(
                &working[last..],
                &skipped,
                &mut occurrences,
            ));
            result
        } else {
            self.apply_rules_to_segment(&working, &skipped, &mut occurrences)
        };

        let text_out = if self.config.protect_media {
            vault.restore(&formatted)
        } else {
            formatted
        };

        let mut outcomes = Vec::new();
        for ((rule, reason), count) in rules.iter().zip(skipped).zip(occurrences) {
            match reason {
                Some(reason) => outcomes.push(RuleOutcome {
                    rule_name: rule.name.clone(),
                    status: RuleStatus::Skipped { reason },
                }),
                None if count > 0 => outcomes.push(RuleOutcome {
                    rule_name: rule.name.clone(),
                    status: RuleStatus::Applied { occurrences: count },
                }),
                None => {}
            }
        }

        FormatOutput {
            text: text_out,
            outcomes,
        }
    }
}

impl FormatEngine for CascadeEngine {
    fn format(&self, text: &str) -> FormatOutput {
        self.run_cascade(text)
    }

    fn format_card(&self, text: &str, category: &str) -> FormatOutput {
        if self.config.excluded_categories.contains(category) {
            debug!("Category '{}' is excluded; passing text through.", category);
            return FormatOutput {
                text: text.to_string(),
                outcomes: Vec::new(),
            };
        }
        self.run_cascade(text)
    }

    fn analyze(&self, text: &str) -> Vec<RuleOutcome> {
        self.run_cascade(text).outcomes
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn config(&self) -> &FormatConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatRule;

    fn rule(name: &str, pattern: &str, replacement: &str) -> FormatRule {
        FormatRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            ..FormatRule::default()
        }
    }

    fn engine_with(rules: Vec<FormatRule>) -> CascadeEngine {
        CascadeEngine::new(FormatConfig {
            rules,
            include_defaults: false,
            ..FormatConfig::default()
        })
    }

    #[test]
    fn vault_round_trips_media_tags() {
        let mut vault = MediaVault::default();
        let working = vault.protect(r#"a <img src="x_y*z.png"> b"#);
        assert!(!working.contains("img"));
        assert!(working.contains(PLACEHOLDER_MARK));
        assert_eq!(vault.restore(&working), r#"a <img src="x_y*z.png"> b"#);
    }

    #[test]
    fn vault_indexes_spans_in_order_of_appearance() {
        let mut vault = MediaVault::default();
        let working = vault.protect("<img a> mid <audio b>");
        assert_eq!(
            working,
            format!(
                "{m}0{m} mid {m}1{m}",
                m = PLACEHOLDER_MARK
            )
        );
        assert_eq!(vault.spans, vec!["<img a>".to_string(), "<audio b>".to_string()]);
    }

    #[test]
    fn pre_existing_marker_is_vaulted_as_its_own_span() {
        let mut vault = MediaVault::default();
        let input = format!("x {} y", PLACEHOLDER_MARK);
        let working = vault.protect(&input);
        assert_eq!(vault.restore(&working), input);
    }

    #[test]
    fn unknown_placeholder_index_passes_through() {
        let vault = MediaVault::default();
        let stray = format!("{}7{}", PLACEHOLDER_MARK, PLACEHOLDER_MARK);
        assert_eq!(vault.restore(&stray), stray);
    }

    #[test]
    fn cascade_applies_rules_in_order() {
        // The second rule rewrites the first rule's output.
        let engine = engine_with(vec![rule("ab", "a", "b"), rule("bc", "b", "c")]);
        assert_eq!(engine.format("ab").text, "cc");
    }

    #[test]
    fn replacement_expands_capture_groups_per_match() {
        let engine = engine_with(vec![rule("swap", "(\\w+)=(\\w+)", "$2=$1")]);
        assert_eq!(engine.format("a=1 b=2").text, "1=a 2=b");
    }

    #[test]
    fn occurrences_accumulate_across_segments() {
        let engine = engine_with(vec![rule("x", "x", "y")]);
        let output = engine.format("x<br>x<br>x");
        assert_eq!(output.text, "y<br>y<br>y");
        assert_eq!(
            output.outcomes,
            vec![RuleOutcome {
                rule_name: "x".to_string(),
                status: RuleStatus::Applied { occurrences: 3 },
            }]
        );
    }

    #[test]
    fn group_ref_beyond_pattern_skips_the_rule() {
        let engine = engine_with(vec![rule("bad", "(a)", "$2"), rule("good", "b", "c")]);
        let output = engine.format("ab");
        assert_eq!(output.text, "ac");
        assert_eq!(output.outcomes.len(), 2);
        assert!(matches!(
            &output.outcomes[0].status,
            RuleStatus::Skipped { reason } if reason.contains("capture group")
        ));
    }

    #[test]
    fn disabled_rule_is_reported_skipped() {
        let mut disabled = rule("off", "a", "b");
        disabled.enabled = Some(false);
        let engine = engine_with(vec![disabled]);
        let output = engine.format("aaa");
        assert_eq!(output.text, "aaa");
        assert!(matches!(
            &output.outcomes[0].status,
            RuleStatus::Skipped { reason } if reason.contains("disabled")
        ));
    }
}
