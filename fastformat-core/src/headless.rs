// fastformat-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for using the core engine in headless mode (non-UI).
//! Provides a helper for a full, one-shot formatting of a string.

use crate::config::FormatConfig;
use crate::engine::FormatEngine;
use crate::engines::cascade_engine::CascadeEngine;

/// Fully formats an input string and returns only the rewritten text.
///
/// This function is the primary entry point for hosts that do not care
/// about per-rule outcomes. It builds a fresh engine per call; callers that
/// format many strings against the same configuration should construct a
/// [`CascadeEngine`] once and reuse it.
///
/// # Arguments
///
/// * `config` - The merged FormatConfig (user rules + optional built-ins).
/// * `text` - The string to be formatted.
pub fn headless_format_string(config: FormatConfig, text: &str) -> String {
    // Instantiate the engine behind the FormatEngine trait.
    let engine: Box<dyn FormatEngine> = Box::new(CascadeEngine::new(config));
    engine.format(text).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatRule;

    #[test]
    fn test_headless_format_string_custom_rule() {
        let content = "My mark is ++here++ and ++there++.";
        let config = FormatConfig {
            rules: vec![FormatRule {
                name: "plus_underline".to_string(),
                pattern: r"\+\+(.*?)\+\+".to_string(),
                replacement: "<u>$1</u>".to_string(),
                ..FormatRule::default()
            }],
            include_defaults: false,
            ..FormatConfig::default()
        };

        let formatted = headless_format_string(config, content);
        assert_eq!(formatted, "My mark is <u>here</u> and <u>there</u>.");
    }

    #[test]
    fn test_headless_format_string_defaults() {
        let config = FormatConfig::load_default_rules().unwrap();
        let formatted = headless_format_string(config, "*bold* and _italic_");
        assert_eq!(formatted, "<b>bold</b> and <i>italic</i>");
    }
}
