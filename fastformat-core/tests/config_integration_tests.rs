// fastformat-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use fastformat_core::config::{merge_rules, FormatConfig, FormatRule};

fn named_rule(name: &str) -> FormatRule {
    FormatRule {
        name: name.to_string(),
        pattern: name.to_string(),
        replacement: format!("[{}]", name),
        ..FormatRule::default()
    }
}

#[test]
fn test_load_default_rules() {
    let config = FormatConfig::load_default_rules().unwrap();
    assert!(!config.rules.is_empty());
    assert!(config.rules.iter().any(|r| r.name == "asterisk_bold"));

    let position = |name: &str| {
        config
            .rules
            .iter()
            .position(|r| r.name == name)
            .unwrap_or_else(|| panic!("missing rule {}", name))
    };

    // Doubled-delimiter rules must precede the single-delimiter rule for
    // the same character.
    assert!(position("backtick_double_gray") < position("backtick_red"));
    assert!(position("hash_double_green") < position("hash_blue"));

    // Unescape rules must follow the span rules for their delimiter.
    assert!(position("asterisk_bold") < position("asterisk_unescape"));
    assert!(position("bracket_gray") < position("bracket_unescape_open"));
    assert!(position("backtick_red") < position("backtick_unescape"));
}

#[test]
fn test_default_rules_all_compile() {
    let config = FormatConfig::load_default_rules().unwrap();
    let total = config.rules.len();
    let compiled = fastformat_core::compile_rules(config.rules);
    assert_eq!(compiled.rules.len(), total);
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: test_rule
    pattern: "test"
    replacement: "[TEST]"
    description: "A test rule"
protect_tags: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FormatConfig::load_from_file(file.path())?;
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].name, "test_rule");
    // Omitted fields fall back to defaults.
    assert!(config.rules[0].dot_matches_new_line);
    assert!(!config.rules[0].multiline);
    assert!(config.include_defaults);
    assert!(!config.protect_tags);
    assert!(config.protect_media);
    Ok(())
}

#[test]
fn test_load_from_file_missing_file_errors() {
    assert!(FormatConfig::load_from_file("/nonexistent/rules.yaml").is_err());
}

#[test]
fn test_merge_rules_appends_defaults_after_user_rules() {
    let user = FormatConfig {
        rules: vec![named_rule("user_one"), named_rule("user_two")],
        ..FormatConfig::default()
    };
    let defaults = FormatConfig {
        rules: vec![named_rule("default_one")],
        ..FormatConfig::default()
    };

    let merged = merge_rules(user, defaults);
    let names: Vec<&str> = merged.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["user_one", "user_two", "default_one"]);
}

#[test]
fn test_merge_rules_include_defaults_off() {
    let user = FormatConfig {
        rules: vec![named_rule("user_one")],
        include_defaults: false,
        ..FormatConfig::default()
    };
    let defaults = FormatConfig::load_default_rules().unwrap();

    let merged = merge_rules(user, defaults);
    assert_eq!(merged.rules.len(), 1);
    assert_eq!(merged.rules[0].name, "user_one");
}

#[test]
fn test_merge_rules_user_rule_shadows_default() {
    let mut user_bold = named_rule("asterisk_bold");
    user_bold.replacement = "<strong>$2</strong>".to_string();
    let user = FormatConfig {
        rules: vec![user_bold],
        ..FormatConfig::default()
    };
    let defaults = FormatConfig::load_default_rules().unwrap();
    let default_count = defaults.rules.len();

    let merged = merge_rules(user, defaults);
    assert_eq!(merged.rules.len(), default_count);
    let bolds: Vec<&FormatRule> = merged
        .rules
        .iter()
        .filter(|r| r.name == "asterisk_bold")
        .collect();
    assert_eq!(bolds.len(), 1);
    assert_eq!(bolds[0].replacement, "<strong>$2</strong>");
    assert_eq!(merged.rules[0].name, "asterisk_bold");
}

#[test]
fn test_merge_preserves_engine_flags_from_user_config() {
    let user = FormatConfig {
        protect_tags: false,
        ..FormatConfig::default()
    };
    let defaults = FormatConfig::load_default_rules().unwrap();
    let merged = merge_rules(user, defaults);
    assert!(!merged.protect_tags);
    assert!(!merged.rules.is_empty());
}
