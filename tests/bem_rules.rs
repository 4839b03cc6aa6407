//! BEM content rules as seen through the engine
use bemjson_language_server::bem::{BemLinter, SIZE_SCALE, codes, next_size};
use bemjson_language_server::rules::{RuleCategory, RuleKey};
use bemjson_language_server::validation::{
    Diagnostic, DiagnosticSeverity, Engine, Severity, SeverityConfig, SupplementalLinter,
};

/// Recommended settings with the structural rules switched off
fn layout_only() -> SeverityConfig {
    SeverityConfig::recommended()
        .with(RuleKey::BlockNameIsRequired, Severity::None)
        .with(RuleKey::UppercaseNamesIsForbidden, Severity::None)
}

fn validate(text: &str) -> Vec<Diagnostic> {
    Engine::new().validate(text, &layout_only())
}

fn codes_and_lines(diagnostics: &[Diagnostic]) -> Vec<(&str, u32)> {
    diagnostics
        .iter()
        .map(|d| (d.code.as_str(), d.range.start.line))
        .collect()
}

#[test]
fn test_every_linter_code_resolves() {
    let all = [
        codes::TEXT_SIZES_SHOULD_BE_EQUAL,
        codes::INVALID_BUTTON_SIZE,
        codes::INVALID_BUTTON_POSITION,
        codes::INVALID_PLACEHOLDER_SIZE,
        codes::SEVERAL_H1,
        codes::INVALID_H2_POSITION,
        codes::INVALID_H3_POSITION,
        codes::TOO_MUCH_MARKETING_BLOCKS,
    ];

    for code in all {
        let rule = RuleKey::from_code(code).unwrap_or_else(|| panic!("{code} unresolved"));
        assert!(rule.category().is_some());
    }
}

#[test]
fn test_size_scale_steps() {
    assert_eq!(SIZE_SCALE.first(), Some(&"xxxs"));
    for pair in SIZE_SCALE.windows(2) {
        assert_eq!(next_size(pair[0]), Some(pair[1]));
    }
}

#[test]
fn test_warning_rules_located_at_offending_blocks() {
    let text = r#"{
  "block": "warning",
  "content": [
    {"block": "button", "mods": {"size": "m"}},
    {"block": "placeholder", "mods": {"size": "xs"}},
    {"block": "text", "mods": {"size": "l"}}
  ]
}"#;
    let diagnostics = validate(text);

    assert_eq!(
        codes_and_lines(&diagnostics),
        vec![
            ("warning.invalidButtonSize", 3),
            ("warning.invalidButtonPosition", 3),
            ("warning.invalidPlaceholderSize", 4),
        ]
    );
    assert!(
        diagnostics
            .iter()
            .all(|d| d.severity == DiagnosticSeverity::Warning)
    );
    assert_eq!(
        diagnostics[0].message,
        "Button size 'm' must be 'xl' to match the text size 'l'"
    );
}

#[test]
fn test_text_sizes_reported_at_warning() {
    let text = r#"{"block": "page", "content": {
  "block": "warning",
  "content": [
    {"block": "text", "mods": {"size": "l"}},
    {"block": "text", "mods": {"size": "xl"}}
  ]
}}"#;
    let diagnostics = validate(text);

    assert_eq!(codes_and_lines(&diagnostics), vec![("warning.textSizesShouldBeEqual", 0)]);
    assert_eq!(diagnostics[0].range.start.character, 29);
    assert_eq!(diagnostics[0].range.end.line, 6);
}

#[test]
fn test_heading_outline() {
    let text = r#"[
  {"block": "text", "mods": {"type": "h3"}},
  {"block": "text", "mods": {"type": "h2"}},
  {"block": "text", "mods": {"type": "h1"}},
  {"block": "text", "mods": {"type": "h1"}}
]"#;
    let diagnostics = validate(text);

    assert_eq!(
        codes_and_lines(&diagnostics),
        vec![
            ("text.invalidH3Position", 1),
            ("text.invalidH2Position", 2),
            ("text.severalH1", 4),
        ]
    );
}

#[test]
fn test_marketing_share_of_grid() {
    let text = r#"{
  "block": "grid",
  "mods": {"m-columns": "10"},
  "content": [
    {"elem": "fraction", "elemMods": {"m-col": "6"}, "content": [{"block": "offer"}]},
    {"elem": "fraction", "elemMods": {"m-col": "4"}, "content": [{"block": "payment"}]}
  ]
}"#;
    let diagnostics = validate(text);

    assert_eq!(codes_and_lines(&diagnostics), vec![("grid.tooMuchMarketingBlocks", 0)]);

    let balanced = text.replace("\"6\"", "\"5\"").replace("\"4\"", "\"5\"");
    assert!(validate(&balanced).is_empty());
}

#[test]
fn test_category_severity_applies_to_linter_codes() {
    let text = r#"[{"block": "text", "mods": {"type": "h1"}}, {"block": "text", "mods": {"type": "h1"}}]"#;
    let config: SeverityConfig =
        serde_json::from_str(r#"{ "text": { "severalH1": "Hint" } }"#).unwrap();

    let diagnostics = Engine::new().validate(text, &config);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Hint);
    assert_eq!(
        RuleKey::from_code(&diagnostics[0].code).and_then(|r| r.category()),
        Some(RuleCategory::Text)
    );
}

#[test]
fn test_linter_ignores_malformed_text() {
    assert!(BemLinter::new().lint(r#"[{"block": "text", "mods": {"type": "h1"}"#).is_empty());
}
