//! Settings files and their precedence
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use bemjson_language_server::config::{Args, Config, LintSettings, SettingsOverlay};
use bemjson_language_server::lsp::watcher::{WatcherEvent, watch_settings};
use bemjson_language_server::rules::RuleKey;
use bemjson_language_server::validation::Severity;
use tempfile::TempDir;

fn write_settings(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("bemjson.toml");
    fs::write(&path, content).expect("write settings");
    path
}

fn config_for(path: PathBuf) -> Config {
    Config::from_args(Args {
        config: Some(path),
        log_level: "info".to_string(),
    })
    .expect("create config")
}

#[test]
fn test_file_layered_over_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        r#"
[severity]
uppercaseNamesIsForbidden = "Information"

[severity.warning]
invalid_button_size = "error"
"#,
    );

    let settings = config_for(path).load_settings().unwrap();
    assert!(settings.enable);
    assert_eq!(
        settings.severity.get(RuleKey::UppercaseNamesIsForbidden),
        Some(Severity::Information)
    );
    assert_eq!(
        settings.severity.get(RuleKey::InvalidButtonSize),
        Some(Severity::Error)
    );
    assert_eq!(
        settings.severity.get(RuleKey::InvalidButtonPosition),
        Some(Severity::Warning)
    );
}

#[test]
fn test_legacy_dotted_keys_migrate() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        r#"
[severity]
"WARNING.INVALID_PLACEHOLDER_SIZE" = "Hint"
"text.severalH1" = "None"
"#,
    );

    let settings = LintSettings::load(&path).unwrap();
    assert_eq!(
        settings.severity.get(RuleKey::InvalidPlaceholderSize),
        Some(Severity::Hint)
    );
    assert_eq!(settings.severity.get(RuleKey::SeveralH1), Some(Severity::None));
}

#[test]
fn test_unknown_severity_disables_rule() {
    let settings = LintSettings::from_toml_str(
        r#"
[severity]
blockNameIsRequired = "Fatal"
"#,
    )
    .unwrap();

    assert_eq!(
        settings.severity.get(RuleKey::BlockNameIsRequired),
        Some(Severity::None)
    );
}

#[test]
fn test_broken_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "enable = [");

    let err = config_for(path).load_settings().unwrap_err();
    assert!(format!("{:#}", err).contains("bemjson.toml"));
}

#[test]
fn test_editor_settings_win() {
    let file = LintSettings::from_toml_str("enable = false").unwrap();
    let pushed = SettingsOverlay::from_lsp(&serde_json::json!({
        "bemjson": {
            "enable": true,
            "severity": { "grid": { "tooMuchMarketingBlocks": "Error" } }
        }
    }))
    .unwrap();

    let effective = file.overlay(pushed);
    assert!(effective.enable);
    assert_eq!(
        effective.severity.get(RuleKey::TooMuchMarketingBlocks),
        Some(Severity::Error)
    );
    assert_eq!(
        effective.severity.get(RuleKey::BlockNameIsRequired),
        Some(Severity::Error)
    );
}

#[tokio::test]
async fn test_settings_file_changes_are_watched() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "enable = true");

    let (_watcher, mut rx) = watch_settings(&path).expect("start watcher");

    // Unrelated files in the same directory are ignored
    tokio::fs::write(dir.path().join("other.toml"), "x = 1")
        .await
        .unwrap();
    tokio::fs::write(&path, "enable = false").await.unwrap();

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("watcher event in time")
        .expect("channel open");

    match event {
        WatcherEvent::SettingsChanged(changed) => {
            assert_eq!(changed.file_name(), path.file_name());
        }
        WatcherEvent::WatcherError(e) => panic!("watcher error: {}", e),
    }
}
