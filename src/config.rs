//! Configuration management for the BEM-JSON language server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Locating and loading the TOML settings file
//! - Settings pushed by the editor over LSP

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::validation::SeverityConfig;

/// Settings file looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = ".bemjson-lint.toml";

/// LSP settings sections holding our settings, in lookup order
pub const LSP_SECTIONS: [&str; 2] = ["bemjson", "example"];

/// Command-line arguments shared by the server and the checker
#[derive(Debug, Parser)]
#[command(name = "bemjson-language-server")]
#[command(about = "Language server for BEM-JSON files")]
#[command(version)]
pub struct Args {
    /// Settings file to use instead of the default lookup
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings file in effect, if any
    pub settings_path: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;

        let settings_path = match args.config {
            // An explicit path is kept even if it does not exist yet so it
            // can be watched
            Some(path) => Some(cwd.join(path)),
            None => default_settings_paths(&cwd)
                .into_iter()
                .find(|path| path.is_file()),
        };

        Ok(Config {
            settings_path,
            log_level: args.log_level,
        })
    }

    /// Settings from the file in effect layered over the defaults
    pub fn load_settings(&self) -> Result<LintSettings> {
        match &self.settings_path {
            Some(path) if path.exists() => LintSettings::load(path),
            Some(path) => {
                log::info!("Settings file {} not found, using defaults", path.display());
                Ok(LintSettings::default())
            }
            None => Ok(LintSettings::default()),
        }
    }
}

/// Candidate settings files, highest priority first
pub fn default_settings_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(PROJECT_SETTINGS_FILE)];

    // User global file: ~/.config/bemjson-ls/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("bemjson-ls").join("config.toml"));
    }

    paths
}

/// Effective lint settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSettings {
    /// When false every document gets an empty diagnostic list
    pub enable: bool,
    pub severity: SeverityConfig,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            enable: true,
            severity: SeverityConfig::recommended(),
        }
    }
}

impl LintSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let overlay: SettingsOverlay = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings TOML: {}", path.display()))?;
        Ok(Self::default().overlay(overlay))
    }

    /// Parse TOML settings content layered over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overlay: SettingsOverlay =
            toml::from_str(content).context("Failed to parse settings TOML")?;
        Ok(Self::default().overlay(overlay))
    }

    /// `self` with the values present in `overlay` applied on top
    pub fn overlay(&self, overlay: SettingsOverlay) -> Self {
        Self {
            enable: overlay.enable.unwrap_or(self.enable),
            severity: match overlay.severity {
                Some(severity) => self.severity.merged(&severity),
                None => self.severity.clone(),
            },
        }
    }
}

/// A partial settings layer: absent fields keep the lower layer's value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsOverlay {
    pub enable: Option<bool>,
    pub severity: Option<SeverityConfig>,
}

impl SettingsOverlay {
    /// Extract our section from `workspace/didChangeConfiguration` settings
    ///
    /// Returns `None` when no known section is present or it is malformed.
    pub fn from_lsp(settings: &serde_json::Value) -> Option<Self> {
        let section = LSP_SECTIONS
            .iter()
            .find_map(|name| settings.get(name))?;

        match serde_json::from_value(section.clone()) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::warn!("Ignoring malformed editor settings: {}", e);
                None
            }
        }
    }
}
