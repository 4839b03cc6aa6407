use crate::config::{LintSettings, SettingsOverlay};

/// State for each open document
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub content: String,
    pub version: Option<i32>,
}

/// Settings layers currently in effect
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Defaults with the settings file applied
    pub file: LintSettings,
    /// Last settings pushed by the editor; these win over the file
    pub client: Option<SettingsOverlay>,
}

impl SettingsState {
    pub fn new(file: LintSettings) -> Self {
        Self { file, client: None }
    }

    pub fn effective(&self) -> LintSettings {
        match &self.client {
            Some(overlay) => self.file.overlay(overlay.clone()),
            None => self.file.clone(),
        }
    }
}
