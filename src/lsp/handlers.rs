use tower_lsp::lsp_types::*;

use crate::config::{LintSettings, SettingsOverlay};
use crate::core::Document;
use crate::lsp::backend::Backend;
use crate::validation;

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
    async fn revalidate_all(&self);
    fn create_lsp_diagnostic(
        &self,
        validation_diagnostic: validation::Diagnostic,
    ) -> tower_lsp::lsp_types::Diagnostic;
}

/// Trait for handling settings updates
#[tower_lsp::async_trait]
pub trait HandleConfiguration {
    async fn handle_did_change_configuration(&self, params: DidChangeConfigurationParams);
    async fn reload_settings_file(&self);
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Validate a document and publish the complete diagnostic list
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state.clone(),
            None => return,
        };
        drop(docs);

        let document = Document::new(uri.as_str(), &doc_state.content);
        if !document.is_json() {
            log::debug!("Not linting {}", uri);
            return;
        }

        let settings = self.settings.read().await.effective();
        let diagnostics = if settings.enable {
            self.engine
                .validate_document(&document, &settings.severity)
                .into_iter()
                .map(|d| self.create_lsp_diagnostic(d))
                .collect()
        } else {
            Vec::new()
        };

        self.client
            .publish_diagnostics(uri, diagnostics, doc_state.version)
            .await;
    }

    async fn revalidate_all(&self) {
        let uris: Vec<Url> = self.documents.lock().await.keys().cloned().collect();
        for uri in uris {
            self.publish_diagnostics(uri).await;
        }
    }

    fn create_lsp_diagnostic(
        &self,
        validation_diagnostic: validation::Diagnostic,
    ) -> tower_lsp::lsp_types::Diagnostic {
        let severity = match validation_diagnostic.severity {
            validation::DiagnosticSeverity::Error => DiagnosticSeverity::ERROR,
            validation::DiagnosticSeverity::Warning => DiagnosticSeverity::WARNING,
            validation::DiagnosticSeverity::Information => DiagnosticSeverity::INFORMATION,
            validation::DiagnosticSeverity::Hint => DiagnosticSeverity::HINT,
        };
        let range = validation_diagnostic.range;

        tower_lsp::lsp_types::Diagnostic::new(
            Range::new(
                Position::new(range.start.line, range.start.character),
                Position::new(range.end.line, range.end.character),
            ),
            Some(severity),
            Some(NumberOrString::String(validation_diagnostic.code)),
            Some(validation_diagnostic.source),
            validation_diagnostic.message,
            None,
            None,
        )
    }
}

#[tower_lsp::async_trait]
impl HandleConfiguration for Backend {
    /// Replace the editor settings layer and revalidate
    async fn handle_did_change_configuration(&self, params: DidChangeConfigurationParams) {
        let Some(overlay) = SettingsOverlay::from_lsp(&params.settings) else {
            log::debug!("No bemjson settings in configuration change");
            return;
        };

        self.settings.write().await.client = Some(overlay);
        self.revalidate_all().await;
    }

    /// Re-read the settings file and revalidate
    async fn reload_settings_file(&self) {
        let file = match self.config.load_settings() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Keeping previous settings: {:#}", e);
                self.client
                    .log_message(MessageType::ERROR, format!("Invalid settings file: {:#}", e))
                    .await;
                return;
            }
        };

        let mut state = self.settings.write().await;
        if state.file == file {
            return;
        }
        state.file = file;
        drop(state);

        self.client
            .log_message(MessageType::INFO, "Settings file reloaded")
            .await;
        self.revalidate_all().await;
    }
}

/// Settings the server starts with; a broken settings file falls back to
/// the defaults
pub fn initial_settings(config: &crate::Config) -> LintSettings {
    config.load_settings().unwrap_or_else(|e| {
        log::warn!("Using default settings: {:#}", e);
        LintSettings::default()
    })
}
