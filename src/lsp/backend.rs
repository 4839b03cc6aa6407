use std::collections::HashMap;
use std::sync::Arc;

use notify::RecommendedWatcher;
use tokio::sync::{Mutex, RwLock};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::Config;
use crate::config::LintSettings;
use crate::lsp::document::{DocumentState, SettingsState};
use crate::lsp::handlers::{HandleConfiguration, HandleDiagnostics};
use crate::lsp::watcher::{WatcherEvent, watch_settings};
use crate::validation::Engine;

/// The main LSP backend that holds state and implements the Language Server Protocol
#[derive(Clone)]
pub struct Backend {
    pub client: Client,
    pub engine: Arc<Engine>,
    pub documents: Arc<Mutex<HashMap<Url, DocumentState>>>,
    pub settings: Arc<RwLock<SettingsState>>,
    pub config: Config,
    watcher: Arc<Mutex<Option<RecommendedWatcher>>>,
}

impl Backend {
    pub fn new(client: Client, config: Config, settings: LintSettings) -> Self {
        Self {
            client,
            engine: Arc::new(Engine::new()),
            documents: Arc::new(Mutex::new(HashMap::new())),
            settings: Arc::new(RwLock::new(SettingsState::new(settings))),
            config,
            watcher: Arc::new(Mutex::new(None)),
        }
    }

    /// Watch the settings file and reload on change
    async fn start_watching(&self) {
        let Some(path) = self.config.settings_path.clone() else {
            return;
        };

        let (watcher, mut rx) = match watch_settings(&path) {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("Settings file will not be reloaded: {:#}", e);
                return;
            }
        };
        *self.watcher.lock().await = Some(watcher);

        let backend = self.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    WatcherEvent::SettingsChanged(path) => {
                        log::info!("Settings file changed: {}", path.display());
                        backend.reload_settings_file().await;
                    }
                    WatcherEvent::WatcherError(e) => {
                        backend
                            .client
                            .log_message(
                                MessageType::ERROR,
                                format!("Settings file watcher error: {}", e),
                            )
                            .await;
                    }
                }
            }
        });
    }

    async fn store(&self, uri: Url, content: String, version: Option<i32>) {
        let mut docs = self.documents.lock().await;
        docs.insert(uri.clone(), DocumentState { content, version });
        drop(docs); // Release the lock before calling publish_diagnostics

        self.publish_diagnostics(uri).await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(
        &self,
        _: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.start_watching().await;
        self.client
            .log_message(MessageType::INFO, "bemjson-language-server initialized")
            .await;
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        self.watcher.lock().await.take();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        self.store(document.uri, document.text, Some(document.version))
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        // Full sync: the last change carries the whole text
        if let Some(change) = params.content_changes.into_iter().last() {
            self.store(uri, change.text, Some(version)).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.lock().await.remove(&uri);
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.handle_did_change_configuration(params).await;
    }
}
