use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::Config;
use crate::lsp::backend::Backend;
use crate::lsp::handlers::initial_settings;

/// Initialize `env_logger` on stderr; `RUST_LOG` overrides `level`
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Start the LSP server
pub async fn serve() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    match &config.settings_path {
        Some(path) => log::info!("Using settings file {}", path.display()),
        None => log::info!("No settings file found, using defaults"),
    }
    let settings = initial_settings(&config);

    let (service, socket) =
        LspService::build(move |client| Backend::new(client, config.clone(), settings.clone()))
            .finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
