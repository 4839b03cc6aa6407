//! Lint BEM-JSON files from the command line
//!
//! Prints one `path:line:column: severity [code] message` line per
//! diagnostic and exits non-zero when any error was reported.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use bemjson_language_server::config::{Args, Config};
use bemjson_language_server::lsp::server::init_logging;
use bemjson_language_server::validation::{DiagnosticSeverity, Engine};

#[derive(Debug, Parser)]
#[command(name = "bemjson-check")]
#[command(about = "Check BEM-JSON files")]
#[command(version)]
struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Settings file to use instead of the default lookup
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<ExitCode> {
    let args = CheckArgs::parse();
    let config = Config::from_args(Args {
        config: args.config,
        log_level: args.log_level,
    })?;
    init_logging(&config.log_level);

    let settings = config.load_settings()?;
    if !settings.enable {
        log::info!("Linting disabled by settings");
        return Ok(ExitCode::SUCCESS);
    }

    let engine = Engine::new();
    let mut errors = 0;

    for path in &args.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        for diagnostic in engine.validate(&text, &settings.severity) {
            if diagnostic.severity == DiagnosticSeverity::Error {
                errors += 1;
            }
            println!(
                "{}:{}:{}: {} [{}] {}",
                path.display(),
                diagnostic.range.start.line + 1,
                diagnostic.range.start.character + 1,
                diagnostic.severity,
                diagnostic.code,
                diagnostic.message
            );
        }
    }

    if errors > 0 {
        log::info!("{} error(s)", errors);
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
