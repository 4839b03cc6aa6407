//! BEM-JSON Language Server
//!
//! A Language Server Protocol implementation that lints BEM-JSON page
//! descriptions.
//!
//! This library provides:
//! - JSON parsing with source positions
//! - Rule catalog, validators and severity resolution
//! - The built-in BEM content linter
//! - LSP protocol implementation
//! - Configuration management

pub mod bem;
pub mod config;
pub mod core;
pub mod lsp;
pub mod parser;
pub mod rules;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, LintSettings};
pub use parser::{ParseError, parse};
pub use rules::{RuleCategory, RuleKey};
pub use validation::{Diagnostic, Engine, Severity, SeverityConfig, validate_document};
