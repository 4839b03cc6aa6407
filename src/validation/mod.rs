//! Validation Engine
//!
//! Clean separation of validation logic from parsing and LSP concerns.

pub mod diagnostics;
pub mod engine;
pub mod problem;
pub mod severity;
pub mod supplemental;
pub mod validators;
pub mod walker;

pub use diagnostics::{Diagnostic, DiagnosticSeverity, LineIndex, Position, Range, to_diagnostic};
pub use engine::{Engine, validate_document};
pub use problem::{LineColumn, ProblemLocation, RawProblem};
pub use severity::{Severity, SeverityConfig, resolve, resolve_code};
pub use supplemental::{LintProblem, NoSupplemental, SupplementalLinter};
pub use validators::{BlockNameRequired, UppercaseForbidden, Validator, ValidatorRegistry};
pub use walker::{Visitor, walk, walk_with};
