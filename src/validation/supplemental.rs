//! Supplemental linters
//!
//! A supplemental linter analyses the raw document text with rules of its
//! own and reports problems under textual `"CATEGORY.KEY"` codes. It runs
//! whether or not the document parsed.

use crate::parser::Location;

/// A problem reported by a supplemental linter
#[derive(Debug, Clone, PartialEq)]
pub struct LintProblem {
    /// Rule code such as `"WARNING.INVALID_BUTTON_SIZE"`
    pub code: String,
    pub message: String,
    pub location: Location,
}

impl LintProblem {
    pub fn new(code: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            location,
        }
    }
}

/// Text-level linter contributing extra problems
pub trait SupplementalLinter: Send + Sync {
    fn lint(&self, text: &str) -> Vec<LintProblem>;
}

/// Contributes nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSupplemental;

impl SupplementalLinter for NoSupplemental {
    fn lint(&self, _text: &str) -> Vec<LintProblem> {
        Vec::new()
    }
}
