//! Raw problems: rule violations before severity resolution

use crate::parser::Location;
use crate::rules::RuleKey;

/// 1-based line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// Where a problem was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemLocation {
    /// 1-based start/end positions, end exclusive
    LineColumn { start: LineColumn, end: LineColumn },
    /// Byte offsets into the document text, end exclusive
    Offsets { start: usize, end: usize },
}

impl From<Location> for ProblemLocation {
    fn from(location: Location) -> Self {
        ProblemLocation::LineColumn {
            start: LineColumn {
                line: location.start.line,
                column: location.start.column,
            },
            end: LineColumn {
                line: location.end.line,
                column: location.end.column,
            },
        }
    }
}

/// An unfiltered rule violation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawProblem {
    pub rule: RuleKey,
    pub location: ProblemLocation,
    /// Overrides the catalog message when present
    pub message: Option<String>,
}

impl RawProblem {
    pub fn new(rule: RuleKey, location: impl Into<ProblemLocation>) -> Self {
        Self {
            rule,
            location: location.into(),
            message: None,
        }
    }

    pub fn at_offsets(rule: RuleKey, start: usize, end: usize) -> Self {
        Self::new(rule, ProblemLocation::Offsets { start, end })
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Explicit message if any, otherwise the catalog's
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.rule.message())
    }
}
