//! Diagnostic Mapper
//!
//! Converts raw problems into host-ready diagnostics: 0-based half-open
//! ranges, a concrete severity and a message.

use std::fmt;

use serde::Serialize;

use crate::validation::problem::{LineColumn, ProblemLocation, RawProblem};

/// Level of an emitted diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Information => "info",
            DiagnosticSeverity::Hint => "hint",
        };
        f.write_str(name)
    }
}

/// 0-based position; `character` counts UTF-16 code units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A severity-resolved, positioned report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    /// Rule identifier, e.g. `warning.invalidButtonSize`
    pub code: String,
    pub message: String,
    pub source: String,
}

/// Byte offset → position lookup over one document's text
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    /// Position of a byte offset; offsets past the end or inside a
    /// multi-byte character snap backwards
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let character = self.text[line_start..offset].encode_utf16().count();

        Position::new(line as u32, character as u32)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

fn from_line_column(point: LineColumn) -> Position {
    Position::new(
        point.line.saturating_sub(1) as u32,
        point.column.saturating_sub(1) as u32,
    )
}

/// Range of a problem location; offsets are resolved through `index`
pub fn to_range(location: &ProblemLocation, index: &LineIndex<'_>) -> Range {
    let (start, end) = match *location {
        ProblemLocation::LineColumn { start, end } => {
            (from_line_column(start), from_line_column(end))
        }
        ProblemLocation::Offsets { start, end } => (index.position(start), index.position(end)),
    };
    // A range never ends before it starts
    Range::new(start, end.max(start))
}

/// Build the diagnostic for a problem that survived severity resolution
pub fn to_diagnostic(
    problem: &RawProblem,
    severity: DiagnosticSeverity,
    source: &str,
    index: &LineIndex<'_>,
) -> Diagnostic {
    Diagnostic {
        range: to_range(&problem.location, index),
        severity,
        code: problem.rule.identifier(),
        message: problem.message().to_string(),
        source: source.to_string(),
    }
}
