//! Parse errors

use thiserror::Error;

use crate::parser::ast::Point;

/// Why a document could not be turned into a tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character '{found}' at {at}")]
    UnexpectedCharacter { found: char, at: Point },

    #[error("unterminated string starting at {at}")]
    UnterminatedString { at: Point },

    #[error("invalid escape sequence at {at}")]
    InvalidEscape { at: Point },

    #[error("unescaped control character in string at {at}")]
    ControlCharacter { at: Point },

    #[error("invalid number at {at}")]
    InvalidNumber { at: Point },

    #[error("unknown literal '{literal}' at {at}")]
    InvalidLiteral { literal: String, at: Point },

    #[error("expected {expected}, found {found} at {at}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        at: Point,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("nesting deeper than {limit} levels at {at}")]
    TooDeep { limit: usize, at: Point },
}
