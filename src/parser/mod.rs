//! JSON Parser
//!
//! Turns raw document text into a position-annotated tree.
//! Focused solely on tokenization and tree construction.

pub mod ast;
pub mod error;
pub mod lexer;

pub use ast::{
    Array, Identifier, Literal, LiteralValue, Location, Object, Point, Property, Value,
};
pub use error::ParseError;
pub use lexer::{Lexer, Token, TokenKind};

/// Parse a complete JSON document
///
/// This is the main entry point for parsing. Malformed input yields a
/// [`ParseError`]; callers that only lint treat that as "no tree".
pub fn parse(text: &str) -> Result<Value, ParseError> {
    ast::build_tree(text)
}
