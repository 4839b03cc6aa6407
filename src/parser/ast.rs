//! Abstract Syntax Tree for JSON
//!
//! Position-annotated node types plus the recursive-descent builder that
//! turns a token stream into a tree. No validation logic lives here.

use std::fmt;

use crate::parser::error::ParseError;
use crate::parser::lexer::{Lexer, Token, TokenKind};

/// Nesting limit for objects and arrays
pub const MAX_DEPTH: usize = 512;

/// A position in the source text
///
/// `line` and `column` are 1-based, `column` counts UTF-16 code units.
/// `offset` is the 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open source span; `end` points just past the last character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub start: Point,
    pub end: Point,
}

impl Location {
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert!(end.offset >= start.offset, "span ends before it starts");
        Self { start, end }
    }
}

/// Any JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(Object),
    Array(Array),
    Literal(Literal),
}

/// `{ ... }` with its properties in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub children: Vec<Property>,
    pub location: Location,
}

/// `[ ... ]` with its items in order
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub children: Vec<Value>,
    pub location: Location,
}

/// A `"key": value` pair; the location spans key through value
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Identifier,
    pub value: Value,
    pub location: Location,
}

/// A property key
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// Unescaped key text
    pub value: String,
    /// Source text including quotes
    pub raw: String,
    /// Span of the quoted key
    pub location: Location,
}

/// A scalar value
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Value {
    pub fn location(&self) -> Location {
        match self {
            Value::Object(object) => object.location,
            Value::Array(array) => array.location,
            Value::Literal(literal) => literal.location,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Literal(Literal {
                value: LiteralValue::String(s),
                ..
            }) => Some(s),
            _ => None,
        }
    }

    /// Scalar rendered as text: strings unquoted, numbers as written
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Literal(literal) => match &literal.value {
                LiteralValue::String(s) => Some(s),
                LiteralValue::Number(_) => Some(&literal.raw),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Object {
    /// Value of the last property named `key`, matching JSON object semantics
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children
            .iter()
            .rev()
            .find(|p| p.key.value == key)
            .map(|p| &p.value)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.children.iter().any(|p| p.key.value == key)
    }
}

/// Build a tree from the complete text of a document
pub fn build_tree(text: &str) -> Result<Value, ParseError> {
    let mut builder = TreeBuilder {
        lexer: Lexer::new(text),
        depth: 0,
    };

    let root = builder.value()?;

    if let Some(token) = builder.lexer.next_token()? {
        return Err(unexpected("end of input", &token));
    }

    Ok(root)
}

struct TreeBuilder<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

impl<'a> TreeBuilder<'a> {
    fn next(&mut self, expected: &'static str) -> Result<Token<'a>, ParseError> {
        self.lexer
            .next_token()?
            .ok_or(ParseError::UnexpectedEnd { expected })
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        let token = self.next("a value")?;
        self.value_from(token)
    }

    fn value_from(&mut self, token: Token<'a>) -> Result<Value, ParseError> {
        let value = match token.kind {
            TokenKind::LeftBrace => return self.object(token.location.start),
            TokenKind::LeftBracket => return self.array(token.location.start),
            TokenKind::String(s) => LiteralValue::String(s),
            TokenKind::Number(n) => LiteralValue::Number(n),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::Null => LiteralValue::Null,
            ref other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a value",
                    found: other.describe(),
                    at: token.location.start,
                });
            }
        };

        Ok(Value::Literal(Literal {
            value,
            raw: token.raw.to_string(),
            location: token.location,
        }))
    }

    fn enter(&mut self, at: Point) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                at,
            });
        }
        Ok(())
    }

    fn object(&mut self, start: Point) -> Result<Value, ParseError> {
        self.enter(start)?;
        let mut children = Vec::new();

        let end = loop {
            let token = self.next("a property key")?;
            if token.kind == TokenKind::RightBrace && children.is_empty() {
                break token.location.end;
            }
            children.push(self.property(token)?);

            let separator = self.next("',' or '}'")?;
            match separator.kind {
                TokenKind::Comma => continue,
                TokenKind::RightBrace => break separator.location.end,
                _ => return Err(unexpected("',' or '}'", &separator)),
            }
        };

        self.depth -= 1;
        Ok(Value::Object(Object {
            children,
            location: Location::new(start, end),
        }))
    }

    fn property(&mut self, token: Token<'a>) -> Result<Property, ParseError> {
        let key = match token.kind {
            TokenKind::String(value) => Identifier {
                value,
                raw: token.raw.to_string(),
                location: token.location,
            },
            ref other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a property key",
                    found: other.describe(),
                    at: token.location.start,
                });
            }
        };

        let colon = self.next("':'")?;
        if colon.kind != TokenKind::Colon {
            return Err(unexpected("':'", &colon));
        }

        let value = self.value()?;
        let location = Location::new(key.location.start, value.location().end);

        Ok(Property {
            key,
            value,
            location,
        })
    }

    fn array(&mut self, start: Point) -> Result<Value, ParseError> {
        self.enter(start)?;
        let mut children = Vec::new();

        let end = loop {
            let token = self.next("a value")?;
            if token.kind == TokenKind::RightBracket && children.is_empty() {
                break token.location.end;
            }
            children.push(self.value_from(token)?);

            let separator = self.next("',' or ']'")?;
            match separator.kind {
                TokenKind::Comma => continue,
                TokenKind::RightBracket => break separator.location.end,
                _ => return Err(unexpected("',' or ']'", &separator)),
            }
        };

        self.depth -= 1;
        Ok(Value::Array(Array {
            children,
            location: Location::new(start, end),
        }))
    }
}

fn unexpected(expected: &'static str, token: &Token<'_>) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: token.kind.describe(),
        at: token.location.start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_location() {
        let root = build_tree("{}").unwrap();
        let object = root.as_object().expect("object");

        assert!(object.children.is_empty());
        assert_eq!(object.location.start, Point { line: 1, column: 1, offset: 0 });
        assert_eq!(object.location.end, Point { line: 1, column: 3, offset: 2 });
    }

    #[test]
    fn test_property_spans() {
        let root = build_tree(r#"{"block":"x","ABC":1}"#).unwrap();
        let object = root.as_object().unwrap();

        let abc = &object.children[1];
        assert_eq!(abc.key.value, "ABC");
        assert_eq!(abc.key.raw, "\"ABC\"");
        assert_eq!(abc.key.location.start.column, 14);
        assert_eq!(abc.key.location.end.column, 19);
        assert_eq!(abc.location.end.column, 21);
    }

    #[test]
    fn test_nested_values() {
        let root = build_tree(r#"[{"a": [1, true, null]}, "s"]"#).unwrap();
        let Value::Array(array) = root else {
            panic!("Expected array");
        };
        assert_eq!(array.children.len(), 2);
        assert_eq!(array.children[1].as_str(), Some("s"));
    }

    #[test]
    fn test_object_get_uses_last_duplicate() {
        let root = build_tree(r#"{"size": "s", "size": "m"}"#).unwrap();
        let object = root.as_object().unwrap();
        assert_eq!(object.get("size").and_then(Value::as_str), Some("m"));
        assert!(object.has_key("size"));
        assert!(!object.has_key("block"));
    }

    #[test]
    fn test_as_text_keeps_number_spelling() {
        let root = build_tree(r#"{"m-col": 10}"#).unwrap();
        let object = root.as_object().unwrap();
        assert_eq!(object.get("m-col").and_then(Value::as_text), Some("10"));
    }

    #[test]
    fn test_rejects_structural_errors() {
        assert!(matches!(
            build_tree("{"),
            Err(ParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            build_tree(r#"{"a": 1,}"#),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            build_tree("[1 2]"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            build_tree("{} {}"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(build_tree(""), Err(ParseError::UnexpectedEnd { .. })));
    }

    #[test]
    fn test_depth_limit() {
        let deep = "[".repeat(MAX_DEPTH + 1) + &"]".repeat(MAX_DEPTH + 1);
        assert!(matches!(build_tree(&deep), Err(ParseError::TooDeep { .. })));

        let ok = "[".repeat(MAX_DEPTH) + &"]".repeat(MAX_DEPTH);
        assert!(build_tree(&ok).is_ok());
    }
}
