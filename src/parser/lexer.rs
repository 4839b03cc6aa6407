//! JSON Lexer
//!
//! Position-tracking tokenization of JSON text.
//! Every token records where it starts and ends so the tree can report
//! exact spans for diagnostics.

use crate::parser::ast::{Location, Point};
use crate::parser::error::ParseError;

/// Token types in JSON
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    /// String literal with escapes already resolved
    String(String),
    Number(f64),
    True,
    False,
    Null,
}

impl TokenKind {
    /// Short human-readable name used in parse errors
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::LeftBracket => "'['".to_string(),
            TokenKind::RightBracket => "']'".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::String(_) => "string".to_string(),
            TokenKind::Number(_) => "number".to_string(),
            TokenKind::True => "'true'".to_string(),
            TokenKind::False => "'false'".to_string(),
            TokenKind::Null => "'null'".to_string(),
        }
    }
}

/// A token with its source text and span
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub raw: &'a str,
    pub location: Location,
}

/// Streaming lexer over a complete document
pub struct Lexer<'a> {
    text: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current position of the lexer
    pub fn point(&self) -> Point {
        Point {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Produce the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, ParseError> {
        self.skip_whitespace();

        let start = self.point();
        let Some(ch) = self.peek_char() else {
            return Ok(None);
        };

        let kind = match ch {
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            '"' => self.lex_string()?,
            '-' | '0'..='9' => self.lex_number()?,
            c if c.is_ascii_alphabetic() => self.lex_keyword()?,
            found => {
                return Err(ParseError::UnexpectedCharacter { found, at: start });
            }
        };

        let end = self.point();
        Ok(Some(Token {
            kind,
            raw: &self.text[start.offset..end.offset],
            location: Location::new(start, end),
        }))
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// Consume one character, keeping line/column in step.
    /// Columns count UTF-16 code units.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += ch.len_utf16();
        }
        Some(ch)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek_char() {
            self.bump();
        }
    }

    fn lex_string(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.point();
        self.bump();

        let mut value = String::new();
        loop {
            let at = self.point();
            match self.bump() {
                None => return Err(ParseError::UnterminatedString { at: start }),
                Some('"') => return Ok(TokenKind::String(value)),
                Some('\\') => value.push(self.lex_escape(at)?),
                Some(c) if (c as u32) < 0x20 => {
                    return Err(ParseError::ControlCharacter { at });
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn lex_escape(&mut self, at: Point) -> Result<char, ParseError> {
        let ch = match self.bump() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => return self.lex_unicode_escape(at),
            _ => return Err(ParseError::InvalidEscape { at }),
        };
        Ok(ch)
    }

    fn lex_unicode_escape(&mut self, at: Point) -> Result<char, ParseError> {
        let high = self.lex_hex4(at)?;

        if (0xD800..0xDC00).contains(&high) {
            // A high surrogate is only valid as the first half of a pair
            if self.bump() != Some('\\') || self.bump() != Some('u') {
                return Err(ParseError::InvalidEscape { at });
            }
            let low = self.lex_hex4(at)?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(ParseError::InvalidEscape { at });
            }
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code).ok_or(ParseError::InvalidEscape { at });
        }

        char::from_u32(high).ok_or(ParseError::InvalidEscape { at })
    }

    fn lex_hex4(&mut self, at: Point) -> Result<u32, ParseError> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or(ParseError::InvalidEscape { at })?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn lex_number(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.point();

        if self.peek_char() == Some('-') {
            self.bump();
        }

        match self.peek_char() {
            Some('0') => {
                self.bump();
            }
            Some('1'..='9') => {
                self.eat_digits();
            }
            _ => return Err(ParseError::InvalidNumber { at: start }),
        }

        if self.peek_char() == Some('.') {
            self.bump();
            if !self.eat_digits() {
                return Err(ParseError::InvalidNumber { at: start });
            }
        }

        if let Some('e' | 'E') = self.peek_char() {
            self.bump();
            if let Some('+' | '-') = self.peek_char() {
                self.bump();
            }
            if !self.eat_digits() {
                return Err(ParseError::InvalidNumber { at: start });
            }
        }

        self.text[start.offset..self.offset]
            .parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| ParseError::InvalidNumber { at: start })
    }

    /// Consume a run of ASCII digits, returning whether any were present
    fn eat_digits(&mut self) -> bool {
        let mut any = false;
        while let Some('0'..='9') = self.peek_char() {
            self.bump();
            any = true;
        }
        any
    }

    fn lex_keyword(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.point();
        while self.peek_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.bump();
        }

        match &self.text[start.offset..self.offset] {
            "true" => Ok(TokenKind::True),
            "false" => Ok(TokenKind::False),
            "null" => Ok(TokenKind::Null),
            literal => Err(ParseError::InvalidLiteral {
                literal: literal.to_string(),
                at: start,
            }),
        }
    }
}
