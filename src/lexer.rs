//! CFON tokenizer.
//!
//! The [`Lexer`] pulls one token at a time out of a byte buffer. Tokens borrow
//! their lexeme from the buffer; nothing is copied or decoded here. String
//! escapes are left for the parser, numbers are classified but not converted.
//!
//! Whitespace (spaces, tabs), `#` line comments and line breaks (`\n`, `\r`,
//! `\r\n`) are skipped between tokens. Once the input is exhausted every call
//! to [`Lexer::next_token`] returns a [`TokenKind::Eof`] token.
//!
//! ```rust
//! use serde_cfon::lexer::Lexer;
//! use serde_cfon::token::TokenKind;
//!
//! let mut lexer = Lexer::new(b"{ port: 8080 }");
//! let kinds: Vec<_> = std::iter::from_fn(|| {
//!     let token = lexer.next_token().unwrap();
//!     (token.kind != TokenKind::Eof).then_some(token.kind)
//! })
//! .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::LeftBrace,
//!         TokenKind::Identifier,
//!         TokenKind::Colon,
//!         TokenKind::Integer,
//!         TokenKind::RightBrace,
//!     ]
//! );
//! ```

use crate::token::{Token, TokenKind};
use crate::{Error, Result};

pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current `(line, column)`, both 1-based.
    #[must_use]
    pub fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn at_triple_quote(&self) -> bool {
        self.input[self.position..].starts_with(b"\"\"\"")
    }

    /// Consumes one byte, keeping line/column in step.
    ///
    /// `\r\n` counts as a single line break: the `\r` is treated as an ordinary
    /// byte when a `\n` follows it.
    fn bump(&mut self) {
        let Some(byte) = self.peek() else {
            return;
        };
        self.position += 1;
        match byte {
            b'\n' => self.new_line(),
            b'\r' if self.peek() != Some(b'\n') => self.new_line(),
            _ => self.column += 1,
        }
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.bump(),
                b'#' => {
                    while !matches!(self.peek(), None | Some(b'\n') | Some(b'\r')) {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    /// Returns the next token, or a lexical error.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_trivia();

        let start = self.position;
        let (line, col) = self.location();

        let Some(byte) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, &self.input[start..], line, col));
        };

        let kind = match byte {
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b':' => TokenKind::Colon,
            b',' => TokenKind::Comma,
            b'"' if self.at_triple_quote() => return self.raw_string(line, col),
            b'"' => return self.string(line, col),
            b'-' | b'0'..=b'9' => return Ok(self.number(line, col)),
            b if is_ident_start(b) => return Ok(self.identifier(line, col)),
            _ => return Err(Error::UnexpectedCharacter { byte, line, col }),
        };

        self.bump();
        Ok(Token::new(
            kind,
            &self.input[start..self.position],
            line,
            col,
        ))
    }

    fn string(&mut self, line: usize, col: usize) -> Result<Token<'a>> {
        self.bump();
        let start = self.position;

        loop {
            match self.peek() {
                None => return Err(Error::UnterminatedString { line, col }),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.bump();
                    if self.peek().is_none() {
                        return Err(Error::UnterminatedString { line, col });
                    }
                    self.bump();
                }
                Some(_) => self.bump(),
            }
        }

        let content = &self.input[start..self.position];
        self.bump();
        Ok(Token::new(TokenKind::String, content, line, col))
    }

    fn raw_string(&mut self, line: usize, col: usize) -> Result<Token<'a>> {
        for _ in 0..3 {
            self.bump();
        }

        match self.peek() {
            Some(b'\n') => self.bump(),
            Some(b'\r') => {
                self.bump();
                if self.peek() == Some(b'\n') {
                    self.bump();
                }
            }
            _ => {}
        }

        let start = self.position;
        while !self.at_triple_quote() {
            if self.peek().is_none() {
                return Err(Error::UnterminatedRawString { line, col });
            }
            self.bump();
        }

        let content = &self.input[start..self.position];
        for _ in 0..3 {
            self.bump();
        }
        Ok(Token::new(TokenKind::RawString, content, line, col))
    }

    fn number(&mut self, line: usize, col: usize) -> Token<'a> {
        let start = self.position;
        let mut is_float = false;

        if self.peek() == Some(b'-') {
            self.bump();
        }
        self.digits();

        if self.peek() == Some(b'.') {
            is_float = true;
            self.bump();
            self.digits();
        }

        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.bump();
            }
            self.digits();
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, &self.input[start..self.position], line, col)
    }

    fn digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
    }

    fn identifier(&mut self, line: usize, col: usize) -> Token<'a> {
        let start = self.position;
        self.bump();
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }

        let lexeme = &self.input[start..self.position];
        let kind = match lexeme {
            b"true" => TokenKind::True,
            b"false" => TokenKind::False,
            b"null" => TokenKind::Null,
            _ => TokenKind::Identifier,
        };
        Token::new(kind, lexeme, line, col)
    }

    #[cfg(test)]
    fn remaining(&self) -> &'a [u8] {
        &self.input[self.position..]
    }
}

/// Bytes allowed after the first character of an identifier.
#[inline]
pub(crate) fn is_ident_continue(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-')
}

/// Bytes allowed as the first character of an identifier.
#[inline]
pub(crate) fn is_ident_start(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}
