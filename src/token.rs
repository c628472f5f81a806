//! Lexical tokens produced by the [`Lexer`](crate::lexer::Lexer).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,

    String,
    RawString,
    Integer,
    Float,

    // Keywords
    True,
    False,
    Null,

    Identifier,
    Eof,
}

impl TokenKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String => "string",
            TokenKind::RawString => "raw string",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single token borrowed from the source buffer.
///
/// For [`TokenKind::String`] and [`TokenKind::RawString`] the lexeme is the
/// content between the delimiters (undecoded for quoted strings; for raw
/// strings, without the newline that may follow the opening `"""`). For every
/// other kind it is the exact source text. `line` and `col` are 1-based and
/// point at the first byte of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a [u8],
    pub line: usize,
    pub col: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a [u8], line: usize, col: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            col,
        }
    }
}
