//! Error types for CFON parsing and serialization.
//!
//! Every failure is reported through the single [`Error`] enum. Parse errors
//! carry the 1-based line and column of the token that triggered them, so a
//! caller can point at the offending spot in the source.
//!
//! ## Error Categories
//!
//! - **Lexical**: unterminated strings, stray characters
//! - **Syntactic**: a token that does not fit the grammar at that point
//! - **Semantic**: duplicate object keys
//! - **Escapes**: bad `\` sequences and invalid Unicode scalars
//! - **Numeric**: literals that do not fit `i64`/`f64`
//! - **Serialization**: shapes that cannot be written as CFON (non-string map keys)
//!
//! ## Examples
//!
//! ```rust
//! use serde_cfon::{parse, Error};
//!
//! let err = parse(b"{ a: 1, a: 2 }").unwrap_err();
//! assert!(matches!(err, Error::DuplicateKey { .. }));
//! assert_eq!(err.position(), Some((1, 9)));
//! ```

use crate::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing CFON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A quoted string reached end of input before its closing quote.
    #[error("unterminated string starting at line {line}, column {col}")]
    UnterminatedString { line: usize, col: usize },

    /// A triple-quoted raw string reached end of input before its closing `"""`.
    #[error("unterminated raw string starting at line {line}, column {col}")]
    UnterminatedRawString { line: usize, col: usize },

    /// A byte that cannot start any token.
    #[error("unexpected character '{}' at line {line}, column {col}", .byte.escape_ascii())]
    UnexpectedCharacter { byte: u8, line: usize, col: usize },

    /// A token that cannot start a value.
    #[error("unexpected {found} at line {line}, column {col}")]
    UnexpectedToken {
        found: TokenKind,
        line: usize,
        col: usize,
    },

    /// An object key was not followed by `:`.
    #[error("expected ':' after object key, found {found} at line {line}, column {col}")]
    ExpectedColon {
        found: TokenKind,
        line: usize,
        col: usize,
    },

    /// An object was not closed with `}`.
    #[error("expected '}}', found {found} at line {line}, column {col}")]
    ExpectedRightBrace {
        found: TokenKind,
        line: usize,
        col: usize,
    },

    /// An array was not closed with `]`.
    #[error("expected ']', found {found} at line {line}, column {col}")]
    ExpectedRightBracket {
        found: TokenKind,
        line: usize,
        col: usize,
    },

    /// An object entry did not start with a string or identifier key.
    #[error("expected object key, found {found} at line {line}, column {col}")]
    ExpectedKey {
        found: TokenKind,
        line: usize,
        col: usize,
    },

    /// The same key appeared twice in one object.
    #[error("duplicate key \"{key}\" at line {line}, column {col}")]
    DuplicateKey { key: String, line: usize, col: usize },

    /// A backslash followed by a character that is not a known escape.
    #[error("invalid escape sequence '\\{}' in string at line {line}, column {col}", .byte.escape_ascii())]
    InvalidEscape { byte: u8, line: usize, col: usize },

    /// A `\u{...}` escape beyond U+10FFFF.
    #[error("code point in \\u{{...}} escape is too large in string at line {line}, column {col}")]
    CodepointTooLarge { line: usize, col: usize },

    /// A `\u{...}` escape naming a UTF-16 surrogate.
    #[error("\\u{{{value:x}}} is a surrogate, not a Unicode scalar value, in string at line {line}, column {col}")]
    InvalidSurrogate { value: u32, line: usize, col: usize },

    /// A numeric literal that does not parse as `i64`/`f64`.
    #[error("invalid number '{literal}' at line {line}, column {col}")]
    InvalidNumber {
        literal: String,
        line: usize,
        col: usize,
    },

    /// String content that is not valid UTF-8.
    #[error("string at line {line}, column {col} is not valid UTF-8")]
    InvalidUtf8 { line: usize, col: usize },

    /// Objects/arrays nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at line {line}, column {col}")]
    RecursionLimitExceeded { limit: usize, line: usize, col: usize },

    /// Input continued after the root value.
    #[error("trailing {found} after document at line {line}, column {col}")]
    TrailingCharacters {
        found: TokenKind,
        line: usize,
        col: usize,
    },

    /// A value whose shape has no CFON representation.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised by a `Serialize`/`Deserialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Returns the `(line, column)` the error points at, if it came from the parser.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cfon::parse;
    ///
    /// let err = parse(b"[1, 2\n").unwrap_err();
    /// assert_eq!(err.position(), Some((2, 1)));
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Error::UnterminatedString { line, col }
            | Error::UnterminatedRawString { line, col }
            | Error::UnexpectedCharacter { line, col, .. }
            | Error::UnexpectedToken { line, col, .. }
            | Error::ExpectedColon { line, col, .. }
            | Error::ExpectedRightBrace { line, col, .. }
            | Error::ExpectedRightBracket { line, col, .. }
            | Error::ExpectedKey { line, col, .. }
            | Error::DuplicateKey { line, col, .. }
            | Error::InvalidEscape { line, col, .. }
            | Error::CodepointTooLarge { line, col }
            | Error::InvalidSurrogate { line, col, .. }
            | Error::InvalidNumber { line, col, .. }
            | Error::InvalidUtf8 { line, col }
            | Error::RecursionLimitExceeded { line, col, .. }
            | Error::TrailingCharacters { line, col, .. } => Some((line, col)),
            Error::UnsupportedType(_) | Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// Creates an unsupported type error for shapes that cannot be written as CFON.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cfon::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = Error::ExpectedColon {
            found: TokenKind::Integer,
            line: 3,
            col: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3, column 7"));
        assert!(msg.contains("integer"));
    }

    #[test]
    fn test_display_escapes_bytes() {
        let err = Error::UnexpectedCharacter {
            byte: b'\n',
            line: 1,
            col: 1,
        };
        assert!(err.to_string().contains("'\\n'"));

        let err = Error::InvalidEscape {
            byte: b'q',
            line: 1,
            col: 1,
        };
        assert!(err.to_string().contains("'\\q'"));
    }

    #[test]
    fn test_position() {
        let err = Error::DuplicateKey {
            key: "a".to_string(),
            line: 2,
            col: 4,
        };
        assert_eq!(err.position(), Some((2, 4)));
        assert_eq!(Error::custom("boom").position(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref msg) if msg == "stream closed"));
        assert_eq!(err.position(), None);
    }
}
