//! Recursive-descent CFON parser.
//!
//! The [`Parser`] owns a [`Lexer`] and keeps at most one token of lookahead.
//! It never backtracks and never recovers: the first error aborts the parse
//! and whatever was built so far is dropped on the way out.
//!
//! ```rust
//! use serde_cfon::parser::Parser;
//! use serde_cfon::Value;
//!
//! let mut parser = Parser::new(b"[1, 2]\n# trailing comment\n");
//! let value = parser.parse_document().unwrap();
//! assert_eq!(value, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
//! ```

use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::token::{Token, TokenKind};
use crate::{Error, Map, Result, Value};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<Token<'a>>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &'a [u8], options: &ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(input),
            lookahead: None,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Returns the lookahead token, pulling it from the lexer if the buffer is empty.
    fn peek(&mut self) -> Result<Token<'a>> {
        match self.lookahead {
            Some(token) => Ok(token),
            None => {
                let token = self.lexer.next_token()?;
                self.lookahead = Some(token);
                Ok(token)
            }
        }
    }

    /// Consumes the lookahead token.
    fn bump(&mut self) -> Result<Token<'a>> {
        let token = self.peek()?;
        self.lookahead = None;
        Ok(token)
    }

    fn eat(&mut self, kind: TokenKind) -> Result<bool> {
        if self.peek()?.kind == kind {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Parses a single value that must span the whole input.
    pub fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.finish()?;
        Ok(value)
    }

    /// Fails with [`Error::TrailingCharacters`] unless only trivia remains.
    pub fn finish(&mut self) -> Result<()> {
        let token = self.peek()?;
        if token.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(Error::TrailingCharacters {
                found: token.kind,
                line: token.line,
                col: token.col,
            })
        }
    }

    /// Parses the next value.
    pub fn parse_value(&mut self) -> Result<Value> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::String => {
                self.bump()?;
                decode_string(&token).map(Value::String)
            }
            TokenKind::RawString => {
                self.bump()?;
                raw_string(&token).map(Value::String)
            }
            TokenKind::Integer => {
                self.bump()?;
                parse_number::<i64>(&token).map(Value::Integer)
            }
            TokenKind::Float => {
                self.bump()?;
                parse_number::<f64>(&token).map(Value::Float)
            }
            TokenKind::True => {
                self.bump()?;
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.bump()?;
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.bump()?;
                Ok(Value::Null)
            }
            found => Err(Error::UnexpectedToken {
                found,
                line: token.line,
                col: token.col,
            }),
        }
    }

    fn enter(&mut self, open: &Token<'a>) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::RecursionLimitExceeded {
                limit: self.max_depth,
                line: open.line,
                col: open.col,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value> {
        let open = self.bump()?;
        self.enter(&open)?;

        let mut map = Map::new();
        loop {
            let token = self.peek()?;
            if matches!(token.kind, TokenKind::RightBrace | TokenKind::Eof) {
                break;
            }

            let key = self.parse_key()?;

            let colon = self.bump()?;
            if colon.kind != TokenKind::Colon {
                return Err(Error::ExpectedColon {
                    found: colon.kind,
                    line: colon.line,
                    col: colon.col,
                });
            }

            let value = self.parse_value()?;
            if map.contains_key(&key) {
                return Err(Error::DuplicateKey {
                    key,
                    line: token.line,
                    col: token.col,
                });
            }
            map.insert(key, value);

            // Commas between entries are optional; a line break works just as well.
            self.eat(TokenKind::Comma)?;
        }

        let close = self.bump()?;
        if close.kind != TokenKind::RightBrace {
            return Err(Error::ExpectedRightBrace {
                found: close.kind,
                line: close.line,
                col: close.col,
            });
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        let open = self.bump()?;
        self.enter(&open)?;

        let mut elements = Vec::new();
        loop {
            let token = self.peek()?;
            if matches!(token.kind, TokenKind::RightBracket | TokenKind::Eof) {
                break;
            }

            elements.push(self.parse_value()?);
            self.eat(TokenKind::Comma)?;
        }

        let close = self.bump()?;
        if close.kind != TokenKind::RightBracket {
            return Err(Error::ExpectedRightBracket {
                found: close.kind,
                line: close.line,
                col: close.col,
            });
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    fn parse_key(&mut self) -> Result<String> {
        let token = self.bump()?;
        match token.kind {
            TokenKind::String => decode_string(&token),
            // Identifiers are ASCII by construction.
            TokenKind::Identifier => Ok(String::from_utf8_lossy(token.lexeme).into_owned()),
            found => Err(Error::ExpectedKey {
                found,
                line: token.line,
                col: token.col,
            }),
        }
    }
}

fn parse_number<T: std::str::FromStr>(token: &Token<'_>) -> Result<T> {
    std::str::from_utf8(token.lexeme)
        .ok()
        .and_then(|text| text.parse::<T>().ok())
        .ok_or_else(|| Error::InvalidNumber {
            literal: String::from_utf8_lossy(token.lexeme).into_owned(),
            line: token.line,
            col: token.col,
        })
}

fn raw_string(token: &Token<'_>) -> Result<String> {
    String::from_utf8(token.lexeme.to_vec()).map_err(|_| Error::InvalidUtf8 {
        line: token.line,
        col: token.col,
    })
}

/// Decodes the escapes in a quoted string's content.
fn decode_string(token: &Token<'_>) -> Result<String> {
    let bytes = token.lexeme;
    let (line, col) = (token.line, token.col);
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }

        let Some(&escape) = bytes.get(i + 1) else {
            return Err(Error::InvalidEscape {
                byte: b'\\',
                line,
                col,
            });
        };
        i += 2;

        match escape {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'"' => out.push(b'"'),
            b'\\' => out.push(b'\\'),
            b'u' => {
                let (ch, consumed) = decode_unicode_escape(&bytes[i..], line, col)?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                i += consumed;
            }
            byte => return Err(Error::InvalidEscape { byte, line, col }),
        }
    }

    String::from_utf8(out).map_err(|_| Error::InvalidUtf8 { line, col })
}

/// Decodes `{<hex>}` following `\u`. Returns the scalar and the bytes consumed.
fn decode_unicode_escape(bytes: &[u8], line: usize, col: usize) -> Result<(char, usize)> {
    let invalid = Error::InvalidEscape {
        byte: b'u',
        line,
        col,
    };

    if bytes.first() != Some(&b'{') {
        return Err(invalid);
    }
    let Some(close) = bytes.iter().position(|&b| b == b'}') else {
        return Err(invalid);
    };
    let digits = &bytes[1..close];
    if digits.is_empty() {
        return Err(invalid);
    }

    let mut value: u32 = 0;
    for &digit in digits {
        let nibble = match digit {
            b'0'..=b'9' => digit - b'0',
            b'a'..=b'f' => digit - b'a' + 10,
            b'A'..=b'F' => digit - b'A' + 10,
            _ => return Err(invalid),
        };
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(u32::from(nibble)))
            .ok_or(Error::CodepointTooLarge { line, col })?;
    }

    if value > 0x10FFFF {
        return Err(Error::CodepointTooLarge { line, col });
    }
    if (0xD800..=0xDFFF).contains(&value) {
        return Err(Error::InvalidSurrogate { value, line, col });
    }

    let ch = char::from_u32(value).ok_or(Error::CodepointTooLarge { line, col })?;
    Ok((ch, close + 1))
}
