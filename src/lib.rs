//! # serde_cfon
//!
//! A parser and Serde-compatible serializer for CFON, a minimal configuration
//! format: objects, arrays, strings, triple-quoted raw strings, numbers,
//! booleans, `null` and `#` line comments.
//!
//! ## What does CFON look like?
//!
//! ```text
//! # service definition
//! {
//!     name: "api"
//!     port: 8080
//!     ratio: 0.75
//!     hosts: ["a.internal", "b.internal"]
//!     banner: """
//! Welcome.
//! No escapes \n here."""
//! }
//! ```
//!
//! Keys are bare identifiers or quoted strings. The comma between entries is
//! optional, so comma-separated and line-separated styles both parse.
//!
//! ## Grammar
//!
//! ```text
//! document   := value
//! value      := object | array | string | raw_string | number
//!             | "true" | "false" | "null"
//! object     := "{" ( key ":" value ","? )* "}"
//! key        := identifier | string
//! array      := "[" ( value ","? )* "]"
//! identifier := [A-Za-z_] [A-Za-z0-9_-]*
//! string     := '"' ( char | escape )* '"'
//! escape     := '\' ( '"' | '\' | 'n' | 'r' | 't' ) | '\u{' hex+ '}'
//! raw_string := '"""' newline? .* '"""'
//! number     := '-'? digit+ ( '.' digit+ )? ( [eE] [+-]? digit+ )?
//! comment    := '#' .* end_of_line
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_cfon::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, r#"{id: 123, name: "Alice", active: true}"#);
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## The value tree
//!
//! [`parse`] builds an owned [`Value`]; [`stringify`] writes one back.
//! Object keys are unique and keep document order.
//!
//! ```rust
//! use serde_cfon::{parse, stringify, StringifyOptions, Value};
//!
//! let value = parse(b"{ b: 1, a: [true, null] }").unwrap();
//! assert_eq!(value.get("b"), Some(&Value::Integer(1)));
//! assert_eq!(
//!     stringify(&value, &StringifyOptions::new()),
//!     "{b: 1, a: [true, null]}"
//! );
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serializing and reading back a struct
//! - **`macro.rs`** - building values with the `cfon!` macro
//! - **`dynamic_values.rs`** - inspecting a parsed [`Value`]
//! - **`custom_options.rs`** - compact and indented layouts
//! - **`raw_strings.rs`** - multi-line strings
//!
//! Run any of them with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod token;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::Map;
pub use options::{ParseOptions, StringifyOptions};
pub use ser::{Serializer, ValueSerializer};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Parses a CFON document into a [`Value`] tree with default limits.
///
/// The whole input must be one value, optionally surrounded by whitespace
/// and comments.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{parse, Error, Value};
///
/// assert_eq!(parse(b"  42 # answer").unwrap(), Value::Integer(42));
/// assert!(matches!(parse(b""), Err(Error::UnexpectedToken { .. })));
/// assert!(matches!(parse(b"1 2"), Err(Error::TrailingCharacters { .. })));
/// ```
///
/// # Errors
///
/// Returns the first lexical or syntactic error, with its line and column.
pub fn parse(input: &[u8]) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses a CFON document with explicit [`ParseOptions`].
///
/// # Errors
///
/// Returns the first error encountered, including
/// [`Error::RecursionLimitExceeded`] when nesting exceeds `options.max_depth`.
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    log::trace!("parsing {} bytes", input.len());
    let mut parser = parser::Parser::with_options(input, options);
    parser.parse_document().map_err(|err| {
        log::debug!("parse failed: {err}");
        err
    })
}

/// Writes a [`Value`] tree as CFON text.
///
/// Never fails: every `Value` has a textual form. Non-finite floats are
/// written as `null`.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{cfon, stringify, StringifyOptions};
///
/// let value = cfon!({ "x": [1, 2] });
/// assert_eq!(stringify(&value, &StringifyOptions::new()), "{x: [1, 2]}");
/// assert_eq!(
///     stringify(&value, &StringifyOptions::pretty()),
///     "{\n  x: [\n    1,\n    2\n  ]\n}"
/// );
/// ```
#[must_use]
pub fn stringify(value: &Value, options: &StringifyOptions) -> String {
    log::trace!("stringifying {} (indent {})", value.kind(), options.indent);
    ser::write_value(value, options.clone())
}

/// Serialize any `T: Serialize` to a compact CFON string.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "{x: 1, y: 2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a map with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, StringifyOptions::default())
}

/// Serialize any `T: Serialize` to an indented CFON string.
///
/// # Errors
///
/// Returns an error if the value contains a map with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, StringifyOptions::pretty())
}

/// Serialize any `T: Serialize` to a CFON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{to_string_with_options, StringifyOptions};
///
/// let text = to_string_with_options(
///     &vec!["one\ntwo"],
///     StringifyOptions::new().with_raw_strings(true),
/// )
/// .unwrap();
/// assert_eq!(text, "[\"\"\"one\ntwo\"\"\"]");
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a map with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: StringifyOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    log::trace!("serializing with indent {}", options.indent);
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.get("x"), Some(&Value::Integer(1)));
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a map with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Serialize any `T: Serialize` to a writer as compact CFON.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, StringifyOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{to_writer_with_options, StringifyOptions};
///
/// let mut buffer = Vec::new();
/// to_writer_with_options(&mut buffer, &[1, 2], StringifyOptions::pretty()).unwrap();
/// assert_eq!(buffer, b"[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: StringifyOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of CFON text.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{ x: 1\n  y: 2 }").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid CFON or cannot be deserialized
/// to type `T`. Syntax errors carry line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_slice(s.as_bytes())
}

/// Deserialize an instance of type `T` from bytes of CFON text.
///
/// Invalid UTF-8 is only an error inside string literals, where it is
/// reported as [`Error::InvalidUtf8`].
///
/// # Errors
///
/// Returns an error if the bytes are not valid CFON or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    log::trace!("deserializing {} bytes", v.len());
    let mut deserializer = Deserializer::from_slice(v);
    T::deserialize(&mut deserializer)
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|err| {
            log::debug!("deserialization failed: {err}");
            err
        })
}

/// Deserialize an instance of type `T` from an I/O stream of CFON.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::from_reader;
/// use std::io::Cursor;
///
/// let nums: Vec<i32> = from_reader(Cursor::new(b"[1, 2]")).unwrap();
/// assert_eq!(nums, [1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid CFON, or the
/// data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{cfon, from_value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(cfon!({ "x": 1, "y": 2 })).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(de::ValueDeserializer::new(value))
}
