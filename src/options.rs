//! Configuration options for CFON parsing and serialization.
//!
//! - [`StringifyOptions`]: output layout (indentation, raw strings)
//! - [`ParseOptions`]: parser limits
//!
//! ## Examples
//!
//! ```rust
//! use serde_cfon::{to_string_with_options, StringifyOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! let compact = to_string_with_options(&data, StringifyOptions::new()).unwrap();
//! assert_eq!(compact, "{x: 1, y: 2}");
//!
//! let pretty = to_string_with_options(&data, StringifyOptions::pretty()).unwrap();
//! assert_eq!(pretty, "{\n  x: 1,\n  y: 2\n}");
//! ```

/// Default nesting limit for [`ParseOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Layout options for [`stringify`](crate::stringify) and the `to_string*` family.
///
/// `indent == 0` selects compact single-line output, entries separated by
/// `", "`. Any other value puts each entry on its own line, indented
/// `indent` spaces per nesting level.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::StringifyOptions;
///
/// let options = StringifyOptions::pretty()
///     .with_indent(4)
///     .with_raw_strings(true);
/// assert_eq!(options.indent, 4);
/// assert!(options.use_raw_strings);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringifyOptions {
    pub indent: usize,
    /// Write strings that contain a newline as `"""` raw strings.
    pub use_raw_strings: bool,
}

impl StringifyOptions {
    /// Creates default options (compact, escaped strings).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cfon::StringifyOptions;
    ///
    /// let options = StringifyOptions::new();
    /// assert_eq!(options.indent, 0);
    /// assert!(options.is_compact());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for multi-line output with 2-space indentation.
    #[must_use]
    pub fn pretty() -> Self {
        StringifyOptions {
            indent: 2,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level. `0` means compact.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables triple-quoted output for multi-line strings.
    #[must_use]
    pub fn with_raw_strings(mut self, use_raw_strings: bool) -> Self {
        self.use_raw_strings = use_raw_strings;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.indent == 0
    }
}

/// Options for [`parse_with_options`](crate::parse_with_options).
///
/// # Examples
///
/// ```rust
/// use serde_cfon::{parse_with_options, Error, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// assert!(parse_with_options(b"[[1]]", &options).is_ok());
/// assert!(matches!(
///     parse_with_options(b"[[[1]]]", &options),
///     Err(Error::RecursionLimitExceeded { limit: 2, .. })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of objects and arrays.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
