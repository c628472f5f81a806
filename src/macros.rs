/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Any other leaf is converted with
/// [`to_value`](crate::to_value), falling back to `null` if that fails.
/// Negative numbers need parentheses so they form a single token.
///
/// ```rust
/// use serde_cfon::{cfon, Value};
///
/// let value = cfon!({
///     "name": "api",
///     "ports": [80, 443],
///     "offset": (-1),
///     "tls": null
/// });
/// assert_eq!(value.get("offset"), Some(&Value::Integer(-1)));
/// assert_eq!(value.to_string(), r#"{name: "api", ports: [80, 443], offset: -1, tls: null}"#);
/// ```
#[macro_export]
macro_rules! cfon {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::cfon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::cfon!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
