//! CFON deserialization.
//!
//! [`Deserializer`] drives a [`Parser`] and hands each parsed [`Value`] to
//! serde. Values are decoded into the owned tree first, so a deserialization
//! error never leaves partially built state behind.
//!
//! ```rust
//! use serde_cfon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: Vec<String> }
//!
//! let data: Data = from_str(r#"{ x: 1, y: ["a", "b"] }"#).unwrap();
//! assert_eq!(data, Data { x: 1, y: vec!["a".into(), "b".into()] });
//! ```
//!
//! ## Enums
//!
//! Unit variants are read from their name as a string. Other variants are
//! read from a single-entry object keyed by the variant name. The serializer
//! writes only the payload of non-unit variants, so enums that need to round
//! trip through text should use `#[serde(untagged)]`.

use crate::parser::Parser;
use crate::{Error, Map, ParseOptions, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// The CFON text deserializer.
///
/// # Examples
///
/// ```rust
/// use serde_cfon::Deserializer;
/// use serde::Deserialize;
///
/// let mut de = Deserializer::from_str("[1, 2, 3]");
/// let nums = Vec::<u8>::deserialize(&mut de).unwrap();
/// de.end().unwrap();
/// assert_eq!(nums, [1, 2, 3]);
/// ```
pub struct Deserializer<'de> {
    parser: Parser<'de>,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::from_slice(input.as_bytes())
    }

    pub fn from_slice(input: &'de [u8]) -> Self {
        Deserializer {
            parser: Parser::new(input),
        }
    }

    pub fn with_options(input: &'de [u8], options: &ParseOptions) -> Self {
        Deserializer {
            parser: Parser::with_options(input, options),
        }
    }

    /// Checks that nothing but whitespace and comments follows the value.
    pub fn end(&mut self) -> Result<()> {
        self.parser.finish()
    }

    fn next_value(&mut self) -> Result<ValueDeserializer> {
        self.parser.parse_value().map(ValueDeserializer::new)
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.next_value()?.deserialize_any(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.next_value()?.deserialize_option(visitor)
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.next_value()?.deserialize_newtype_struct(name, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.next_value()?.deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(MapKeyDeserializer { key }).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(Error::custom(format!(
                "expected unit variant, found {}",
                other.kind()
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            other => Err(Error::custom(format!(
                "expected tuple variant, found {}",
                other.kind()
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            other => Err(Error::custom(format!(
                "expected struct variant, found {}",
                other.kind()
            ))),
        }
    }
}

/// Object keys are always strings; integer-keyed maps parse them back.
struct MapKeyDeserializer {
    key: String,
}

macro_rules! deserialize_integer_key {
    ($($method:ident => $visit:ident),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                match self.key.parse() {
                    Ok(n) => visitor.$visit(n),
                    Err(_) => Err(Error::custom(format!(
                        "expected integer map key, found \"{}\"",
                        self.key
                    ))),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for MapKeyDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key)
    }

    deserialize_integer_key! {
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.key.into_deserializer())
    }

    forward_to_deserialize_any! {
        bool f32 f64 char str string bytes byte_buf option unit unit_struct
        seq tuple tuple_struct map struct identifier ignored_any
    }
}

/// Deserializes Rust values out of an owned [`Value`].
pub(crate) struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub(crate) fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Integer(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) => {
                let mut entries = obj.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer { variant, value })
                    }
                    _ => Err(Error::custom(
                        "expected an object with a single variant entry",
                    )),
                }
            }
            other => Err(Error::custom(format!(
                "expected enum, found {}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_str, from_value};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Server {
        host: String,
        port: u16,
        tags: Vec<String>,
        #[serde(default)]
        timeout: Option<f64>,
    }

    #[test]
    fn test_struct_from_text() {
        let text = r#"
            # primary
            {
                host: "localhost"
                port: 8080
                tags: ["a", "b"]
            }
        "#;
        let server: Server = from_str(text).unwrap();
        assert_eq!(
            server,
            Server {
                host: "localhost".to_string(),
                port: 8080,
                tags: vec!["a".to_string(), "b".to_string()],
                timeout: None,
            }
        );
    }

    #[test]
    fn test_option() {
        assert_eq!(from_str::<Option<i32>>("null").unwrap(), None);
        assert_eq!(from_str::<Option<i32>>("5").unwrap(), Some(5));
        let server: Server =
            from_str("{ host: \"h\", port: 1, tags: [], timeout: 2.5 }").unwrap();
        assert_eq!(server.timeout, Some(2.5));
    }

    #[test]
    fn test_integer_range_checks() {
        assert_eq!(from_str::<u8>("255").unwrap(), 255);
        assert!(from_str::<u8>("256").is_err());
        assert!(from_str::<u32>("-1").is_err());
        assert_eq!(from_str::<f64>("3").unwrap(), 3.0);
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Meters(f64);

    #[test]
    fn test_newtype_struct() {
        assert_eq!(from_str::<Meters>("1.5").unwrap(), Meters(1.5));
        assert_eq!(
            from_value::<Meters>(Value::Float(2.0)).unwrap(),
            Meters(2.0)
        );
    }

    #[derive(Deserialize, Debug, PartialEq)]
    enum Level {
        Low,
        High,
        Custom(u8),
        Range { min: u8, max: u8 },
    }

    #[test]
    fn test_enums() {
        assert_eq!(from_str::<Level>("\"High\"").unwrap(), Level::High);
        assert_eq!(from_str::<Level>("{ Custom: 7 }").unwrap(), Level::Custom(7));
        assert_eq!(
            from_str::<Level>("{ Range: { min: 1, max: 9 } }").unwrap(),
            Level::Range { min: 1, max: 9 }
        );
        assert!(from_str::<Level>("{ Low: null, High: null }").is_err());
        assert!(from_str::<Level>("\"Medium\"").is_err());
        assert!(from_str::<Level>("1").is_err());
        assert_eq!(from_str::<Vec<Level>>("[\"Low\"]").unwrap(), vec![Level::Low]);
    }

    #[test]
    fn test_map_keys_keep_order() {
        let map: BTreeMap<String, i32> = from_str("{ b: 2, a: 1 }").unwrap();
        assert_eq!(map.get("a"), Some(&1));

        let by_id: BTreeMap<u16, bool> = from_str(r#"{ "7": true, "300": false }"#).unwrap();
        assert_eq!(by_id.get(&300), Some(&false));
        assert!(from_str::<BTreeMap<u8, bool>>("{ x: true }").is_err());

        let pairs: Vec<(String, bool)> = from_str("[[\"x\", true]]").unwrap();
        assert_eq!(pairs, vec![("x".to_string(), true)]);
    }

    #[test]
    fn test_end_rejects_trailing_value() {
        let mut de = Deserializer::from_str("1 2");
        assert_eq!(i32::deserialize(&mut de).unwrap(), 1);
        assert!(matches!(
            de.end(),
            Err(Error::TrailingCharacters { line: 1, col: 3, .. })
        ));
    }

    #[test]
    fn test_parse_errors_keep_position() {
        let err = from_str::<Vec<i32>>("[1,\n  @]").unwrap_err();
        assert_eq!(err.position(), Some((2, 3)));
    }

    #[test]
    fn test_with_options_limits_depth() {
        let options = ParseOptions::new().with_max_depth(1);

        let mut de = Deserializer::with_options(b"[1]", &options);
        assert_eq!(Vec::<i32>::deserialize(&mut de).unwrap(), [1]);
        de.end().unwrap();

        let mut de = Deserializer::with_options(b"[[1]]", &options);
        assert!(matches!(
            Vec::<Vec<i32>>::deserialize(&mut de),
            Err(Error::RecursionLimitExceeded { limit: 1, line: 1, col: 2 })
        ));
    }
}
