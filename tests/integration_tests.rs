use serde::{Deserialize, Serialize};
use serde_cfon::{
    cfon, from_slice, from_str, from_value, parse, stringify, to_string, to_string_pretty,
    to_string_with_options, to_value, Error, Map, StringifyOptions, Value,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
    note: Option<String>,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

fn order() -> Order {
    Order {
        order_id: 12345,
        customer: alice(),
        items: vec![
            Product {
                sku: "WIDGET-1".to_string(),
                price: 9.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-7".to_string(),
                price: 14.5,
                quantity: 1,
            },
        ],
        total: 34.48,
        note: None,
    }
}

#[test]
fn test_simple_struct() {
    let text = to_string(&alice()).unwrap();
    assert_eq!(
        text,
        r#"{id: 123, name: "Alice", active: true, tags: ["admin", "developer"]}"#
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(alice(), user_back);
}

#[test]
fn test_nested_struct() {
    let text = to_string_pretty(&order()).unwrap();
    let expected = r#"{
  order_id: 12345,
  customer: {
    id: 123,
    name: "Alice",
    active: true,
    tags: [
      "admin",
      "developer"
    ]
  },
  items: [
    {
      sku: "WIDGET-1",
      price: 9.99,
      quantity: 2
    },
    {
      sku: "GADGET-7",
      price: 14.5,
      quantity: 1
    }
  ],
  total: 34.48,
  note: null
}"#;
    assert_eq!(text, expected);

    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order(), order_back);
}

#[test]
fn test_hand_written_document() {
    let text = r#"
        # order placed through the web shop
        {
            order_id: 7
            customer: {
                id: 1, name: "Bob", active: false
                tags: []
            }
            items: [
                { sku: "A", price: 1.0, quantity: 3 }   # bulk
            ]
            total: 3.0
            note: """
Leave at the door.
Ring twice."""
        }
    "#;
    let parsed: Order = from_str(text).unwrap();
    assert_eq!(parsed.customer.name, "Bob");
    assert_eq!(parsed.items[0].quantity, 3);
    assert_eq!(
        parsed.note.as_deref(),
        Some("Leave at the door.\nRing twice.")
    );
}

#[test]
fn test_primitives() {
    assert_roundtrip(&42i32);
    assert_roundtrip(&3.5f64);
    assert_roundtrip(&true);
    assert_roundtrip(&false);
    assert_roundtrip(&'x');
    assert_roundtrip(&"hello world".to_string());
    assert_roundtrip(&vec![1, 2, 3, 4, 5]);
    assert_roundtrip(&(1u8, "two".to_string(), [3.0f32, 4.5]));
}

#[test]
fn test_options() {
    assert_roundtrip(&Some(5));
    assert_roundtrip(&None::<String>);
    assert_roundtrip(&vec![Some(1), None, Some(3)]);
    assert_eq!(to_string(&vec![Some(1), None]).unwrap(), "[1, null]");
}

#[test]
fn test_layout_options() {
    let user = alice();
    for options in [
        StringifyOptions::new(),
        StringifyOptions::pretty(),
        StringifyOptions::new().with_indent(4),
        StringifyOptions::new().with_raw_strings(true),
    ] {
        let text = to_string_with_options(&user, options).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }
}

#[test]
fn test_to_value() {
    let value = to_value(&alice()).unwrap();

    match &value {
        Value::Object(obj) => {
            assert_eq!(obj.get("id"), Some(&Value::Integer(123)));
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("active"), Some(&Value::Bool(true)));
            assert_eq!(
                obj.keys().map(String::as_str).collect::<Vec<_>>(),
                ["id", "name", "active", "tags"]
            );
        }
        _ => panic!("Expected object"),
    }

    let user: User = from_value(value).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn test_empty_collections() {
    let empty_vec: Vec<i32> = vec![];
    assert_roundtrip(&empty_vec);
    assert_eq!(to_string_pretty(&empty_vec).unwrap(), "[]");

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Empty {}

    assert_roundtrip(&Empty {});
    assert_eq!(to_string_pretty(&Empty {}).unwrap(), "{}");
}

#[test]
fn test_special_strings() {
    let special_strings = vec![
        "",
        "hello, world",
        "line1\nline2",
        "tab\there",
        "carriage\rreturn",
        " leading space",
        "trailing space ",
        "true",
        "null",
        "123",
        "# not a comment",
        "\"quoted\"",
        "back\\slash",
        "\"\"\"",
        "nul\u{0}and bell\u{7}",
        "emoji \u{1F980} and accents é",
    ];

    for s in special_strings {
        assert_roundtrip(&s.to_string());
        let raw = to_string_with_options(&s, StringifyOptions::new().with_raw_strings(true)).unwrap();
        assert_eq!(from_str::<String>(&raw).unwrap(), s, "raw form was {raw:?}");
    }
}

#[test]
fn test_numbers() {
    assert_roundtrip(&0i8);
    assert_roundtrip(&127i8);
    assert_roundtrip(&-128i8);
    assert_roundtrip(&32767i16);
    assert_roundtrip(&-32768i16);
    assert_roundtrip(&2147483647i32);
    assert_roundtrip(&-2147483648i32);
    assert_roundtrip(&9223372036854775807i64);
    assert_roundtrip(&-9223372036854775808i64);

    assert_roundtrip(&255u8);
    assert_roundtrip(&65535u16);
    assert_roundtrip(&4294967295u32);
    assert_roundtrip(&9223372036854775807u64);

    assert_roundtrip(&0.0f32);
    assert_roundtrip(&0.1f32);
    assert_roundtrip(&-2.5f32);
    assert_roundtrip(&4.25f64);
    assert_roundtrip(&-5.75f64);
    assert_roundtrip(&1e300f64);
    assert_roundtrip(&f64::MIN_POSITIVE);
}

#[test]
fn test_floats_stay_floats() {
    assert_eq!(to_string(&2.0f64).unwrap(), "2.0");
    assert_eq!(parse(b"2.0").unwrap(), Value::Float(2.0));
    assert_eq!(to_string(&f64::NAN).unwrap(), "null");
    assert_eq!(to_string(&f32::NEG_INFINITY).unwrap(), "null");
}

fn assert_wide_integer_readable<T: Serialize>(x: &T) {
    let text = to_string(x).unwrap();
    let via_value = stringify(&to_value(x).unwrap(), &StringifyOptions::new());
    assert_eq!(text, via_value);
    assert!(matches!(parse(text.as_bytes()), Ok(Value::Float(_))), "{text}");
}

#[test]
fn test_integers_outside_i64_stay_readable() {
    assert_wide_integer_readable(&u64::MAX);
    assert_wide_integer_readable(&(i64::MAX as u64 + 1));
    assert_wide_integer_readable(&u128::MAX);
    assert_wide_integer_readable(&i128::MIN);
    assert_wide_integer_readable(&i128::MAX);

    assert_eq!(to_string(&(i64::MAX as u64)).unwrap(), i64::MAX.to_string());
    assert_eq!(
        parse(to_string(&i64::MAX).unwrap().as_bytes()),
        Ok(Value::Integer(i64::MAX))
    );
}

#[derive(Serialize)]
struct Listener {
    port: u16,
    #[serde(flatten)]
    extra: BTreeMap<String, u16>,
}

#[test]
fn test_flattened_key_collision_is_rejected() {
    let mut extra = BTreeMap::new();
    extra.insert("port".to_string(), 9090);
    let listener = Listener { port: 8080, extra };

    assert!(matches!(to_string(&listener), Err(Error::Custom(_))));
    assert!(matches!(to_value(&listener), Err(Error::Custom(_))));

    let mut extra = BTreeMap::new();
    extra.insert("backlog".to_string(), 128);
    let listener = Listener { port: 8080, extra };
    let text = to_string(&listener).unwrap();
    assert_eq!(text, "{port: 8080, backlog: 128}");
    assert_eq!(parse(text.as_bytes()).unwrap(), to_value(&listener).unwrap());
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Status {
    Active,
    Suspended,
    #[serde(rename = "on-hold")]
    OnHold,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
enum Setting {
    Flag(bool),
    Count(i64),
    Name(String),
    Range { min: i64, max: i64 },
    List(Vec<Setting>),
}

#[test]
fn test_unit_enums_use_names() {
    assert_eq!(to_string(&Status::Active).unwrap(), "\"Active\"");
    assert_eq!(to_string(&Status::OnHold).unwrap(), "\"on-hold\"");
    assert_roundtrip(&Status::Suspended);
    assert_roundtrip(&vec![Status::OnHold, Status::Active]);
}

#[test]
fn test_untagged_enums_roundtrip() {
    let settings = vec![
        Setting::Flag(true),
        Setting::Count(-3),
        Setting::Name("primary".to_string()),
        Setting::Range { min: 1, max: 10 },
        Setting::List(vec![Setting::Count(1), Setting::Flag(false)]),
    ];
    let text = to_string(&settings).unwrap();
    assert_eq!(
        text,
        r#"[true, -3, "primary", {min: 1, max: 10}, [1, false]]"#
    );
    let back: Vec<Setting> = from_str(&text).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn test_maps() {
    let mut scores = BTreeMap::new();
    scores.insert("alice".to_string(), 10);
    scores.insert("bob smith".to_string(), 7);
    assert_eq!(to_string(&scores).unwrap(), r#"{alice: 10, "bob smith": 7}"#);
    assert_roundtrip(&scores);

    let mut by_id = HashMap::new();
    by_id.insert(1u32, "one".to_string());
    by_id.insert(2u32, "two".to_string());
    assert_roundtrip(&by_id);

    let mut nested: BTreeMap<String, Vec<bool>> = BTreeMap::new();
    nested.insert("flags".to_string(), vec![true, false]);
    assert_roundtrip(&nested);
}

#[test]
fn test_unsupported_map_keys() {
    let mut map = HashMap::new();
    map.insert((1, 2), "tuple key");
    assert!(matches!(to_string(&map), Err(Error::UnsupportedType(_))));
    assert!(matches!(to_value(&map), Err(Error::UnsupportedType(_))));
}

#[test]
fn test_value_deserializes_from_text() {
    let value: Value = from_str("{ z: 1, a: [2.5, \"s\", null] }").unwrap();
    assert_eq!(value, cfon!({ "z": 1, "a": [2.5, "s", null] }));
    assert_eq!(value, parse(b"{ z: 1, a: [2.5, \"s\", null] }").unwrap());
}

#[test]
fn test_duplicate_keys_rejected_everywhere() {
    assert!(matches!(
        from_str::<Value>("{ a: 1, a: 2 }"),
        Err(Error::DuplicateKey { .. })
    ));
    assert!(matches!(
        from_str::<BTreeMap<String, i32>>("{ a: 1, a: 2 }"),
        Err(Error::DuplicateKey { .. })
    ));
}

#[test]
fn test_from_slice_with_comments_and_crlf() {
    let bytes = b"# users\r\n[\r\n  1, # first\r\n  2\r\n]\r\n";
    let ids: Vec<u8> = from_slice(bytes).unwrap();
    assert_eq!(ids, [1, 2]);
}

#[test]
fn test_type_mismatch_is_custom_error() {
    let err = from_str::<User>("{ id: \"x\", name: \"n\", active: true, tags: [] }").unwrap_err();
    assert!(matches!(err, Error::Custom(_)));
    assert_eq!(err.position(), None);

    let err = from_str::<User>("{ id: 1 }").unwrap_err();
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn test_serde_json_interop() {
    let json = serde_json::json!({
        "active": true,
        "id": 5,
        "ratio": 0.5,
        "tags": ["x", null]
    });

    let value = to_value(&json).unwrap();
    let mut expected = Map::new();
    expected.insert("active".to_string(), Value::Bool(true));
    expected.insert("id".to_string(), Value::Integer(5));
    expected.insert("ratio".to_string(), Value::Float(0.5));
    expected.insert(
        "tags".to_string(),
        Value::Array(vec![Value::from("x"), Value::Null]),
    );
    assert_eq!(value, Value::Object(expected));

    let back: serde_json::Value = from_value(value.clone()).unwrap();
    assert_eq!(back, json);

    let text = to_string(&json).unwrap();
    assert_eq!(text, r#"{active: true, id: 5, ratio: 0.5, tags: ["x", null]}"#);
    assert_eq!(serde_json::to_value(&value).unwrap(), json);
}

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let text = to_string(original).unwrap();
    let deserialized: T = from_str(&text).unwrap();
    assert_eq!(*original, deserialized, "text was {text}");
}
