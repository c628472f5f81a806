use serde_cfon::{cfon, stringify, Map, StringifyOptions, Value};

#[test]
fn test_cfon_macro_null() {
    let value = cfon!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_cfon_macro_booleans() {
    assert_eq!(cfon!(true), Value::Bool(true));
    assert_eq!(cfon!(false), Value::Bool(false));
}

#[test]
fn test_cfon_macro_numbers() {
    assert_eq!(cfon!(42), Value::Integer(42));
    assert_eq!(cfon!(3.5), Value::Float(3.5));
    assert_eq!(cfon!(-123), Value::Integer(-123));
    assert_eq!(cfon!([(-1), (-2.5)]), Value::Array(vec![Value::Integer(-1), Value::Float(-2.5)]));
}

#[test]
fn test_cfon_macro_strings() {
    assert_eq!(cfon!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(cfon!(""), Value::String(String::new()));
}

#[test]
fn test_cfon_macro_arrays() {
    assert_eq!(cfon!([]), Value::Array(vec![]));

    let arr = cfon!([1, "two", null, [true]]);
    let elements = arr.as_array().expect("array");
    assert_eq!(elements.len(), 4);
    assert_eq!(elements[0], Value::Integer(1));
    assert_eq!(elements[1], Value::from("two"));
    assert_eq!(elements[2], Value::Null);
    assert_eq!(elements[3], Value::Array(vec![Value::Bool(true)]));
}

#[test]
fn test_cfon_macro_objects() {
    assert_eq!(cfon!({}), Value::Object(Map::new()));

    let obj = cfon!({
        "name": "Alice",
        "age": 30,
        "not bare": false,
    });
    let map = obj.as_object().expect("object");
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("name"), Some(&Value::from("Alice")));
    assert_eq!(map.get("age"), Some(&Value::Integer(30)));
    assert_eq!(
        stringify(&obj, &StringifyOptions::new()),
        r#"{name: "Alice", age: 30, "not bare": false}"#
    );
}

#[test]
fn test_cfon_macro_nested() {
    let nested = cfon!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    assert_eq!(nested.get("count"), Some(&Value::Integer(42)));
    let user = nested.get("user").expect("user");
    assert_eq!(user.get("id").and_then(Value::as_i64), Some(123));
    assert_eq!(user.get("name").and_then(Value::as_str), Some("Bob"));
    assert_eq!(user.get("active").and_then(Value::as_bool), Some(true));

    let tags = nested.get("tags").and_then(Value::as_array).expect("tags");
    assert_eq!(tags, &vec![Value::from("admin"), Value::from("developer")]);

    assert_eq!(
        stringify(&nested, &StringifyOptions::pretty()),
        "{\n  user: {\n    id: 123,\n    name: \"Bob\",\n    active: true\n  },\n  tags: [\n    \"admin\",\n    \"developer\"\n  ],\n  count: 42\n}"
    );
}

#[test]
fn test_cfon_value_methods() {
    let null_val = cfon!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let int_val = cfon!(7);
    assert!(int_val.is_integer() && int_val.is_number());
    assert_eq!(int_val.as_f64(), Some(7.0));

    let float_val = cfon!(0.5);
    assert!(float_val.is_float());
    assert_eq!(float_val.as_i64(), None);

    let str_val = cfon!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));
    assert_eq!(str_val.kind(), "string");

    let obj_val = cfon!({"key": "value"});
    assert!(obj_val.is_object());
    assert_eq!(obj_val.as_object().map(Map::len), Some(1));
}

#[test]
fn test_cfon_macro_expression_leaves() {
    #[derive(serde::Serialize)]
    struct Endpoint {
        host: &'static str,
        port: u16,
    }

    let endpoint = Endpoint { host: "localhost", port: 8080 };
    let retries: Option<u8> = None;
    let value = cfon!({ "endpoint": endpoint, "retries": retries });
    assert_eq!(
        value,
        cfon!({ "endpoint": { "host": "localhost", "port": 8080 }, "retries": null })
    );
}
