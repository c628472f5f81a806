//! Parsing into a Value tree and inspecting it at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_cfon::{from_value, parse, stringify, to_value, StringifyOptions, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn describe(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                println!("{pad}{key} ({})", child.kind());
                describe(child, depth + 1);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                println!("{pad}[{i}] ({})", child.kind());
                describe(child, depth + 1);
            }
        }
        _ => {}
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let source = br#"
        # server settings
        {
            host: "localhost"
            port: 8080
            ratio: 0.75
            features: ["auth", "logging", "metrics"]
            "max connections": 512
            debug: true
        }
    "#;

    let config = parse(source)?;
    println!("Parsed tree:");
    describe(&config, 1);
    println!();

    if let Some(port) = config.get("port").and_then(Value::as_i64) {
        println!("port = {}", port);
    }
    if let Some(ratio) = config.get("ratio").and_then(Value::as_f64) {
        println!("ratio = {}", ratio);
    }

    let mut config = config;
    if let Some(map) = config.as_object_mut() {
        map.insert("port".to_string(), Value::from(9090));
        map.remove("debug");
    }
    println!("\nEdited:\n{}\n", stringify(&config, &StringifyOptions::pretty()));

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    println!("User as Value: {}", user_value);

    let user_back: User = from_value(user_value)?;
    println!("Back to struct: {:?}", user_back);

    Ok(())
}
