//! Using the cfon! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_cfon::{cfon, to_string_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = cfon!(null);
    let bool_val = cfon!(true);
    let number = cfon!(42);
    let text = cfon!("Hello, CFON!");

    println!("Primitives:");
    println!("  null:   {}", null_val);
    println!("  bool:   {}", bool_val);
    println!("  number: {}", number);
    println!("  text:   {}\n", text);

    let numbers = cfon!([1, 2, 3, 4, 5]);
    let mixed = cfon!([1, "two", true, null, (-5)]);

    println!("Arrays:");
    println!("  Numbers: {}", numbers);
    println!("  Mixed:   {}\n", mixed);

    let config = cfon!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432,
            "name": "mydb"
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}\n", to_string_pretty(&config)?);

    let items = vec![
        cfon!({"id": 1, "status": "active"}),
        cfon!({"id": 2, "status": "pending"}),
        cfon!({"id": 3, "status": "completed"}),
    ];

    let summary = cfon!({
        "total": 3,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", to_string_pretty(&summary)?);

    if let Some(name) = config.get("app").and_then(|app| app.get("name")).and_then(Value::as_str) {
        println!("Accessing values:");
        println!("  App name: {}", name);
    }
    if let Some(features) = config.get("features").and_then(Value::as_array) {
        println!("  Features: {}", features.len());
    }

    Ok(())
}
