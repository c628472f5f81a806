//! Multi-line strings with triple-quoted raw literals.
//!
//! Run with: cargo run --example raw_strings

use serde::{Deserialize, Serialize};
use serde_cfon::{from_str, to_string_with_options, StringifyOptions};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Template {
    name: String,
    body: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let template = Template {
        name: "welcome".to_string(),
        body: "Hello {user},\n\nPaths like C:\\temp are kept as-is.\nBye.".to_string(),
    };

    let escaped = to_string_with_options(&template, StringifyOptions::pretty())?;
    println!("Escaped strings:\n{}\n", escaped);

    let raw_options = StringifyOptions::pretty().with_raw_strings(true);
    let raw = to_string_with_options(&template, raw_options)?;
    println!("Raw strings:\n{}\n", raw);

    let back: Template = from_str(&raw)?;
    assert_eq!(back, template);
    println!("✓ Raw form reads back identically");

    // Raw strings never interpret escapes.
    let literal: String = from_str(r#""""\n is two characters here""""#)?;
    println!("Raw literal: {:?}", literal);

    Ok(())
}
