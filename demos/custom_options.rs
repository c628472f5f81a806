//! Choosing an output layout with StringifyOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_cfon::{parse_with_options, to_string_with_options, ParseOptions, StringifyOptions};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    limits: Limits,
}

#[derive(Debug, Serialize, Deserialize)]
struct Limits {
    max_connections: u32,
    timeouts_ms: Vec<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        limits: Limits {
            max_connections: 512,
            timeouts_ms: vec![100, 250, 1000],
        },
    };

    println!("Compact (indent 0):");
    println!("{}\n", to_string_with_options(&config, StringifyOptions::new())?);

    println!("Pretty (indent 2):");
    println!("{}\n", to_string_with_options(&config, StringifyOptions::pretty())?);

    println!("Indent 4:");
    let wide = StringifyOptions::new().with_indent(4);
    println!("{}\n", to_string_with_options(&config, wide)?);

    // Parser limits guard against pathologically nested input.
    let strict = ParseOptions::new().with_max_depth(2);
    match parse_with_options(b"{ a: { b: { c: 1 } } }", &strict) {
        Ok(_) => println!("parsed"),
        Err(err) => println!("Rejected with max_depth 2: {}", err),
    }

    Ok(())
}
