//! Basic CFON serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_cfon::{from_str, to_string, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let compact = to_string(&users)?;
    println!("Compact:\n{}\n", compact);

    let pretty = to_string_pretty(&users)?;
    println!("Pretty:\n{}\n", pretty);

    let users_back: Vec<User> = from_str(&pretty)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    // Commas are optional and comments are ignored.
    let hand_written = r#"
        # on-call rotation
        [
            { id: 1 name: "Carol" email: "carol@example.com" }
            { id: 2 name: "Dan" email: "dan@example.com" }
        ]
    "#;
    let rotation: Vec<User> = from_str(hand_written)?;
    println!("Read {} users from hand-written text", rotation.len());

    Ok(())
}
