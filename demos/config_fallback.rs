//! Layered configuration lookup with lazy fallbacks.
//!
//! Demonstrates keyed lookup over maps with nullable values (a missing key
//! and an explicitly unset key both read as absence), `or_else` chaining
//! across layers, and total elimination with `get_or_else`.

use perhaps::{Maybe, MaybeLookup};
use std::collections::HashMap;

fn layered_setting(
    overrides: &HashMap<String, Option<String>>,
    defaults: &HashMap<String, Option<String>>,
    key: &str,
) -> Maybe<String> {
    overrides
        .lookup(&key.to_string())
        .map(|value| value.clone())
        .or_else(|| defaults.lookup(&key.to_string()).map(|value| value.clone()))
}

fn main() {
    let mut overrides: HashMap<String, Option<String>> = HashMap::new();
    overrides.insert("host".to_string(), Some("10.0.0.7".to_string()));
    overrides.insert("port".to_string(), None); // explicitly unset

    let mut defaults: HashMap<String, Option<String>> = HashMap::new();
    defaults.insert("host".to_string(), Some("localhost".to_string()));
    defaults.insert("port".to_string(), Some("8080".to_string()));

    for key in ["host", "port", "timeout"] {
        let value = layered_setting(&overrides, &defaults, key)
            .get_or_else(|| "<unset>".to_string());
        println!("{key} = {value}");
    }
}
