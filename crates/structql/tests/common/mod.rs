#![allow(dead_code)]

mod mock_server;

pub use mock_server::entity_json;
pub use mock_server::MockGraphQLServer;

use serde_json::Map;
use serde_json::Value;

/// Shorthand for building a JSON object literal as a variables map.
pub fn variables(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got `{other}`"),
    }
}
