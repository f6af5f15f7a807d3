//! Reshaping of key/value objects into ordered pair lists.
//!
//! The catalog API returns external identifiers and external URLs as objects
//! with arbitrary keys (`{"spotify": "https://...", "isrc": "..."}`). GraphQL
//! has no map type, so the schema exposes them as `[{key, value}]` in the
//! order the keys appeared in the response.

use async_graphql::SimpleObject;
use serde_json::{Map, Value};

/// Key/value objects as decoded from the catalog API, insertion ordered.
pub type ExternalMap = Map<String, Value>;

/// One entry of an external identifier or external URL object.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct KeyValuePair {
    /// The key, e.g. `spotify` or `isrc`.
    pub key: String,
    /// The value. Non-string values are rendered as JSON text.
    pub value: String,
}

/// Converts a key/value object into pairs, preserving key order.
#[must_use]
pub fn key_value_pairs(map: &ExternalMap) -> Vec<KeyValuePair> {
    map.iter()
        .map(|(key, value)| KeyValuePair {
            key: key.clone(),
            value: value
                .as_str()
                .map_or_else(|| value.to_string(), String::from),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> ExternalMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_pairs_preserve_input_order() {
        let map = as_map(json!({"spotify": "url1", "isrc": "id1"}));

        assert_eq!(
            key_value_pairs(&map),
            vec![
                KeyValuePair {
                    key: "spotify".to_string(),
                    value: "url1".to_string(),
                },
                KeyValuePair {
                    key: "isrc".to_string(),
                    value: "id1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_order_is_not_alphabetical() {
        let map = as_map(json!({"upc": "1", "ean": "2", "isrc": "3"}));
        let keys: Vec<String> = key_value_pairs(&map).into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["upc", "ean", "isrc"]);
    }

    #[test]
    fn test_non_string_values_are_rendered_as_json() {
        let map = as_map(json!({"count": 3}));
        assert_eq!(key_value_pairs(&map)[0].value, "3");
    }

    #[test]
    fn test_empty_map_yields_empty_list() {
        assert!(key_value_pairs(&ExternalMap::new()).is_empty());
    }
}
