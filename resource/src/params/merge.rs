//! Recursive JSON merge

use serde_json::Value;

/// Merge `overrides` into `base`
///
/// Where both sides hold an object under the same key the two objects are
/// merged recursively. Otherwise the value from `overrides` wins, and keys
/// only present in `base` are kept.
pub fn merge(base: Value, overrides: Value) -> Value {
    match (base, overrides) {
        (Value::Object(mut merged), Value::Object(overrides)) => {
            for (key, value) in overrides {
                let next = match merged.remove(&key) {
                    Some(existing) => merge(existing, value),
                    None => value,
                };
                merged.insert(key, next);
            }
            Value::Object(merged)
        }
        (_, overrides) => overrides,
    }
}
