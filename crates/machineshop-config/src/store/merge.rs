//! JSON merge helpers for filling gaps from the built-in defaults.

use serde_json::Value;

/// Fill keys missing from `base` with values from `defaults`, recursively.
///
/// Existing values in `base` always win, including when their type differs
/// from the default. Returns the number of keys inserted.
pub(super) fn fill_missing(base: &mut Value, defaults: &Value) -> usize {
    match (base, defaults) {
        (Value::Object(base_map), Value::Object(default_map)) => {
            let mut inserted = 0;
            for (key, value) in default_map {
                match base_map.get_mut(key) {
                    Some(existing) => inserted += fill_missing(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                        inserted += 1;
                    }
                }
            }
            inserted
        }
        _ => 0,
    }
}
