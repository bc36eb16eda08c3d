//! Key-path traversal over the nested JSON mapping.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Split a dotted path (`"materials.pla.name"`) into its keys.
///
/// An empty string is the empty path; empty segments are kept so that
/// `"a..b"` addresses the key `""` under `a`.
pub fn split_dotted(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Join keys back into a dotted path for error messages.
pub(super) fn join_keys<S: AsRef<str>>(keys: &[S]) -> String {
    keys.iter()
        .map(|key| key.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}

/// Follow `keys` from `root`, stopping at the first non-object or missing key.
///
/// The empty path resolves to `root` itself.
pub(super) fn lookup<'a, S: AsRef<str>>(root: &'a Value, keys: &[S]) -> Option<&'a Value> {
    let mut current = root;
    for key in keys {
        current = current.as_object()?.get(key.as_ref())?;
    }
    Some(current)
}

/// Assign `value` at `keys`, inserting empty objects for missing intermediates.
///
/// The mapping is left untouched when an error is returned.
pub(super) fn assign<S: AsRef<str>>(
    root: &mut Value,
    keys: &[S],
    value: Value,
) -> Result<(), ConfigError> {
    let Some((last, parents)) = keys.split_last() else {
        return Err(ConfigError::EmptyPath);
    };
    check_parents(root, parents)?;

    let mut current = root;
    for (idx, key) in parents.iter().enumerate() {
        current = current
            .as_object_mut()
            .ok_or_else(|| ConfigError::NotAnObject {
                path: join_keys(&parents[..idx]),
            })?
            .entry(key.as_ref().to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    current
        .as_object_mut()
        .ok_or_else(|| ConfigError::NotAnObject {
            path: join_keys(parents),
        })?
        .insert(last.as_ref().to_string(), value);
    Ok(())
}

/// Verify every existing intermediate on the path is an object.
fn check_parents<S: AsRef<str>>(root: &Value, parents: &[S]) -> Result<(), ConfigError> {
    let mut current = root;
    for (idx, key) in parents.iter().enumerate() {
        let map = current.as_object().ok_or_else(|| ConfigError::NotAnObject {
            path: join_keys(&parents[..idx]),
        })?;
        match map.get(key.as_ref()) {
            None => return Ok(()),
            Some(next @ Value::Object(_)) => current = next,
            Some(_) => {
                return Err(ConfigError::NotAnObject {
                    path: join_keys(&parents[..=idx]),
                });
            }
        }
    }
    Ok(())
}
