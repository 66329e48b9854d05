//! Bridge from `serde_json` values into the runtime model.
//!
//! JSON covers only a slice of the value universe (no dates, maps, symbols,
//! …), but it is the most convenient fixture language for tests and for
//! callers that already hold JSON data.

use crate::value::Value;

/// Convert a JSON value into a runtime [`Value`].
///
/// Objects and arrays become fresh allocations; key order is preserved.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use valuekit_value::from_json;
///
/// let value = from_json(&json!({"a": [1, null, "x"]}));
/// let other = from_json(&json!({"a": [1, null, "x"]}));
/// // Fresh allocations: identical structure, distinct identity.
/// assert_ne!(value.ref_addr(), other.ref_addr());
/// ```
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::string(s),
        serde_json::Value::Array(items) => {
            Value::array(items.iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => Value::object(
            map.iter()
                .map(|(k, v)| (k.as_str().into(), from_json(v))),
        ),
    }
}
