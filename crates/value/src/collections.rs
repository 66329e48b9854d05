use crate::identity::same_value_zero;
use crate::value::Value;

/// A map with insertion-ordered entries and same-value-zero key lookup:
/// primitive keys match by value (NaN matches NaN, +0 matches -0),
/// reference keys match by identity only.
#[derive(Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new() -> Self {
        MapValue { entries: Vec::new() }
    }

    /// Insert or replace the entry for `key`.
    pub fn insert(&mut self, key: Value, value: Value) {
        for entry in &mut self.entries {
            if same_value_zero(&entry.0, &key) {
                entry.1 = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.entries
            .iter()
            .find(|(k, _)| same_value_zero(k, key))
            .map(|(_, v)| v.clone())
    }

    pub fn has(&self, key: &Value) -> bool {
        self.entries.iter().any(|(k, _)| same_value_zero(k, key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)> {
        self.entries.iter()
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut map = MapValue::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A set with insertion-ordered elements and same-value-zero membership.
#[derive(Debug, Default)]
pub struct SetValue {
    items: Vec<Value>,
}

impl SetValue {
    pub fn new() -> Self {
        SetValue { items: Vec::new() }
    }

    /// Add an element; duplicates (by same-value-zero) are ignored.
    pub fn add(&mut self, value: Value) {
        if !self.has(&value) {
            self.items.push(value);
        }
    }

    pub fn has(&self, value: &Value) -> bool {
        self.items.iter().any(|item| same_value_zero(item, value))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for SetValue {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut set = SetValue::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

/// The concrete kind of a buffer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
    DataView,
    /// Node.js-style binary buffer (a `Uint8Array` subclass in the runtime).
    Buffer,
}

impl ViewKind {
    /// Internal class tag of the view.
    pub fn tag(&self) -> &'static str {
        match self {
            ViewKind::Int8 => "Int8Array",
            ViewKind::Uint8 => "Uint8Array",
            ViewKind::Uint8Clamped => "Uint8ClampedArray",
            ViewKind::Int16 => "Int16Array",
            ViewKind::Uint16 => "Uint16Array",
            ViewKind::Int32 => "Int32Array",
            ViewKind::Uint32 => "Uint32Array",
            ViewKind::Float32 => "Float32Array",
            ViewKind::Float64 => "Float64Array",
            ViewKind::BigInt64 => "BigInt64Array",
            ViewKind::BigUint64 => "BigUint64Array",
            ViewKind::DataView => "DataView",
            ViewKind::Buffer => "Buffer",
        }
    }
}

/// A typed-array or data view: a kind plus its raw byte contents.
///
/// Equality over views is byte-for-byte and deliberately kind-insensitive;
/// the kind exists for classification.
#[derive(Debug)]
pub struct ViewValue {
    pub kind: ViewKind,
    pub bytes: Vec<u8>,
}

impl ViewValue {
    pub fn new(kind: ViewKind, bytes: Vec<u8>) -> Self {
        ViewValue { kind, bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_insert_get() {
        let mut map = MapValue::new();
        map.insert(Value::from("a"), Value::from(1.0));
        map.insert(Value::from("a"), Value::from(2.0));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Value::from("a")), Some(Value::from(2.0)));
        assert_eq!(map.get(&Value::from("b")), None);
    }

    #[test]
    fn test_map_nan_key() {
        let mut map = MapValue::new();
        map.insert(Value::from(f64::NAN), Value::from("found"));
        assert!(map.has(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_map_reference_keys_by_identity() {
        let key_a = Value::array(vec![]);
        let key_b = Value::array(vec![]);

        let mut map = MapValue::new();
        map.insert(key_a.clone(), Value::from(1.0));

        assert!(map.has(&key_a));
        // Structurally identical but a different allocation.
        assert!(!map.has(&key_b));
    }

    #[test]
    fn test_set_dedup() {
        let mut set = SetValue::new();
        set.add(Value::from(1.0));
        set.add(Value::from(1.0));
        set.add(Value::from(2.0));

        assert_eq!(set.len(), 2);
        assert!(set.has(&Value::from(1.0)));
        assert!(!set.has(&Value::from(3.0)));
    }

    #[test]
    fn test_view_tags() {
        assert_eq!(ViewKind::Uint8.tag(), "Uint8Array");
        assert_eq!(ViewKind::DataView.tag(), "DataView");
        assert_eq!(ViewKind::Buffer.tag(), "Buffer");
    }
}
