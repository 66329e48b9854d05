use crate::customizer::{EntryKey, Verdict};
use crate::visit::VisitSet;
use valuekit_value::{same_value_zero, Key, Value};

/// A caller-supplied override consulted per source key. Receives the
/// object's value, the source's value, the key, and the two containers.
pub type MatchCustomizer<'a> =
    dyn FnMut(&Value, &Value, &EntryKey, &Value, &Value) -> Verdict + 'a;

/// Asymmetric subset matching.
///
/// Returns `true` when every own key of `source` exists on `object`
/// (inherited class members count) with a matching value; `object` may
/// carry any number of additional keys. An empty `source` object or array
/// therefore matches any reference-typed `object`. A primitive `source`
/// falls back to same-value-zero against `object`, ignoring structure.
///
/// Container values recurse with the same subset semantics; everything
/// else compares by same-value-zero. Never fails.
///
/// # Examples
///
/// ```
/// use valuekit_value::from_json;
/// use valuekit_compare::is_match;
/// use serde_json::json;
///
/// let object = from_json(&json!({"a": 1, "b": 2}));
/// assert!(is_match(&object, &from_json(&json!({"b": 2}))));
/// assert!(!is_match(&object, &from_json(&json!({"b": 1}))));
/// assert!(is_match(&object, &from_json(&json!({}))));
/// ```
pub fn is_match(object: &Value, source: &Value) -> bool {
    let mut ctx = MatchCtx {
        customizer: None,
        visits: VisitSet::new(),
    };
    ctx.matches(object, source)
}

/// [`is_match`] with a customizer consulted per source key.
///
/// # Examples
///
/// ```
/// use valuekit_value::{from_json, Value};
/// use valuekit_compare::{is_match_with, Verdict};
/// use serde_json::json;
///
/// let object = from_json(&json!({"greeting": "HELLO"}));
/// let source = from_json(&json!({"greeting": "hello"}));
/// let result = is_match_with(&object, &source, |value, other, _key, _obj, _src| {
///     match (value, other) {
///         (Value::String(a), Value::String(b)) => {
///             Verdict::Definite(a.to_lowercase() == b.to_lowercase())
///         }
///         _ => Verdict::Continue,
///     }
/// });
/// assert!(result);
/// ```
pub fn is_match_with<F>(object: &Value, source: &Value, mut customizer: F) -> bool
where
    F: FnMut(&Value, &Value, &EntryKey, &Value, &Value) -> Verdict,
{
    let mut ctx = MatchCtx {
        customizer: Some(&mut customizer),
        visits: VisitSet::new(),
    };
    ctx.matches(object, source)
}

struct MatchCtx<'a> {
    customizer: Option<&'a mut MatchCustomizer<'a>>,
    visits: VisitSet,
}

impl<'a> MatchCtx<'a> {
    fn matches(&mut self, object: &Value, source: &Value) -> bool {
        if same_value_zero(object, source) {
            return true;
        }
        // A primitive source ignores the object's structure entirely, and
        // same-value-zero already failed above.
        if !source.is_reference() {
            return false;
        }
        if !object.is_reference() {
            return false;
        }
        let (left, right) = match (object.ref_addr(), source.ref_addr()) {
            (Some(left), Some(right)) => (left, right),
            _ => return false,
        };
        if let Some(paired) = self.visits.active(left) {
            return paired == right;
        }
        self.visits.enter(left, right);
        let result = self.match_entries(object, source);
        self.visits.leave(left);
        result
    }

    fn match_entries(&mut self, object: &Value, source: &Value) -> bool {
        for (key, source_value) in source_entries(source) {
            let object_value = match lookup(object, &key) {
                Some(object_value) => object_value,
                None => return false,
            };
            if let Some(customizer) = self.customizer.as_mut() {
                match customizer(&object_value, &source_value, &key, object, source) {
                    Verdict::Definite(result) => {
                        if result {
                            continue;
                        }
                        return false;
                    }
                    Verdict::Continue => {}
                }
            }
            let matched = if is_container(&object_value) && is_container(&source_value) {
                self.matches(&object_value, &source_value)
            } else {
                same_value_zero(&object_value, &source_value)
            };
            if !matched {
                return false;
            }
        }
        true
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// The own entries of a source value: index keys for arrays (the upstream's
/// `length` key never appears here), own properties for objects, and
/// nothing for every other reference kind.
fn source_entries(source: &Value) -> Vec<(EntryKey, Value)> {
    match source {
        Value::Array(items) => items
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, item)| (EntryKey::Index(i), item.clone()))
            .collect(),
        Value::Object(obj) => {
            let obj = obj.borrow();
            obj.own_keys()
                .into_iter()
                .filter_map(|key| {
                    obj.get_own(&key)
                        .map(|value| (EntryKey::Prop(key), value))
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

/// `in`-operator lookup on the object side: own properties first, then the
/// prototype chain; numeric string keys reach array slots.
fn lookup(object: &Value, key: &EntryKey) -> Option<Value> {
    match (object, key) {
        (Value::Array(items), EntryKey::Index(i)) => items.borrow().get(*i).cloned(),
        (Value::Array(items), EntryKey::Prop(Key::Str(s))) => {
            let i: usize = s.parse().ok()?;
            items.borrow().get(i).cloned()
        }
        (Value::Object(obj), EntryKey::Prop(prop)) => obj.borrow().get(prop),
        (Value::Object(obj), EntryKey::Index(i)) => {
            obj.borrow().get(&Key::from(i.to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuekit_value::{from_json, ClassInfo, Obj, Proto};

    fn json(v: serde_json::Value) -> Value {
        from_json(&v)
    }

    #[test]
    fn test_empty_source_matches_anything_reference() {
        assert!(is_match(&json(serde_json::json!({"a": 1, "b": 2})), &json(serde_json::json!({}))));
        assert!(is_match(&json(serde_json::json!([1, 2, 3])), &json(serde_json::json!([]))));
        assert!(is_match(&Value::map([]), &json(serde_json::json!({}))));
    }

    #[test]
    fn test_empty_source_against_primitive_object() {
        assert!(!is_match(&Value::from(1.0), &json(serde_json::json!({}))));
    }

    #[test]
    fn test_subset_match() {
        let object = json(serde_json::json!({"a": 1, "b": 2}));
        assert!(is_match(&object, &json(serde_json::json!({"b": 2}))));
        assert!(!is_match(&object, &json(serde_json::json!({"b": 1}))));
        assert!(!is_match(&object, &json(serde_json::json!({"c": 2}))));
    }

    #[test]
    fn test_nested_subset() {
        let object = json(serde_json::json!({"a": {"x": 1, "y": 2}, "b": 3}));
        assert!(is_match(&object, &json(serde_json::json!({"a": {"x": 1}}))));
        assert!(!is_match(&object, &json(serde_json::json!({"a": {"x": 2}}))));
    }

    #[test]
    fn test_array_source_indices() {
        let object = json(serde_json::json!([1, 2, 3]));
        assert!(is_match(&object, &json(serde_json::json!([1]))));
        assert!(is_match(&object, &json(serde_json::json!([1, 2]))));
        assert!(!is_match(&object, &json(serde_json::json!([2]))));
        // Source longer than object: missing index.
        assert!(!is_match(&object, &json(serde_json::json!([1, 2, 3, 4]))));
    }

    #[test]
    fn test_numeric_string_key_reaches_array_slot() {
        let object = json(serde_json::json!([7, 8]));
        let source = Value::object([(Key::from("1"), Value::from(8.0))]);
        assert!(is_match(&object, &source));
    }

    #[test]
    fn test_primitive_source_same_value() {
        assert!(is_match(&Value::from(1.0), &Value::from(1.0)));
        assert!(is_match(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!is_match(&json(serde_json::json!({"a": 1})), &Value::from(1.0)));
    }

    #[test]
    fn test_inherited_keys_count() {
        let class = ClassInfo::with_members(
            "Greeter",
            None,
            [(Key::from("greet"), Value::from("hi"))],
        );
        let mut obj = Obj::with_proto(Proto::Class(class));
        obj.insert("name", Value::from("sam"));
        let object = Value::object_from(obj);

        // "greet" only exists through the prototype chain.
        let source = Value::object([(Key::from("greet"), Value::from("hi"))]);
        assert!(is_match(&object, &source));
    }

    #[test]
    fn test_non_container_values_by_identity() {
        let date = Value::date(0.0);
        let object = Value::object([(Key::from("d"), date.clone())]);

        let same = Value::object([(Key::from("d"), date)]);
        assert!(is_match(&object, &same));

        // A distinct date allocation is not the same value.
        let other = Value::object([(Key::from("d"), Value::date(0.0))]);
        assert!(!is_match(&object, &other));
    }

    #[test]
    fn test_cyclic_source_terminates() {
        let object = Value::object([]);
        if let Value::Object(h) = &object {
            h.borrow_mut().insert("self", object.clone());
        }
        let source = Value::object([]);
        if let Value::Object(h) = &source {
            h.borrow_mut().insert("self", source.clone());
        }
        assert!(is_match(&object, &source));
    }

    #[test]
    fn test_customizer_per_key() {
        let object = json(serde_json::json!({"n": 10}));
        let source = json(serde_json::json!({"n": 1}));
        // Any number at least as large as the source's counts as a match.
        let result = is_match_with(&object, &source, |value, other, _, _, _| {
            match (value, other) {
                (Value::Number(a), Value::Number(b)) => Verdict::Definite(a >= b),
                _ => Verdict::Continue,
            }
        });
        assert!(result);
        assert!(!is_match(&object, &source));
    }
}
