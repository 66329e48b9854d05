use crate::customizer::{EntryKey, Verdict};
use crate::visit::VisitSet;
use valuekit_value::{same_value_zero, BoxedValue, Handle, MapValue, SetValue, Value};

/// A caller-supplied override consulted for every non-identical value pair
/// before default comparison. Receives the pair, its position in the parent
/// container, and the parent pair itself (absent at the top level).
pub type EqualCustomizer<'a> =
    dyn FnMut(&Value, &Value, Option<&EntryKey>, Option<(&Value, &Value)>) -> Verdict + 'a;

/// Structural deep equality.
///
/// Two values are equal when they are identical (same-value-zero, so NaN
/// equals NaN), or when they belong to the same category and their contents
/// are pairwise deeply equal: dates by epoch milliseconds, regexps by source
/// and flags, errors by name and message, buffer views byte-for-byte, maps
/// by identical keys with deeply-equal values, sets order-insensitively,
/// arrays order-sensitively, and objects key-for-key with identical
/// prototypes. Cyclic structures terminate. Never fails.
///
/// # Examples
///
/// ```
/// use valuekit_value::{from_json, Value};
/// use valuekit_compare::is_equal;
/// use serde_json::json;
///
/// let a = from_json(&json!({"x": [1, {"y": true}]}));
/// let b = from_json(&json!({"x": [1, {"y": true}]}));
/// assert!(is_equal(&a, &b));
///
/// assert!(is_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
/// assert!(!is_equal(&Value::array(vec![]), &Value::object([])));
/// ```
pub fn is_equal(value: &Value, other: &Value) -> bool {
    let mut ctx = EqualCtx {
        customizer: None,
        visits: VisitSet::new(),
    };
    ctx.equal(value, other, None, None)
}

/// [`is_equal`] with a customizer threaded through every recursive call.
///
/// A [`Verdict::Definite`] result is authoritative for that pair; on
/// [`Verdict::Continue`] the default rules apply.
///
/// # Examples
///
/// ```
/// use valuekit_value::Value;
/// use valuekit_compare::{is_equal_with, Verdict};
///
/// // Treat every pair of strings as equal.
/// let a = Value::array(vec![Value::from("left")]);
/// let b = Value::array(vec![Value::from("right")]);
/// let result = is_equal_with(&a, &b, |value, other, _key, _parents| {
///     match (value, other) {
///         (Value::String(_), Value::String(_)) => Verdict::Definite(true),
///         _ => Verdict::Continue,
///     }
/// });
/// assert!(result);
/// ```
pub fn is_equal_with<F>(value: &Value, other: &Value, mut customizer: F) -> bool
where
    F: FnMut(&Value, &Value, Option<&EntryKey>, Option<(&Value, &Value)>) -> Verdict,
{
    let mut ctx = EqualCtx {
        customizer: Some(&mut customizer),
        visits: VisitSet::new(),
    };
    ctx.equal(value, other, None, None)
}

struct EqualCtx<'a> {
    customizer: Option<&'a mut EqualCustomizer<'a>>,
    visits: VisitSet,
}

impl<'a> EqualCtx<'a> {
    fn consult(
        &mut self,
        value: &Value,
        other: &Value,
        key: Option<&EntryKey>,
        parents: Option<(&Value, &Value)>,
    ) -> Verdict {
        match self.customizer.as_mut() {
            Some(customizer) => customizer(value, other, key, parents),
            None => Verdict::Continue,
        }
    }

    fn equal(
        &mut self,
        value: &Value,
        other: &Value,
        key: Option<&EntryKey>,
        parents: Option<(&Value, &Value)>,
    ) -> bool {
        if same_value_zero(value, other) {
            return true;
        }
        match self.consult(value, other, key, parents) {
            Verdict::Definite(result) => return result,
            Verdict::Continue => {}
        }
        let (left, right) = match (value.ref_addr(), other.ref_addr()) {
            (Some(left), Some(right)) => (left, right),
            // Non-identical primitives were ruled out above; a primitive
            // against a reference never compares structurally.
            _ => return false,
        };
        // A left reference already being compared reports its recorded
        // pairing instead of descending again.
        if let Some(paired) = self.visits.active(left) {
            return paired == right;
        }
        self.visits.enter(left, right);
        let result = self.equal_by_kind(value, other);
        self.visits.leave(left);
        result
    }

    fn equal_by_kind(&mut self, value: &Value, other: &Value) -> bool {
        match (value, other) {
            (Value::Date(a), Value::Date(b)) => {
                a.epoch_ms == b.epoch_ms || (a.epoch_ms.is_nan() && b.epoch_ms.is_nan())
            }
            (Value::RegExp(a), Value::RegExp(b)) => a.source == b.source && a.flags == b.flags,
            // Stack traces are ignored.
            (Value::Error(a), Value::Error(b)) => a.name == b.name && a.message == b.message,
            // Kind-insensitive: views compare as raw byte sequences.
            (Value::View(a), Value::View(b)) => a.borrow().bytes == b.borrow().bytes,
            (Value::ArrayBuffer(a), Value::ArrayBuffer(b)) => *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => self.equal_maps(value, other, a, b),
            (Value::Set(a), Value::Set(b)) => self.equal_sets(value, other, a, b),
            (Value::Array(a), Value::Array(b)) => self.equal_arrays(value, other, a, b),
            (Value::Boxed(a), Value::Boxed(b)) => equal_boxed(a, b),
            (Value::Object(a), Value::Object(b)) => self.equal_objects(value, other, a, b),
            _ => false,
        }
    }

    fn equal_maps(
        &mut self,
        value: &Value,
        other: &Value,
        a: &Handle<MapValue>,
        b: &Handle<MapValue>,
    ) -> bool {
        let a = a.borrow();
        let b = b.borrow();
        if a.len() != b.len() {
            return false;
        }
        // Keys must match exactly (same-value-zero); only values recurse.
        for (key, left_value) in a.iter() {
            let right_value = match b.get(key) {
                Some(right_value) => right_value,
                None => return false,
            };
            if !self.equal(left_value, &right_value, None, Some((value, other))) {
                return false;
            }
        }
        true
    }

    fn equal_sets(
        &mut self,
        value: &Value,
        other: &Value,
        a: &Handle<SetValue>,
        b: &Handle<SetValue>,
    ) -> bool {
        let a = a.borrow();
        let b = b.borrow();
        if a.len() != b.len() {
            return false;
        }
        // Order-insensitive first-fit matching: each right element is
        // consumed by at most one left element.
        let mut used = vec![false; b.len()];
        'outer: for left_item in a.iter() {
            for (i, right_item) in b.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if self.equal(left_item, right_item, None, Some((value, other))) {
                    used[i] = true;
                    continue 'outer;
                }
            }
            return false;
        }
        true
    }

    fn equal_arrays(
        &mut self,
        value: &Value,
        other: &Value,
        a: &Handle<Vec<Value>>,
        b: &Handle<Vec<Value>>,
    ) -> bool {
        let a = a.borrow();
        let b = b.borrow();
        if a.len() != b.len() {
            return false;
        }
        for (i, (left_item, right_item)) in a.iter().zip(b.iter()).enumerate() {
            let key = EntryKey::Index(i);
            if !self.equal(left_item, right_item, Some(&key), Some((value, other))) {
                return false;
            }
        }
        true
    }

    fn equal_objects(
        &mut self,
        value: &Value,
        other: &Value,
        a: &Handle<valuekit_value::Obj>,
        b: &Handle<valuekit_value::Obj>,
    ) -> bool {
        let a = a.borrow();
        let b = b.borrow();
        // Two instances of different classes are never equal, whatever
        // their shape.
        if !a.proto.same(&b.proto) {
            return false;
        }
        if a.len() != b.len() {
            return false;
        }
        for key in a.own_keys() {
            let left_value = match a.get_own(&key) {
                Some(left_value) => left_value,
                None => return false,
            };
            let right_value = match b.get_own(&key) {
                Some(right_value) => right_value,
                None => return false,
            };
            let entry = EntryKey::Prop(key);
            if !self.equal(&left_value, &right_value, Some(&entry), Some((value, other))) {
                return false;
            }
        }
        true
    }
}

fn equal_boxed(a: &BoxedValue, b: &BoxedValue) -> bool {
    match (a, b) {
        (BoxedValue::Number(x), BoxedValue::Number(y)) => {
            x == y || (x.is_nan() && y.is_nan())
        }
        (BoxedValue::String(x), BoxedValue::String(y)) => x == y,
        (BoxedValue::Boolean(x), BoxedValue::Boolean(y)) => x == y,
        (BoxedValue::BigInt(x), BoxedValue::BigInt(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuekit_value::{ClassInfo, Key, Obj, Proto, ViewKind};

    #[test]
    fn test_nan_equals_nan() {
        assert!(is_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!is_equal(&Value::from(f64::NAN), &Value::from(1.0)));
    }

    #[test]
    fn test_boxed_vs_primitive() {
        let boxed = Value::boxed(BoxedValue::Number(1.0));
        assert!(!is_equal(&Value::from(1.0), &boxed));
        assert!(!is_equal(&boxed, &Value::from(1.0)));
    }

    #[test]
    fn test_boxed_vs_boxed() {
        let a = Value::boxed(BoxedValue::Number(1.0));
        let b = Value::boxed(BoxedValue::Number(1.0));
        assert!(is_equal(&a, &b));

        let c = Value::boxed(BoxedValue::String("1".into()));
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_dates_by_epoch() {
        assert!(is_equal(&Value::date(0.0), &Value::date(0.0)));
        assert!(!is_equal(&Value::date(0.0), &Value::date(1.0)));
        // Invalid dates are equal to each other.
        assert!(is_equal(&Value::date(f64::NAN), &Value::date(f64::NAN)));
    }

    #[test]
    fn test_regexps_by_source_and_flags() {
        assert!(is_equal(&Value::regexp("a+", "gi"), &Value::regexp("a+", "gi")));
        assert!(!is_equal(&Value::regexp("a+", "gi"), &Value::regexp("a+", "g")));
        assert!(!is_equal(&Value::regexp("a+", "g"), &Value::regexp("a*", "g")));
    }

    #[test]
    fn test_errors_ignore_stack() {
        use std::rc::Rc;
        use valuekit_value::ErrorValue;
        let a = Value::Error(Rc::new(ErrorValue {
            name: "TypeError".into(),
            message: "boom".into(),
            stack: Some("at foo.js:1".into()),
        }));
        let b = Value::Error(Rc::new(ErrorValue {
            name: "TypeError".into(),
            message: "boom".into(),
            stack: Some("at bar.js:9".into()),
        }));
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &Value::error("TypeError", "bang")));
        assert!(!is_equal(&a, &Value::error("RangeError", "boom")));
    }

    #[test]
    fn test_views_byte_for_byte() {
        let a = Value::view(ViewKind::Uint8, vec![1, 2, 3]);
        let b = Value::view(ViewKind::Uint8, vec![1, 2, 3]);
        let c = Value::view(ViewKind::Uint8, vec![1, 2, 4]);
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &c));

        // Same bytes through a different view kind still compare equal.
        let d = Value::view(ViewKind::Int8, vec![1, 2, 3]);
        assert!(is_equal(&a, &d));
    }

    #[test]
    fn test_array_buffers() {
        assert!(is_equal(
            &Value::array_buffer(vec![0, 1]),
            &Value::array_buffer(vec![0, 1])
        ));
        assert!(!is_equal(
            &Value::array_buffer(vec![0, 1]),
            &Value::array_buffer(vec![0, 1, 2])
        ));
    }

    #[test]
    fn test_arrays_order_sensitive() {
        let a = Value::array(vec![Value::from(1.0), Value::from(2.0)]);
        let b = Value::array(vec![Value::from(2.0), Value::from(1.0)]);
        assert!(!is_equal(&a, &b));
    }

    #[test]
    fn test_sets_order_insensitive() {
        let a = Value::set([Value::from(1.0), Value::from(2.0)]);
        let b = Value::set([Value::from(2.0), Value::from(1.0)]);
        assert!(is_equal(&a, &b));

        let c = Value::set([Value::from(1.0), Value::from(3.0)]);
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_set_elements_matched_at_most_once() {
        let a = Value::set([
            Value::array(vec![Value::from(1.0)]),
            Value::array(vec![Value::from(1.0)]),
        ]);
        let b = Value::set([
            Value::array(vec![Value::from(1.0)]),
            Value::array(vec![Value::from(2.0)]),
        ]);
        // Both left elements would match the same right element; the second
        // cannot reuse it.
        assert!(!is_equal(&a, &b));
    }

    #[test]
    fn test_map_keys_by_identity() {
        let a = Value::map([(Value::from("k"), Value::from(1.0))]);
        let b = Value::map([(Value::from("k"), Value::from(1.0))]);
        assert!(is_equal(&a, &b));

        // Reference keys must be the same allocation on both sides.
        let shared_key = Value::array(vec![]);
        let c = Value::map([(shared_key.clone(), Value::from(1.0))]);
        let d = Value::map([(shared_key, Value::from(1.0))]);
        assert!(is_equal(&c, &d));

        let e = Value::map([(Value::array(vec![]), Value::from(1.0))]);
        let f = Value::map([(Value::array(vec![]), Value::from(1.0))]);
        assert!(!is_equal(&e, &f));
    }

    #[test]
    fn test_map_values_deeply_compared() {
        let a = Value::map([(Value::from("k"), Value::array(vec![Value::from(1.0)]))]);
        let b = Value::map([(Value::from("k"), Value::array(vec![Value::from(1.0)]))]);
        let c = Value::map([(Value::from("k"), Value::array(vec![Value::from(2.0)]))]);
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_objects_by_own_keys() {
        let a = Value::object([
            (Key::from("a"), Value::from(1.0)),
            (Key::from("b"), Value::from(2.0)),
        ]);
        let b = Value::object([
            (Key::from("b"), Value::from(2.0)),
            (Key::from("a"), Value::from(1.0)),
        ]);
        assert!(is_equal(&a, &b));

        let c = Value::object([(Key::from("a"), Value::from(1.0))]);
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_symbol_keys_compared() {
        let sym = valuekit_value::Symbol::new(Some("s"));
        let a = Value::object([(Key::Sym(sym.clone()), Value::from(1.0))]);
        let b = Value::object([(Key::Sym(sym.clone()), Value::from(1.0))]);
        assert!(is_equal(&a, &b));

        let other_sym = valuekit_value::Symbol::new(Some("s"));
        let c = Value::object([(Key::Sym(other_sym), Value::from(1.0))]);
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_different_prototypes_not_equal() {
        let class_a = ClassInfo::new("Point");
        let class_b = ClassInfo::new("Point");

        let mut left = Obj::with_proto(Proto::Class(class_a.clone()));
        left.insert("x", Value::from(1.0));
        let mut right = Obj::with_proto(Proto::Class(class_b));
        right.insert("x", Value::from(1.0));
        assert!(!is_equal(&Value::object_from(left), &Value::object_from(right)));

        // Same class prototype on both sides: equal.
        let mut left = Obj::with_proto(Proto::Class(class_a.clone()));
        left.insert("x", Value::from(1.0));
        let mut right = Obj::with_proto(Proto::Class(class_a));
        right.insert("x", Value::from(1.0));
        assert!(is_equal(&Value::object_from(left), &Value::object_from(right)));
    }

    #[test]
    fn test_functions_by_identity_only() {
        let f = Value::function("f");
        assert!(is_equal(&f, &f.clone()));
        assert!(!is_equal(&f, &Value::function("f")));
    }

    #[test]
    fn test_cycles_terminate() {
        let a = Value::object([]);
        if let Value::Object(h) = &a {
            h.borrow_mut().insert("self", a.clone());
        }
        let b = Value::object([]);
        if let Value::Object(h) = &b {
            h.borrow_mut().insert("self", b.clone());
        }
        assert!(is_equal(&a, &b));
        assert!(is_equal(&a, &a.clone()));
    }

    #[test]
    fn test_cross_linked_cycles() {
        // a -> b -> a   versus   c -> d -> c
        let a = Value::object([]);
        let b = Value::object([(Key::from("next"), a.clone())]);
        if let Value::Object(h) = &a {
            h.borrow_mut().insert("next", b);
        }
        let c = Value::object([]);
        let d = Value::object([(Key::from("next"), c.clone())]);
        if let Value::Object(h) = &c {
            h.borrow_mut().insert("next", d);
        }
        assert!(is_equal(&a, &c));
    }

    #[test]
    fn test_shared_subobjects_after_cycle_exit() {
        // The guard is an ancestor stack, not a permanent cache: a shared
        // subobject revisited as a sibling is compared on its own merits.
        let shared = Value::array(vec![Value::from(1.0)]);
        let a = Value::object([
            (Key::from("x"), shared.clone()),
            (Key::from("y"), shared.clone()),
        ]);
        let b = Value::object([
            (Key::from("x"), Value::array(vec![Value::from(1.0)])),
            (Key::from("y"), Value::array(vec![Value::from(2.0)])),
        ]);
        assert!(!is_equal(&a, &b));
    }

    #[test]
    fn test_customizer_definite_overrides() {
        let a = Value::from("apple");
        let b = Value::from("orange");
        assert!(is_equal_with(&a, &b, |_, _, _, _| Verdict::Definite(true)));
        assert!(!is_equal_with(&a, &a.clone(), |_, _, _, _| {
            // Identical values never reach the customizer.
            Verdict::Definite(false)
        }));
    }

    #[test]
    fn test_customizer_continue_falls_through() {
        let a = Value::array(vec![Value::from(1.0)]);
        let b = Value::array(vec![Value::from(1.0)]);
        assert!(is_equal_with(&a, &b, |_, _, _, _| Verdict::Continue));

        let c = Value::array(vec![Value::from(2.0)]);
        assert!(!is_equal_with(&a, &c, |_, _, _, _| Verdict::Continue));
    }

    #[test]
    fn test_customizer_sees_keys_and_parents() {
        let a = Value::object([(Key::from("n"), Value::from(1.0))]);
        let b = Value::object([(Key::from("n"), Value::from(2.0))]);
        let mut seen = Vec::new();
        let result = is_equal_with(&a, &b, |_, _, key, parents| {
            seen.push((
                key.and_then(|k| k.as_str().map(str::to_string)),
                parents.is_some(),
            ));
            Verdict::Continue
        });
        assert!(!result);
        // Top-level pair first (no key, no parents), then the "n" entry.
        assert_eq!(seen, vec![(None, false), (Some("n".to_string()), true)]);
    }
}
