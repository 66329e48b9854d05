//! One-line runtime category checks.
//!
//! Each predicate inspects a single [`Value`] and never fails. The
//! duck-typed capability checks used by the type classifier (generator
//! shape, iterator-result shape, DOM nodes) live next to the classifier,
//! not here.

use crate::object::Proto;
use crate::value::Value;

/// # Examples
///
/// ```
/// use valuekit_value::{predicates::is_string, Value};
///
/// assert!(is_string(&Value::from("a")));
/// assert!(!is_string(&Value::from(1.0)));
/// ```
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// `null` or `undefined`.
pub fn is_nullish(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Undefined)
}

pub fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// A plain object: prototype is the base object prototype or null — not a
/// class instance, not a built-in.
pub fn is_plain_object(value: &Value) -> bool {
    match value {
        Value::Object(h) => matches!(h.borrow().proto, Proto::Base | Proto::None),
        _ => false,
    }
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}

pub fn is_map(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

pub fn is_set(value: &Value) -> bool {
    matches!(value, Value::Set(_))
}

pub fn is_array_buffer(value: &Value) -> bool {
    matches!(value, Value::ArrayBuffer(_))
}

/// Any typed array or data view.
pub fn is_view(value: &Value) -> bool {
    matches!(value, Value::View(_))
}

pub fn is_boxed(value: &Value) -> bool {
    matches!(value, Value::Boxed(_))
}

/// Not reference-typed: undefined, null, booleans, numbers, bigints,
/// strings, symbols.
pub fn is_primitive(value: &Value) -> bool {
    !value.is_reference()
}

/// Reference-typed (identity-bearing).
pub fn is_reference(value: &Value) -> bool {
    value.is_reference()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ClassInfo, Obj, Proto};
    use crate::value::BoxedValue;

    #[test]
    fn test_primitive_predicates() {
        assert!(is_undefined(&Value::Undefined));
        assert!(is_null(&Value::Null));
        assert!(is_nullish(&Value::Null));
        assert!(is_nullish(&Value::Undefined));
        assert!(!is_nullish(&Value::from(0.0)));
        assert!(is_bool(&Value::from(true)));
        assert!(is_number(&Value::from(1.5)));
        assert!(is_bigint(&Value::BigInt(1)));
        assert!(is_string(&Value::from("")));
        assert!(is_symbol(&Value::symbol(None)));
    }

    #[test]
    fn test_reference_predicates() {
        assert!(is_object(&Value::object([])));
        assert!(is_array(&Value::array(vec![])));
        assert!(is_function(&Value::function("f")));
        assert!(is_date(&Value::date(0.0)));
        assert!(is_regexp(&Value::regexp("a", "")));
        assert!(is_error(&Value::error("Error", "m")));
        assert!(is_map(&Value::map([])));
        assert!(is_set(&Value::set([])));
        assert!(is_array_buffer(&Value::array_buffer(vec![])));
        assert!(is_boxed(&Value::boxed(BoxedValue::Boolean(true))));
    }

    #[test]
    fn test_is_plain_object() {
        assert!(is_plain_object(&Value::object([])));
        assert!(is_plain_object(&Value::object_from(Obj::with_proto(Proto::None))));

        let class = ClassInfo::new("Point");
        let instance = Value::object_from(Obj::with_proto(Proto::Class(class)));
        assert!(!is_plain_object(&instance));
        assert!(!is_plain_object(&Value::array(vec![])));
    }

    #[test]
    fn test_primitive_vs_reference() {
        assert!(is_primitive(&Value::from(1.0)));
        assert!(is_primitive(&Value::symbol(None)));
        assert!(!is_primitive(&Value::object([])));
        assert!(is_reference(&Value::date(0.0)));
        // A boxed primitive is a reference, not a primitive.
        assert!(is_reference(&Value::boxed(BoxedValue::Number(1.0))));
    }
}
