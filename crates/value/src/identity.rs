use crate::value::Value;

/// Same-value-zero identity: the runtime's strict equality with two
/// adjustments baked in — NaN equals NaN, and +0 equals -0.
///
/// Reference-typed values (objects, arrays, dates, boxed primitives, …)
/// compare by allocation identity only; a boxed primitive is never equal to
/// the primitive it wraps.
///
/// # Examples
///
/// ```
/// use valuekit_value::{same_value_zero, Value};
///
/// assert!(same_value_zero(&Value::from(f64::NAN), &Value::from(f64::NAN)));
/// assert!(same_value_zero(&Value::from(0.0), &Value::from(-0.0)));
///
/// let arr = Value::array(vec![]);
/// assert!(same_value_zero(&arr, &arr.clone()));
/// assert!(!same_value_zero(&arr, &Value::array(vec![])));
/// ```
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        _ => match (a.ref_addr(), b.ref_addr()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::BoxedValue;

    #[test]
    fn test_nan_equals_nan() {
        assert!(same_value_zero(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    }

    #[test]
    fn test_signed_zero() {
        assert!(same_value_zero(&Value::from(0.0), &Value::from(-0.0)));
    }

    #[test]
    fn test_primitives_by_value() {
        assert!(same_value_zero(&Value::from("a"), &Value::from("a")));
        assert!(!same_value_zero(&Value::from("a"), &Value::from("b")));
        assert!(same_value_zero(&Value::BigInt(7), &Value::BigInt(7)));
        assert!(!same_value_zero(&Value::from(1.0), &Value::from(true)));
    }

    #[test]
    fn test_null_and_undefined_are_distinct() {
        assert!(!same_value_zero(&Value::Null, &Value::Undefined));
    }

    #[test]
    fn test_references_by_identity() {
        let obj = Value::object([]);
        assert!(same_value_zero(&obj, &obj.clone()));
        assert!(!same_value_zero(&obj, &Value::object([])));

        let date = Value::date(0.0);
        assert!(same_value_zero(&date, &date.clone()));
        // Same epoch, different allocation: not identical.
        assert!(!same_value_zero(&date, &Value::date(0.0)));
    }

    #[test]
    fn test_boxed_is_not_its_primitive() {
        let boxed = Value::boxed(BoxedValue::Number(1.0));
        assert!(!same_value_zero(&boxed, &Value::from(1.0)));
        assert!(!same_value_zero(&Value::from(1.0), &boxed));
    }
}
