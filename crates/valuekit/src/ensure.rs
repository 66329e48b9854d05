//! Assertion wrappers: narrow a value to an expected category or fail with
//! a `TypeError` naming the precise type actually received.

use std::rc::Rc;
use thiserror::Error;
use valuekit_type_name::precise_type;
use valuekit_value::{FuncInfo, Handle, MapValue, Obj, SetValue, Value};

/// A type mismatch. The `actual` field carries the offending value's
/// precise type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, received {actual}")]
pub struct TypeError {
    pub expected: &'static str,
    pub actual: String,
}

impl TypeError {
    fn new(expected: &'static str, value: &Value) -> Self {
        TypeError {
            expected,
            actual: precise_type(value),
        }
    }
}

/// # Examples
///
/// ```
/// use valuekit::ensure::ensure_string;
/// use valuekit::Value;
///
/// assert_eq!(&*ensure_string(&Value::from("ok")).unwrap(), "ok");
///
/// let err = ensure_string(&Value::date(0.0)).unwrap_err();
/// assert_eq!(err.to_string(), "expected string, received date");
/// ```
pub fn ensure_string(value: &Value) -> Result<Rc<str>, TypeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(TypeError::new("string", other)),
    }
}

pub fn ensure_number(value: &Value) -> Result<f64, TypeError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(TypeError::new("number", other)),
    }
}

pub fn ensure_bool(value: &Value) -> Result<bool, TypeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(TypeError::new("boolean", other)),
    }
}

pub fn ensure_bigint(value: &Value) -> Result<i128, TypeError> {
    match value {
        Value::BigInt(n) => Ok(*n),
        other => Err(TypeError::new("bigint", other)),
    }
}

pub fn ensure_array(value: &Value) -> Result<Handle<Vec<Value>>, TypeError> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(TypeError::new("array", other)),
    }
}

pub fn ensure_object(value: &Value) -> Result<Handle<Obj>, TypeError> {
    match value {
        Value::Object(obj) => Ok(obj.clone()),
        other => Err(TypeError::new("object", other)),
    }
}

pub fn ensure_function(value: &Value) -> Result<Rc<FuncInfo>, TypeError> {
    match value {
        Value::Function(func) => Ok(func.clone()),
        other => Err(TypeError::new("function", other)),
    }
}

/// Returns the epoch milliseconds of a date value.
pub fn ensure_date(value: &Value) -> Result<f64, TypeError> {
    match value {
        Value::Date(date) => Ok(date.epoch_ms),
        other => Err(TypeError::new("date", other)),
    }
}

pub fn ensure_map(value: &Value) -> Result<Handle<MapValue>, TypeError> {
    match value {
        Value::Map(map) => Ok(map.clone()),
        other => Err(TypeError::new("map", other)),
    }
}

pub fn ensure_set(value: &Value) -> Result<Handle<SetValue>, TypeError> {
    match value {
        Value::Set(set) => Ok(set.clone()),
        other => Err(TypeError::new("set", other)),
    }
}

/// Rejects `undefined` and `null`; any other value passes through.
pub fn ensure_defined(value: &Value) -> Result<&Value, TypeError> {
    match value {
        Value::Undefined | Value::Null => Err(TypeError::new("defined value", value)),
        other => Ok(other),
    }
}
