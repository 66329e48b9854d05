//! The detection chain: an ordered list of independent capability
//! predicates, evaluated first-match-wins. Several categories overlap (a
//! boxed number is also an object), so the order is part of the contract.

use crate::tables::canonical_label;
use valuekit_value::{Key, Value, ViewKind};

/// The raw outcome of detection, before case formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// A final string, exempt from case conversion (`NaN`, `Infinity`).
    Exact(String),
    /// A canonical label to run through the case converter.
    Label(String),
}

type Detector = fn(&Value) -> Option<Detection>;

/// First match wins; the fallback in [`detect`] handles everything the
/// chain lets through.
const DETECTORS: &[Detector] = &[
    detect_null,
    detect_nan,
    detect_infinity,
    detect_wrapper,
    detect_primitive,
    detect_symbol,
    detect_host_object,
    detect_buffer,
    detect_proxy,
    detect_generator,
    detect_error,
    detect_iterator_result,
    detect_null_proto,
];

/// Classify a value into its raw label.
pub fn detect(value: &Value) -> Detection {
    for detector in DETECTORS {
        if let Some(detection) = detector(value) {
            return detection;
        }
    }
    detect_fallback(value)
}

fn detect_null(value: &Value) -> Option<Detection> {
    match value {
        Value::Null => Some(Detection::Label("Null".to_string())),
        _ => None,
    }
}

fn detect_nan(value: &Value) -> Option<Detection> {
    match value {
        Value::Number(n) if n.is_nan() => Some(Detection::Exact("NaN".to_string())),
        _ => None,
    }
}

fn detect_infinity(value: &Value) -> Option<Detection> {
    match value {
        Value::Number(n) if n.is_infinite() => Some(Detection::Exact(
            if *n > 0.0 { "Infinity" } else { "-Infinity" }.to_string(),
        )),
        _ => None,
    }
}

/// Wrapper constructors referenced as values, and boxed instances, both
/// classify as "<Type> Constructor".
fn detect_wrapper(value: &Value) -> Option<Detection> {
    let wrapper = match value {
        Value::Function(func) => func.wrapper?,
        Value::Boxed(boxed) => boxed.wrapper(),
        _ => return None,
    };
    let name = canonical_label(wrapper.name()).unwrap_or(wrapper.name());
    Some(Detection::Label(format!("{} Constructor", name)))
}

fn detect_primitive(value: &Value) -> Option<Detection> {
    let typeof_name = match value {
        Value::Undefined => "undefined",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::BigInt(_) => "bigint",
        Value::String(_) => "string",
        _ => return None,
    };
    let label = canonical_label(typeof_name).unwrap_or(typeof_name);
    Some(Detection::Label(label.to_string()))
}

fn detect_symbol(value: &Value) -> Option<Detection> {
    match value {
        Value::Symbol(sym) => Some(Detection::Label(match sym.well_known() {
            Some(well_known) => well_known.label().to_string(),
            None => "Symbol".to_string(),
        })),
        _ => None,
    }
}

/// Environment-specific host objects, recognized by shape. Each probe is
/// independent; a miss falls through to the next tier.
fn detect_host_object(value: &Value) -> Option<Detection> {
    if is_event_emitter(value) {
        return Some(Detection::Label("Event Emitter".to_string()));
    }
    dom_node_kind(value).map(|kind| Detection::Label(kind.to_string()))
}

fn detect_buffer(value: &Value) -> Option<Detection> {
    match value {
        Value::View(view) if view.borrow().kind == ViewKind::Buffer => {
            Some(Detection::Label("Buffer".to_string()))
        }
        _ => None,
    }
}

fn detect_proxy(value: &Value) -> Option<Detection> {
    if is_proxy(value) {
        Some(Detection::Label("Proxy".to_string()))
    } else {
        None
    }
}

fn detect_generator(value: &Value) -> Option<Detection> {
    if is_generator_like(value) {
        Some(Detection::Label("Generator".to_string()))
    } else {
        None
    }
}

fn detect_error(value: &Value) -> Option<Detection> {
    match value {
        Value::Error(error) => {
            let label = canonical_label(&error.name)
                .map(str::to_string)
                .unwrap_or_else(|| error.name.to_string());
            Some(Detection::Label(label))
        }
        _ => None,
    }
}

fn detect_iterator_result(value: &Value) -> Option<Detection> {
    if is_iterator_result(value) {
        Some(Detection::Label("Iterator Result".to_string()))
    } else {
        None
    }
}

fn detect_null_proto(value: &Value) -> Option<Detection> {
    match value {
        Value::Object(obj) if matches!(obj.borrow().proto, valuekit_value::Proto::None) => {
            Some(Detection::Label("Object".to_string()))
        }
        _ => None,
    }
}

/// Last tier: the internal class tag through the canonical table, then the
/// class name when it is not the generic "Object", then the raw tag.
fn detect_fallback(value: &Value) -> Detection {
    let tag = value.type_tag();
    match canonical_label(&tag) {
        Some(label) => Detection::Label(label.to_string()),
        None => Detection::Label(tag.to_string()),
    }
}

// --------------------------------------------------- capability predicates

fn callable_prop(value: &Value, name: &str) -> bool {
    match value {
        Value::Object(obj) => matches!(
            obj.borrow().get(&Key::from(name)),
            Some(Value::Function(_))
        ),
        _ => false,
    }
}

/// An object with callable `on` and `emit` properties.
pub fn is_event_emitter(value: &Value) -> bool {
    callable_prop(value, "on") && callable_prop(value, "emit")
}

/// DOM nodes by shape: a numeric `nodeType` plus a string `nodeName`.
pub fn dom_node_kind(value: &Value) -> Option<&'static str> {
    let obj = match value {
        Value::Object(obj) => obj.borrow(),
        _ => return None,
    };
    let node_type = match obj.get(&Key::from("nodeType")) {
        Some(Value::Number(n)) => n,
        _ => return None,
    };
    match obj.get(&Key::from("nodeName")) {
        Some(Value::String(_)) => {}
        _ => return None,
    }
    Some(match node_type as i64 {
        1 => "Element",
        3 => "Text",
        8 => "Comment",
        9 => "Document",
        _ => "Node",
    })
}

/// Generator-shaped: callable `next` and `throw`.
pub fn is_generator_like(value: &Value) -> bool {
    callable_prop(value, "next") && callable_prop(value, "throw")
}

/// Exactly the two own string keys `done` and `value`.
pub fn is_iterator_result(value: &Value) -> bool {
    let obj = match value {
        Value::Object(obj) => obj.borrow(),
        _ => return false,
    };
    if obj.len() != 2 {
        return false;
    }
    obj.has_own(&Key::from("done")) && obj.has_own(&Key::from("value"))
}

/// The define-then-delete probe. Objects with define/delete traps reject
/// it; a transparent proxy accepts it and is indistinguishable from an
/// ordinary object. That blind spot is the documented upstream boundary
/// and is preserved, not fixed.
pub fn is_proxy(value: &Value) -> bool {
    match value {
        Value::Object(obj) => obj.borrow().probe_define().is_err(),
        _ => false,
    }
}
