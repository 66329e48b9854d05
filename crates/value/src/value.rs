use crate::collections::{MapValue, SetValue, ViewValue};
use crate::object::{Key, Obj};
use crate::symbol::Symbol;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared, mutable handle to a reference-typed value.
///
/// Cloning a handle shares the allocation; the allocation's address is the
/// value's identity.
pub type Handle<T> = Rc<RefCell<T>>;

/// Create a fresh handle.
pub fn handle<T>(value: T) -> Handle<T> {
    Rc::new(RefCell::new(value))
}

/// A date: epoch milliseconds behind an identity-bearing allocation.
#[derive(Debug)]
pub struct DateValue {
    pub epoch_ms: f64,
}

/// A regular expression: pattern source and flags.
#[derive(Debug, PartialEq, Eq)]
pub struct RegExpValue {
    pub source: Rc<str>,
    pub flags: Rc<str>,
}

/// An error value. The stack is carried but ignored by equality.
#[derive(Debug)]
pub struct ErrorValue {
    pub name: Rc<str>,
    pub message: Rc<str>,
    pub stack: Option<Rc<str>>,
}

/// The wrapper constructors of the runtime's boxable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    Number,
    String,
    Boolean,
    BigInt,
}

impl Wrapper {
    pub fn name(&self) -> &'static str {
        match self {
            Wrapper::Number => "Number",
            Wrapper::String => "String",
            Wrapper::Boolean => "Boolean",
            Wrapper::BigInt => "BigInt",
        }
    }
}

/// A boxed primitive: an object wrapper around a primitive payload,
/// distinct from the primitive itself.
#[derive(Debug)]
pub enum BoxedValue {
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
    BigInt(i128),
}

impl BoxedValue {
    pub fn wrapper(&self) -> Wrapper {
        match self {
            BoxedValue::Number(_) => Wrapper::Number,
            BoxedValue::String(_) => Wrapper::String,
            BoxedValue::Boolean(_) => Wrapper::Boolean,
            BoxedValue::BigInt(_) => Wrapper::BigInt,
        }
    }
}

/// A function value. Functions compare by identity only; the `wrapper`
/// marker identifies the Number/String/Boolean/BigInt wrapper constructors
/// referenced as values.
#[derive(Debug)]
pub struct FuncInfo {
    pub name: Rc<str>,
    pub wrapper: Option<Wrapper>,
}

impl FuncInfo {
    pub fn named(name: &str) -> Self {
        FuncInfo {
            name: Rc::from(name),
            wrapper: None,
        }
    }

    pub fn wrapper_constructor(wrapper: Wrapper) -> Self {
        FuncInfo {
            name: Rc::from(wrapper.name()),
            wrapper: Some(wrapper),
        }
    }
}

/// Any value of the runtime.
///
/// Primitive variants are owned payloads; reference variants are shared
/// handles with identity. `Value::clone` is always shallow.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(Rc<str>),
    Symbol(Symbol),
    Object(Handle<Obj>),
    Array(Handle<Vec<Value>>),
    Function(Rc<FuncInfo>),
    Date(Rc<DateValue>),
    RegExp(Rc<RegExpValue>),
    Error(Rc<ErrorValue>),
    Map(Handle<MapValue>),
    Set(Handle<SetValue>),
    ArrayBuffer(Handle<Vec<u8>>),
    View(Handle<ViewValue>),
    Boxed(Rc<BoxedValue>),
}

impl Value {
    // ------------------------------------------------------------ builders

    pub fn string(s: &str) -> Value {
        Value::String(Rc::from(s))
    }

    pub fn symbol(description: Option<&str>) -> Value {
        Value::Symbol(Symbol::new(description))
    }

    pub fn object(props: impl IntoIterator<Item = (Key, Value)>) -> Value {
        let mut obj = Obj::plain();
        for (key, value) in props {
            obj.insert(key, value);
        }
        Value::Object(handle(obj))
    }

    pub fn object_from(obj: Obj) -> Value {
        Value::Object(handle(obj))
    }

    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(handle(items))
    }

    pub fn function(name: &str) -> Value {
        Value::Function(Rc::new(FuncInfo::named(name)))
    }

    pub fn wrapper_constructor(wrapper: Wrapper) -> Value {
        Value::Function(Rc::new(FuncInfo::wrapper_constructor(wrapper)))
    }

    pub fn date(epoch_ms: f64) -> Value {
        Value::Date(Rc::new(DateValue { epoch_ms }))
    }

    pub fn regexp(source: &str, flags: &str) -> Value {
        Value::RegExp(Rc::new(RegExpValue {
            source: Rc::from(source),
            flags: Rc::from(flags),
        }))
    }

    pub fn error(name: &str, message: &str) -> Value {
        Value::Error(Rc::new(ErrorValue {
            name: Rc::from(name),
            message: Rc::from(message),
            stack: None,
        }))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
        Value::Map(handle(entries.into_iter().collect()))
    }

    pub fn set(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Set(handle(items.into_iter().collect()))
    }

    pub fn array_buffer(bytes: Vec<u8>) -> Value {
        Value::ArrayBuffer(handle(bytes))
    }

    pub fn view(kind: crate::collections::ViewKind, bytes: Vec<u8>) -> Value {
        Value::View(handle(ViewValue::new(kind, bytes)))
    }

    pub fn boxed(payload: BoxedValue) -> Value {
        Value::Boxed(Rc::new(payload))
    }

    // ------------------------------------------------------------ identity

    /// The identity of a reference-typed value: the address of its
    /// allocation. `None` for primitives.
    pub fn ref_addr(&self) -> Option<usize> {
        match self {
            Value::Object(h) => Some(Rc::as_ptr(h) as *const () as usize),
            Value::Array(h) => Some(Rc::as_ptr(h) as *const () as usize),
            Value::Function(r) => Some(Rc::as_ptr(r) as *const () as usize),
            Value::Date(r) => Some(Rc::as_ptr(r) as *const () as usize),
            Value::RegExp(r) => Some(Rc::as_ptr(r) as *const () as usize),
            Value::Error(r) => Some(Rc::as_ptr(r) as *const () as usize),
            Value::Map(h) => Some(Rc::as_ptr(h) as *const () as usize),
            Value::Set(h) => Some(Rc::as_ptr(h) as *const () as usize),
            Value::ArrayBuffer(h) => Some(Rc::as_ptr(h) as *const () as usize),
            Value::View(h) => Some(Rc::as_ptr(h) as *const () as usize),
            Value::Boxed(r) => Some(Rc::as_ptr(r) as *const () as usize),
            _ => None,
        }
    }

    /// True for reference-typed (identity-bearing) values.
    pub fn is_reference(&self) -> bool {
        self.ref_addr().is_some()
    }

    // ----------------------------------------------------------- class tag

    /// The internal class tag of the value, the last-resort input of the
    /// type classifier. Class instances report their class name.
    pub fn type_tag(&self) -> Rc<str> {
        match self {
            Value::Undefined => Rc::from("Undefined"),
            Value::Null => Rc::from("Null"),
            Value::Bool(_) => Rc::from("Boolean"),
            Value::Number(_) => Rc::from("Number"),
            Value::BigInt(_) => Rc::from("BigInt"),
            Value::String(_) => Rc::from("String"),
            Value::Symbol(_) => Rc::from("Symbol"),
            Value::Object(h) => match &h.borrow().proto {
                crate::object::Proto::Class(class) => class.name.clone(),
                _ => Rc::from("Object"),
            },
            Value::Array(_) => Rc::from("Array"),
            Value::Function(_) => Rc::from("Function"),
            Value::Date(_) => Rc::from("Date"),
            Value::RegExp(_) => Rc::from("RegExp"),
            Value::Error(e) => e.name.clone(),
            Value::Map(_) => Rc::from("Map"),
            Value::Set(_) => Rc::from("Set"),
            Value::ArrayBuffer(_) => Rc::from("ArrayBuffer"),
            Value::View(h) => Rc::from(h.borrow().kind.tag()),
            Value::Boxed(b) => Rc::from(b.wrapper().name()),
        }
    }
}

impl PartialEq for Value {
    /// Strict (same-value-zero) equality: the runtime's `===` with NaN
    /// equal to itself. Reference values compare by identity. Structural
    /// comparison lives in the compare crate.
    fn eq(&self, other: &Self) -> bool {
        crate::identity::same_value_zero(self, other)
    }
}

impl fmt::Debug for Value {
    /// Shallow formatting: reference values print their kind and identity
    /// rather than their contents, so cyclic graphs can be printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(sym) => match sym.description() {
                Some(desc) => write!(f, "Symbol({})", desc),
                None => write!(f, "Symbol()"),
            },
            Value::Date(d) => write!(f, "Date({})", d.epoch_ms),
            Value::RegExp(r) => write!(f, "/{}/{}", r.source, r.flags),
            Value::Error(e) => write!(f, "{}: {}", e.name, e.message),
            Value::Boxed(b) => write!(f, "Boxed({:?})", b),
            other => write!(
                f,
                "{}@{:#x}",
                other.type_tag(),
                other.ref_addr().unwrap_or(0)
            ),
        }
    }
}

// ------------------------------------------------------------- conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s.as_str()))
    }
}
