use crate::symbol::Symbol;
use crate::value::Value;
use indexmap::IndexMap;
use std::rc::Rc;

/// A property key: a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(Rc<str>),
    Sym(Symbol),
}

impl Key {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Sym(_) => None,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(Rc::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(Rc::from(s.as_str()))
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Key::Sym(sym)
    }
}

/// The prototype of an object.
///
/// Class prototypes compare by identity (`Rc::ptr_eq`): two classes with the
/// same name and shape are still distinct prototypes.
#[derive(Debug, Clone)]
pub enum Proto {
    /// The base object prototype (a plain object).
    Base,
    /// No prototype at all.
    None,
    /// A class prototype.
    Class(Rc<ClassInfo>),
}

impl Proto {
    /// Prototype identity, the relation used by structural equality.
    pub fn same(&self, other: &Proto) -> bool {
        match (self, other) {
            (Proto::Base, Proto::Base) => true,
            (Proto::None, Proto::None) => true,
            (Proto::Class(a), Proto::Class(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// A class prototype: its name, optional parent class, and the members
/// visible through the prototype chain.
#[derive(Debug)]
pub struct ClassInfo {
    pub name: Rc<str>,
    pub parent: Option<Rc<ClassInfo>>,
    members: IndexMap<Key, Value>,
}

impl ClassInfo {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(ClassInfo {
            name: Rc::from(name),
            parent: None,
            members: IndexMap::new(),
        })
    }

    pub fn with_members(
        name: &str,
        parent: Option<Rc<ClassInfo>>,
        members: impl IntoIterator<Item = (Key, Value)>,
    ) -> Rc<Self> {
        Rc::new(ClassInfo {
            name: Rc::from(name),
            parent,
            members: members.into_iter().collect(),
        })
    }

    /// Look a member up through the chain of parent classes.
    pub fn lookup(&self, key: &Key) -> Option<Value> {
        if let Some(value) = self.members.get(key) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(key))
    }

    pub fn has(&self, key: &Key) -> bool {
        self.members.contains_key(key)
            || self.parent.as_ref().map(|p| p.has(key)).unwrap_or(false)
    }
}

/// Introspection-probe policy of an object.
///
/// A `Deny` object rejects define/delete probes the way a proxy with
/// `defineProperty`/`deleteProperty` traps does. A transparent proxy has no
/// traps and is indistinguishable from an ordinary `Allow` object; that
/// boundary is intentional and preserved from the upstream behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Allow,
    Deny,
}

/// Error returned when an introspection probe is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeDenied;

/// An object: a prototype, insertion-ordered own properties (string and
/// symbol keys), and a probe policy.
#[derive(Debug)]
pub struct Obj {
    pub proto: Proto,
    props: IndexMap<Key, Value>,
    probe: Probe,
}

impl Obj {
    /// A plain object (base prototype).
    pub fn plain() -> Self {
        Obj::with_proto(Proto::Base)
    }

    pub fn with_proto(proto: Proto) -> Self {
        Obj {
            proto,
            props: IndexMap::new(),
            probe: Probe::Allow,
        }
    }

    /// Mark the object as rejecting introspection probes (trap-bearing proxy).
    pub fn deny_probes(mut self) -> Self {
        self.probe = Probe::Deny;
        self
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: Value) {
        self.props.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.props.shift_remove(key)
    }

    /// Own-property lookup only.
    pub fn get_own(&self, key: &Key) -> Option<Value> {
        self.props.get(key).cloned()
    }

    pub fn has_own(&self, key: &Key) -> bool {
        self.props.contains_key(key)
    }

    /// Lookup through the prototype chain (`in`-operator semantics).
    pub fn get(&self, key: &Key) -> Option<Value> {
        if let Some(value) = self.props.get(key) {
            return Some(value.clone());
        }
        match &self.proto {
            Proto::Class(class) => class.lookup(key),
            Proto::Base | Proto::None => None,
        }
    }

    pub fn has(&self, key: &Key) -> bool {
        if self.props.contains_key(key) {
            return true;
        }
        match &self.proto {
            Proto::Class(class) => class.has(key),
            Proto::Base | Proto::None => false,
        }
    }

    /// Full own-keys enumeration in insertion order, symbols included.
    pub fn own_keys(&self) -> Vec<Key> {
        self.props.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Attempt to define-then-delete a probe property. Rejected by
    /// trap-bearing proxies; the caller treats the rejection as a signal,
    /// not a failure.
    pub fn probe_define(&self) -> Result<(), ProbeDenied> {
        match self.probe {
            Probe::Allow => Ok(()),
            Probe::Deny => Err(ProbeDenied),
        }
    }
}

impl Default for Obj {
    fn default() -> Self {
        Obj::plain()
    }
}
