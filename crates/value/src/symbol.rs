use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Well-known protocol symbols of the runtime.
///
/// These carry a fixed meaning distinct from user-created symbols and
/// therefore get dedicated display labels from the type classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSymbol {
    Iterator,
    AsyncIterator,
    ToStringTag,
    HasInstance,
    ToPrimitive,
    Unscopables,
}

impl WellKnownSymbol {
    /// Canonical display label (space-separated words).
    pub fn label(&self) -> &'static str {
        match self {
            WellKnownSymbol::Iterator => "Symbol Iterator",
            WellKnownSymbol::AsyncIterator => "Symbol Async Iterator",
            WellKnownSymbol::ToStringTag => "Symbol To String Tag",
            WellKnownSymbol::HasInstance => "Symbol Has Instance",
            WellKnownSymbol::ToPrimitive => "Symbol To Primitive",
            WellKnownSymbol::Unscopables => "Symbol Unscopables",
        }
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A symbol value: either one of the runtime's well-known symbols or a
/// user-created symbol with identity.
///
/// Two custom symbols are equal only if they are the same allocation, even
/// when their descriptions match — mirroring `Symbol("x") !== Symbol("x")`.
///
/// # Examples
///
/// ```
/// use valuekit_value::Symbol;
///
/// let a = Symbol::new(Some("tag"));
/// let b = Symbol::new(Some("tag"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Debug, Clone)]
pub enum Symbol {
    WellKnown(WellKnownSymbol),
    Custom(Rc<SymbolData>),
}

#[derive(Debug)]
pub struct SymbolData {
    id: u64,
    pub description: Option<Rc<str>>,
}

impl Symbol {
    /// Create a fresh custom symbol with a new identity.
    pub fn new(description: Option<&str>) -> Self {
        Symbol::Custom(Rc::new(SymbolData {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Rc::from),
        }))
    }

    /// The description of a custom symbol, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Symbol::WellKnown(_) => None,
            Symbol::Custom(data) => data.description.as_deref(),
        }
    }

    /// Returns the well-known symbol kind, if this is one.
    pub fn well_known(&self) -> Option<WellKnownSymbol> {
        match self {
            Symbol::WellKnown(wk) => Some(*wk),
            Symbol::Custom(_) => None,
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Symbol::WellKnown(a), Symbol::WellKnown(b)) => a == b,
            (Symbol::Custom(a), Symbol::Custom(b)) => a.id == b.id,
            _ => false,
        }
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Symbol::WellKnown(wk) => {
                0u8.hash(state);
                wk.hash(state);
            }
            Symbol::Custom(data) => {
                1u8.hash(state);
                data.id.hash(state);
            }
        }
    }
}
