//! The canonical label table and acronym list.
//!
//! Lookup keys are normalized by stripping spaces, hyphens, and
//! underscores and lowercasing, so `"Reg Exp"`, `"reg-exp"`, and
//! `"regexp"` all resolve to the same entry.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical display labels, written as space-separated words. The table
/// maps every normalized spelling of an internal tag to its display form.
const LABELS: &[&str] = &[
    "Null",
    "Undefined",
    "String",
    "Number",
    "Boolean",
    "Big Int",
    "Symbol",
    "Function",
    "Object",
    "Array",
    "Date",
    "Reg Exp",
    "Error",
    "Type Error",
    "Range Error",
    "Syntax Error",
    "Reference Error",
    "Eval Error",
    "URI Error",
    "Aggregate Error",
    "Map",
    "Set",
    "Weak Map",
    "Weak Set",
    "Array Buffer",
    "Shared Array Buffer",
    "Data View",
    "Int 8 Array",
    "Uint 8 Array",
    "Uint 8 Clamped Array",
    "Int 16 Array",
    "Uint 16 Array",
    "Int 32 Array",
    "Uint 32 Array",
    "Float 32 Array",
    "Float 64 Array",
    "Big Int 64 Array",
    "Big Uint 64 Array",
    "Buffer",
    "Promise",
    "Generator",
    "Proxy",
    "URL",
    "URL Search Params",
    "Element",
    "Text",
    "Comment",
    "Document",
    "Node",
    "Event Emitter",
    "Iterator Result",
];

/// Acronyms preserved in uppercase when `useAcronyms` is on.
pub const ACRONYMS: &[&str] = &[
    "URL", "URI", "HTML", "HTTP", "HTTPS", "DOM", "API", "JSON", "XML", "UUID", "ID",
];

/// Strip spaces, hyphens, and underscores; lowercase the rest.
pub fn normalize_lookup(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn table() -> &'static HashMap<String, &'static str> {
    static TABLE: OnceLock<HashMap<String, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        LABELS
            .iter()
            .map(|label| (normalize_lookup(label), *label))
            .collect()
    })
}

/// Look a tag up in the canonical table.
///
/// # Examples
///
/// ```
/// use valuekit_type_name::tables::canonical_label;
///
/// assert_eq!(canonical_label("RegExp"), Some("Reg Exp"));
/// assert_eq!(canonical_label("reg-exp"), Some("Reg Exp"));
/// assert_eq!(canonical_label("Widget"), None);
/// ```
pub fn canonical_label(tag: &str) -> Option<&'static str> {
    table().get(normalize_lookup(tag).as_str()).copied()
}
