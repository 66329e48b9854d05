//! valuekit - Runtime value utilities
//!
//! Small, independent, pure functions over the values of a
//! dynamically-typed scripting runtime: category predicates, assertion
//! wrappers, structural deep equality, subset matching, and a precise type
//! inspector with configurable case formatting.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use valuekit::{from_json, is_equal, is_match, precise_type, Value};
//!
//! let a = from_json(&json!({"x": [1, {"y": true}]}));
//! let b = from_json(&json!({"x": [1, {"y": true}]}));
//! assert!(is_equal(&a, &b));
//! assert!(is_match(&a, &from_json(&json!({"x": [1]}))));
//!
//! assert_eq!(precise_type(&Value::date(0.0)), "date");
//! ```

pub mod ensure;

// Re-export the public API of the member crates
pub use valuekit_compare::{
    is_equal, is_equal_with, is_match, is_match_with, EntryKey, EqualCustomizer,
    MatchCustomizer, Verdict,
};
pub use valuekit_type_name::{
    canonical_label, precise_type, precise_type_with, precise_type_with_value_options,
    Classifier, FormatCase, TypeNameOptions, ACRONYMS,
};
pub use valuekit_value::{
    from_json, predicates, same_value_zero, BoxedValue, ClassInfo, Fuzzer, Handle, Key,
    MapValue, Obj, Proto, SetValue, Symbol, Value, ViewKind, WellKnownSymbol, Wrapper,
};

pub use ensure::TypeError;
