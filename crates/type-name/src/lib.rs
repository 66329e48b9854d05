//! valuekit-type-name - Precise runtime type names
//!
//! Maps any runtime value to a human-readable type label through an ordered
//! chain of capability detectors, a canonical label table, and a
//! configurable case-conversion pipeline.
//!
//! # Example
//!
//! ```
//! use valuekit_type_name::{precise_type, precise_type_with, FormatCase, TypeNameOptions};
//! use valuekit_value::Value;
//!
//! assert_eq!(precise_type(&Value::date(0.0)), "date");
//! assert_eq!(precise_type(&Value::regexp("a+", "g")), "reg-exp");
//!
//! let pascal = TypeNameOptions::new(FormatCase::Pascal, false);
//! assert_eq!(precise_type_with(&Value::regexp("a+", "g"), &pascal), "RegExp");
//! ```

pub mod case;
pub mod classifier;
pub mod detect;
pub mod options;
pub mod tables;

use std::sync::OnceLock;
use valuekit_value::Value;

// Re-export the core public API
pub use classifier::{Classifier, Formatter, MAX_CACHED_FORMATTERS};
pub use detect::{
    detect, dom_node_kind, is_event_emitter, is_generator_like, is_iterator_result,
    is_proxy, Detection,
};
pub use options::{FormatCase, TypeNameOptions};
pub use tables::{canonical_label, ACRONYMS};

fn default_classifier() -> &'static Classifier {
    static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();
    CLASSIFIER.get_or_init(Classifier::new)
}

/// Classify a value under the default options (kebab case, no acronym
/// handling). Never fails.
pub fn precise_type(value: &Value) -> String {
    precise_type_with(value, &TypeNameOptions::default())
}

/// Classify a value under explicit options. Never fails.
pub fn precise_type_with(value: &Value, options: &TypeNameOptions) -> String {
    default_classifier().type_name(value, options)
}

/// Classify a value with options supplied as a runtime value, the way a
/// dynamic caller would pass them. Malformed options degrade to defaults.
pub fn precise_type_with_value_options(value: &Value, options: &Value) -> String {
    precise_type_with(value, &TypeNameOptions::from_value(options))
}
