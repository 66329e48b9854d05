use crate::case::{
    to_camel_case, to_dot_case, to_kebab_case, to_lower_case, to_pascal_case,
    to_pascal_space_case, to_slug_case, to_snake_case,
};
use crate::detect::{detect, Detection};
use crate::options::{FormatCase, TypeNameOptions};
use crate::tables::ACRONYMS;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Upper bound on memoized formatters; the cache is cleared wholesale on
/// overflow.
pub const MAX_CACHED_FORMATTERS: usize = 16;

/// A case-conversion pipeline for one options combination.
#[derive(Debug)]
pub struct Formatter {
    format_case: FormatCase,
    use_acronyms: bool,
}

impl Formatter {
    pub fn new(format_case: FormatCase, use_acronyms: bool) -> Self {
        Formatter {
            format_case,
            use_acronyms,
        }
    }

    /// Apply the configured casing to a canonical label.
    pub fn format(&self, label: &str) -> String {
        let ignore: &[&str] = if self.use_acronyms { ACRONYMS } else { &[] };
        match self.format_case {
            FormatCase::Kebab => to_kebab_case(label, ignore),
            FormatCase::Snake => to_snake_case(label, ignore),
            FormatCase::Camel => to_camel_case(label, ignore),
            FormatCase::Pascal => to_pascal_case(label, ignore),
            FormatCase::PascalSpaces => to_pascal_space_case(label, ignore),
            FormatCase::Dot => to_dot_case(label, ignore),
            FormatCase::Slug => to_slug_case(label, ignore),
            FormatCase::Lower => to_lower_case(label, ignore),
        }
    }
}

/// The precise-type classifier: the detection chain plus a bounded,
/// thread-safe cache of formatter instances keyed by options combination.
///
/// Callers that want an isolated cache construct their own `Classifier`;
/// the crate-level [`crate::precise_type`] functions share a process-wide
/// default instance.
#[derive(Debug, Default)]
pub struct Classifier {
    formatters: Mutex<HashMap<(FormatCase, bool), Arc<Formatter>>>,
}

impl Classifier {
    pub fn new() -> Self {
        Classifier {
            formatters: Mutex::new(HashMap::new()),
        }
    }

    /// Classify a value under the given options. Never fails.
    pub fn type_name(&self, value: &valuekit_value::Value, options: &TypeNameOptions) -> String {
        match detect(value) {
            // NaN and the infinities skip the formatting pipeline.
            Detection::Exact(text) => text,
            Detection::Label(label) => self.formatter(options).format(&label),
        }
    }

    fn formatter(&self, options: &TypeNameOptions) -> Arc<Formatter> {
        let key = (options.format_case, options.use_acronyms);
        let mut cache = self.formatters.lock().unwrap();
        if let Some(formatter) = cache.get(&key) {
            return formatter.clone();
        }
        if cache.len() >= MAX_CACHED_FORMATTERS {
            cache.clear();
        }
        let formatter = Arc::new(Formatter::new(options.format_case, options.use_acronyms));
        cache.insert(key, formatter.clone());
        formatter
    }
}
