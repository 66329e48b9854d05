use crate::tables::normalize_lookup;
use valuekit_value::{Key, Value};

/// The casing applied to a type label before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatCase {
    /// `reg-exp` (the default).
    #[default]
    Kebab,
    /// `reg_exp`
    Snake,
    /// `regExp`
    Camel,
    /// `RegExp`
    Pascal,
    /// `Reg Exp`
    PascalSpaces,
    /// `reg.exp`
    Dot,
    /// `reg-exp`, restricted to URL-safe characters.
    Slug,
    /// `reg exp`
    Lower,
}

impl FormatCase {
    /// Parse a case name. Unknown input falls back to the default rather
    /// than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use valuekit_type_name::FormatCase;
    ///
    /// assert_eq!(FormatCase::parse("snake"), FormatCase::Snake);
    /// assert_eq!(FormatCase::parse("pascal-with-spaces"), FormatCase::PascalSpaces);
    /// assert_eq!(FormatCase::parse("bogus"), FormatCase::Kebab);
    /// ```
    pub fn parse(input: &str) -> FormatCase {
        match normalize_lookup(input).as_str() {
            "kebab" | "kebabcase" => FormatCase::Kebab,
            "snake" | "snakecase" => FormatCase::Snake,
            "camel" | "camelcase" => FormatCase::Camel,
            "pascal" | "pascalcase" => FormatCase::Pascal,
            "pascalspaces" | "pascalwithspaces" => FormatCase::PascalSpaces,
            "dot" | "dotcase" => FormatCase::Dot,
            "slug" | "slugcase" => FormatCase::Slug,
            "lower" | "lowercase" => FormatCase::Lower,
            _ => FormatCase::Kebab,
        }
    }
}

/// Options of the precise-type classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeNameOptions {
    pub format_case: FormatCase,
    /// When set, known acronyms (URL, HTML, …) keep their uppercase form
    /// instead of being cased like ordinary words.
    pub use_acronyms: bool,
}

impl TypeNameOptions {
    pub fn new(format_case: FormatCase, use_acronyms: bool) -> Self {
        TypeNameOptions {
            format_case,
            use_acronyms,
        }
    }

    /// Read options out of a runtime value. Anything malformed — a
    /// non-object, a missing key, a key of the wrong type — degrades to
    /// the defaults instead of failing.
    pub fn from_value(value: &Value) -> TypeNameOptions {
        let obj = match value {
            Value::Object(obj) => obj.borrow(),
            _ => return TypeNameOptions::default(),
        };
        let format_case = match obj.get_own(&Key::from("formatCase")) {
            Some(Value::String(s)) => FormatCase::parse(&s),
            _ => FormatCase::default(),
        };
        let use_acronyms = matches!(
            obj.get_own(&Key::from("useAcronyms")),
            Some(Value::Bool(true))
        );
        TypeNameOptions {
            format_case,
            use_acronyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_cases() {
        assert_eq!(FormatCase::parse("kebab"), FormatCase::Kebab);
        assert_eq!(FormatCase::parse("SNAKE"), FormatCase::Snake);
        assert_eq!(FormatCase::parse("camel-case"), FormatCase::Camel);
        assert_eq!(FormatCase::parse("dot"), FormatCase::Dot);
        assert_eq!(FormatCase::parse("slug"), FormatCase::Slug);
        assert_eq!(FormatCase::parse("lower"), FormatCase::Lower);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(FormatCase::parse(""), FormatCase::Kebab);
        assert_eq!(FormatCase::parse("screaming"), FormatCase::Kebab);
    }

    #[test]
    fn test_options_from_object_value() {
        let options_value = Value::object([
            (Key::from("formatCase"), Value::from("pascal")),
            (Key::from("useAcronyms"), Value::from(true)),
        ]);
        let options = TypeNameOptions::from_value(&options_value);
        assert_eq!(options.format_case, FormatCase::Pascal);
        assert!(options.use_acronyms);
    }

    #[test]
    fn test_malformed_options_degrade() {
        assert_eq!(
            TypeNameOptions::from_value(&Value::from("kebab")),
            TypeNameOptions::default()
        );
        assert_eq!(
            TypeNameOptions::from_value(&Value::Null),
            TypeNameOptions::default()
        );
        let bad_types = Value::object([
            (Key::from("formatCase"), Value::from(3.0)),
            (Key::from("useAcronyms"), Value::from("yes")),
        ]);
        assert_eq!(
            TypeNameOptions::from_value(&bad_types),
            TypeNameOptions::default()
        );
    }
}
