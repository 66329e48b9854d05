//! String-case conversion helpers.
//!
//! Every converter takes the input string and an ignore-list of words to
//! leave untouched (the acronym list, when acronym handling is on). Word
//! boundaries are separators (space, `-`, `_`, `.`), lower-to-upper
//! transitions, and letter/digit transitions, so `"Uint8Array"`,
//! `"uint-8-array"`, and `"Uint 8 Array"` split identically.

use regex::Regex;
use std::sync::OnceLock;

/// Split an identifier into words.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in input.chars() {
        if matches!(ch, ' ' | '-' | '_' | '.') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(prev) = current.chars().last() {
            let boundary = (prev.is_lowercase() && ch.is_uppercase())
                || (prev.is_ascii_digit() && ch.is_alphabetic())
                || (prev.is_alphabetic() && ch.is_ascii_digit());
            if boundary {
                words.push(std::mem::take(&mut current));
            } else if prev.is_uppercase() && ch.is_lowercase() && current.chars().count() > 1 {
                // "URLParser" splits as "URL" + "Parser".
                if let Some(last) = current.pop() {
                    words.push(std::mem::take(&mut current));
                    current.push(last);
                }
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn ignored<'a>(word: &str, ignore: &[&'a str]) -> Option<&'a str> {
    ignore
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(word))
        .copied()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lowered(input: &str, ignore: &[&str], separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| match ignored(word, ignore) {
            Some(kept) => kept.to_string(),
            None => word.to_lowercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// `Reg Exp` -> `reg-exp`
pub fn to_kebab_case(input: &str, ignore: &[&str]) -> String {
    join_lowered(input, ignore, "-")
}

/// `Reg Exp` -> `reg_exp`
pub fn to_snake_case(input: &str, ignore: &[&str]) -> String {
    join_lowered(input, ignore, "_")
}

/// `Reg Exp` -> `reg.exp`
pub fn to_dot_case(input: &str, ignore: &[&str]) -> String {
    join_lowered(input, ignore, ".")
}

/// `Reg Exp` -> `reg exp`
pub fn to_lower_case(input: &str, ignore: &[&str]) -> String {
    join_lowered(input, ignore, " ")
}

/// `Reg Exp` -> `regExp`
pub fn to_camel_case(input: &str, ignore: &[&str]) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| match ignored(word, ignore) {
            Some(kept) => kept.to_string(),
            None if i == 0 => word.to_lowercase(),
            None => capitalize(word),
        })
        .collect()
}

/// `Reg Exp` -> `RegExp`
pub fn to_pascal_case(input: &str, ignore: &[&str]) -> String {
    split_words(input)
        .iter()
        .map(|word| match ignored(word, ignore) {
            Some(kept) => kept.to_string(),
            None => capitalize(word),
        })
        .collect()
}

/// `reg-exp` -> `Reg Exp`
pub fn to_pascal_space_case(input: &str, ignore: &[&str]) -> String {
    split_words(input)
        .iter()
        .map(|word| match ignored(word, ignore) {
            Some(kept) => kept.to_string(),
            None => capitalize(word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn slug_invalid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-]+").expect("slug pattern is valid"))
}

/// `Reg Exp!` -> `reg-exp`. Slugs are URL-safe: everything is lowercased
/// (acronyms included) and characters outside `[a-z0-9-]` are dropped.
pub fn to_slug_case(input: &str, _ignore: &[&str]) -> String {
    let kebab = join_lowered(input, &[], "-").to_lowercase();
    slug_invalid_regex().replace_all(&kebab, "").into_owned()
}
