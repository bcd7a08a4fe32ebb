//! Whitespace tokenization with Korean suffix stripping.
//!
//! Each token is reduced to an approximate stem by repeatedly removing the
//! longest matching particle and then the longest matching ending until a
//! full pass changes nothing.

use crate::lexicon::SuffixRules;

use super::normalize::normalize;

/// Normalize `text`, split on whitespace and reduce every token to its stem.
///
/// Stems of a single character are dropped unless whitelisted.
pub fn tokenize(text: &str, rules: &SuffixRules) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|token| reduce_to_stem(token, rules))
        .filter(|stem| stem.chars().count() > 1 || rules.is_whitelisted(stem))
        .collect()
}

/// Strip particles and endings until the token reaches a fixed point.
pub fn reduce_to_stem(token: &str, rules: &SuffixRules) -> String {
    let mut current = token;
    loop {
        let before = current;
        current = strip_longest(current, rules.particles());
        current = strip_longest(current, rules.endings());
        if current == before {
            return current.to_string();
        }
    }
}

/// Remove the first (i.e. longest, given sorted input) suffix that matches.
fn strip_longest<'a>(token: &'a str, suffixes: &[String]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix.as_str()))
        .unwrap_or(token)
}
