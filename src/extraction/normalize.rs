use std::sync::LazyLock;

use regex::Regex;

/// Anything that is not a word character, whitespace, or Hangul (jamo through
/// the last precomposed syllable).
static NON_LINGUISTIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\sㄱ-힣]").expect("valid regex"));

/// Strip emoji, punctuation and other non-linguistic characters, then trim.
pub fn normalize(text: &str) -> String {
    NON_LINGUISTIC.replace_all(text, "").trim().to_string()
}
