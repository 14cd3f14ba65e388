//! Text canonicalisation shared by every matching stage.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\n\w\s]").expect("valid regex"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Lower-case the text and replace punctuation with single spaces.
///
/// Newlines survive untouched so multi-line clauses keep their shape;
/// matching itself never depends on them.
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), " ").into_owned()
}

/// Word tokens of already normalised text, in textual order.
pub fn tokens(normalized: &str) -> Vec<&str> {
    WORD.find_iter(normalized).map(|m| m.as_str()).collect()
}
