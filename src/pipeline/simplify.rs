//! Plain-language paraphrasing of clause text.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("valid regex"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Longer phrases come first so they win over their fragments.
const PLAIN_LANGUAGE: &[(&str, &str)] = &[
    (
        "notwithstanding anything to the contrary contained herein",
        "despite anything else in this agreement",
    ),
    ("indemnify and hold harmless", "protect"),
    ("including but not limited to", "including"),
    ("in the event that", "if"),
    ("in accordance with", "under"),
    ("with respect to", "about"),
    ("pursuant to", "under"),
    ("prior to", "before"),
    ("in lieu of", "instead of"),
    ("hereinafter", "from now on"),
    ("herein", "in this agreement"),
    ("thereof", "of it"),
    ("forthwith", "immediately"),
    ("notwithstanding", "despite"),
    ("commence", "start"),
    ("shall", "must"),
];

/// Sentence-level paraphraser.
pub trait Simplifier: Send + Sync {
    fn simplify_sentence(&self, sentence: &str) -> Result<String>;
}

/// Rewrites common legalese into everyday wording.
#[derive(Debug)]
pub struct PlainLanguage {
    rules: Vec<(Regex, &'static str)>,
}

impl PlainLanguage {
    pub fn new() -> Result<Self> {
        let rules = PLAIN_LANGUAGE
            .iter()
            .map(|(phrase, plain)| {
                let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))?;
                Ok::<_, anyhow::Error>((regex, *plain))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }
}

impl Simplifier for PlainLanguage {
    fn simplify_sentence(&self, sentence: &str) -> Result<String> {
        let mut out = sentence.to_string();
        for (regex, plain) in &self.rules {
            out = regex
                .replace_all(&out, |caps: &Captures| match_case(&caps[0], plain))
                .into_owned();
        }
        Ok(SPACES.replace_all(&out, " ").into_owned())
    }
}

fn match_case(original: &str, plain: &str) -> String {
    let capitalised = original.chars().next().is_some_and(char::is_uppercase);
    if !capitalised {
        return plain.to_string();
    }
    let mut chars = plain.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        sentences.push(text[start..m.end()].trim());
        start = m.end();
    }
    sentences.push(text[start..].trim());
    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Simplify each sentence, keeping the original wording where the simplifier fails.
pub fn simplify_text(simplifier: &dyn Simplifier, text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .map(|sentence| match simplifier.simplify_sentence(sentence) {
            Ok(simple) => simple,
            Err(err) => {
                warn!(error = %err, "simplification failed; keeping original sentence");
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
