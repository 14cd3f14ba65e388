//! Approximate matching of canonical terms against clause tokens.

use crate::{
    error::LexiconError,
    terms::{lexicon::Lexicon, normalize, result::MatchMethod},
};

pub const DEFAULT_CUTOFF: f64 = 0.85;

/// Closest-token matcher scored with the Ratcliff/Obershelp ratio (`2·M/T`).
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    terms: Vec<String>,
    cutoff: f64,
}

impl FuzzyMatcher {
    pub fn new(lexicon: &Lexicon, cutoff: f64) -> Result<Self, LexiconError> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(LexiconError::InvalidCutoff(cutoff));
        }
        Ok(Self {
            terms: lexicon.terms.keys().cloned().collect(),
            cutoff,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Best single token for `term`, if any clears the cutoff.
    ///
    /// A multi-word term is scored against individual tokens too, so it
    /// rarely matches here. Ties keep the earliest token.
    pub fn closest(&self, term: &str, tokens: &[&str]) -> Option<String> {
        let term = term.to_lowercase();
        difflib::get_close_matches(&term, tokens.to_vec(), 1, self.cutoff as f32)
            .into_iter()
            .next()
            .map(str::to_string)
    }

    /// Fuzzy candidates for every term, in dictionary order. The clause is
    /// tokenised once.
    pub fn scan(&self, normalized: &str) -> Vec<(&str, MatchMethod)> {
        let tokens = normalize::tokens(normalized);
        if tokens.is_empty() {
            return Vec::new();
        }
        self.terms
            .iter()
            .filter_map(|term| {
                self.closest(term, &tokens)
                    .map(|token| (term.as_str(), MatchMethod::Fuzzy(token)))
            })
            .collect()
    }
}
