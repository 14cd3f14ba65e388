//! Lexical matching strategies: canonical terms, synonyms and semantic patterns.

use indexmap::IndexMap;
use regex::Regex;

use crate::{
    error::LexiconError,
    terms::{
        lexicon::Lexicon,
        result::{MatchMethod, Stage},
    },
};

/// One stage of the recognition cascade.
pub trait TermMatcher: Send + Sync {
    fn stage(&self) -> Stage;

    /// Terms this matcher has rules for, in the order they are tried.
    fn terms(&self) -> Vec<&str>;

    /// Test a single term against normalised text.
    fn attempt(&self, term: &str, text: &str) -> Option<MatchMethod>;
}

/// Whole-word, whole-phrase regex for a literal surface form.
fn bounded(term: &str, form: &str) -> Result<Regex, LexiconError> {
    let pattern = format!(r"\b{}\b", regex::escape(&form.to_lowercase()));
    Regex::new(&pattern).map_err(|source| LexiconError::InvalidPattern {
        term: term.to_string(),
        pattern,
        source,
    })
}

/// Boundary-anchored match on the canonical term itself.
#[derive(Debug)]
pub struct ExactMatcher {
    rules: IndexMap<String, Regex>,
}

impl ExactMatcher {
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let rules = lexicon
            .terms
            .keys()
            .map(|term| Ok::<_, LexiconError>((term.clone(), bounded(term, term)?)))
            .collect::<Result<_, _>>()?;
        Ok(Self { rules })
    }
}

impl TermMatcher for ExactMatcher {
    fn stage(&self) -> Stage {
        Stage::Exact
    }

    fn terms(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    fn attempt(&self, term: &str, text: &str) -> Option<MatchMethod> {
        let rule = self.rules.get(term)?;
        rule.is_match(text).then_some(MatchMethod::Exact)
    }
}

/// Literal alternate forms, each matched with word boundaries.
#[derive(Debug)]
pub struct SynonymMatcher {
    rules: IndexMap<String, Vec<(String, Regex)>>,
}

impl SynonymMatcher {
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let mut rules = IndexMap::new();
        for (term, forms) in &lexicon.synonyms {
            let compiled = forms
                .iter()
                .map(|form| Ok::<_, LexiconError>((form.clone(), bounded(term, form)?)))
                .collect::<Result<Vec<_>, _>>()?;
            rules.insert(term.clone(), compiled);
        }
        Ok(Self { rules })
    }
}

impl TermMatcher for SynonymMatcher {
    fn stage(&self) -> Stage {
        Stage::Synonym
    }

    fn terms(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    fn attempt(&self, term: &str, text: &str) -> Option<MatchMethod> {
        self.rules
            .get(term)?
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(form, _)| MatchMethod::Synonym(form.clone()))
    }
}

/// Unanchored regular expressions: stems, phrases, loose verb forms.
#[derive(Debug)]
pub struct PatternMatcher {
    rules: IndexMap<String, Vec<Regex>>,
}

impl PatternMatcher {
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let mut rules = IndexMap::new();
        for (term, patterns) in &lexicon.patterns {
            let compiled = patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).map_err(|source| LexiconError::InvalidPattern {
                        term: term.clone(),
                        pattern: pattern.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rules.insert(term.clone(), compiled);
        }
        Ok(Self { rules })
    }
}

impl TermMatcher for PatternMatcher {
    fn stage(&self) -> Stage {
        Stage::Pattern
    }

    fn terms(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    fn attempt(&self, term: &str, text: &str) -> Option<MatchMethod> {
        self.rules
            .get(term)?
            .iter()
            .find(|regex| regex.is_match(text))
            .map(|regex| MatchMethod::Pattern(regex.as_str().to_string()))
    }
}
