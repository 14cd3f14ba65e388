//! Per-clause recognition output.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Cascade stages, ordered from most to least precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Exact,
    Synonym,
    Pattern,
    Fuzzy,
    Inferred,
}

/// How a term was found, including the evidence that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchMethod {
    Exact,
    Synonym(String),
    Pattern(String),
    Fuzzy(String),
    Inferred(String),
}

impl MatchMethod {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Exact => Stage::Exact,
            Self::Synonym(_) => Stage::Synonym,
            Self::Pattern(_) => Stage::Pattern,
            Self::Fuzzy(_) => Stage::Fuzzy,
            Self::Inferred(_) => Stage::Inferred,
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Synonym(form) => write!(f, "synonym:{form}"),
            Self::Pattern(pattern) => write!(f, "pattern:{pattern}"),
            Self::Fuzzy(token) => write!(f, "fuzzy:{token}"),
            Self::Inferred(label) => write!(f, "inferred_from_clause:{label}"),
        }
    }
}

/// Definition and provenance of one recognised term.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
    pub definition: String,
    #[serde_as(as = "DisplayFromStr")]
    pub method: MatchMethod,
}

/// Terms recognised in a clause, keyed by canonical term in cascade order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermMatches(IndexMap<String, TermMatch>);

impl TermMatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains_key(term)
    }

    pub fn get(&self, term: &str) -> Option<&TermMatch> {
        self.0.get(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermMatch)> {
        self.0.iter().map(|(term, found)| (term.as_str(), found))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Record a term unless an earlier stage already claimed it.
    pub fn record(&mut self, term: &str, definition: &str, method: MatchMethod) -> bool {
        if self.0.contains_key(term) {
            return false;
        }
        self.0.insert(
            term.to_string(),
            TermMatch {
                definition: definition.to_string(),
                method,
            },
        );
        true
    }

    /// Flatten into `{term, definition, method}` records for export.
    pub fn to_records(&self) -> Vec<RecognizedTerm> {
        self.iter()
            .map(|(term, found)| RecognizedTerm {
                term: term.to_string(),
                definition: found.definition.clone(),
                method: found.method.to_string(),
            })
            .collect()
    }
}

/// Export shape of a single recognised term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedTerm {
    pub term: String,
    pub definition: String,
    pub method: String,
}
