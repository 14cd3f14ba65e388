//! Static reference data for term recognition: definitions, synonyms,
//! semantic patterns and the clause-label map.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LexiconError;

const LEGAL_TERMS: &[(&str, &str)] = &[
    (
        "indemnity",
        "Security or protection against a loss or other financial burden.",
    ),
    (
        "arbitration",
        "A method of resolving disputes outside the courts.",
    ),
    (
        "force majeure",
        "Unforeseeable circumstances that prevent someone from fulfilling a contract.",
    ),
    (
        "breach",
        "A violation of a law, duty, or other form of obligation.",
    ),
    (
        "jurisdiction",
        "The official power to make legal decisions and judgments.",
    ),
    (
        "confidentiality",
        "Obligation to keep certain information secret.",
    ),
    (
        "termination",
        "Ending of the contract or agreement before its natural expiry.",
    ),
];

// Synonyms are matched literally as bounded words, so stem-like entries
// ("arbitrat", "disclos") only hit when they stand alone.
const TERM_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "indemnity",
        &["indemnify", "hold harmless", "liability", "indemnification"],
    ),
    ("arbitration", &["arbitrat", "tribunal", "panel"]),
    (
        "force majeure",
        &["force majeure", "act of god", "unforeseeable"],
    ),
    ("breach", &["breach", "violation", "commit a breach"]),
    ("jurisdiction", &["jurisdiction", "venue", "competent court"]),
    (
        "confidentiality",
        &["confidential", "non-disclosure", "non disclosure", "secret", "disclos"],
    ),
    (
        "termination",
        &["terminate", "termination", "expiry", "end of employment", "dismissal"],
    ),
];

const TERM_PATTERNS: &[(&str, &[&str])] = &[
    (
        "confidentiality",
        &[r"not to disclose", r"not disclose", r"keep .* secret", r"non[- ]disclos"],
    ),
    (
        "termination",
        &[r"terminat", r"end of employ", r"dismissal", r"resigne?"],
    ),
    ("indemnity", &[r"hold harmless", r"indemnif", r"liabilit"]),
    (
        "arbitration",
        &[r"arbitrat", r"dispute resolution", r"mediation"],
    ),
    (
        "force majeure",
        &[r"force majeure", r"act of god", r"unforeseeable circum"],
    ),
    ("breach", &[r"breach of", r"violation of"]),
    (
        "jurisdiction",
        &[r"jurisdiction", r"governed by the laws of", r"venue for"],
    ),
];

const CLAUSE_LABEL_TERMS: &[(&str, &str)] = &[
    ("Confidentiality", "confidentiality"),
    ("Termination", "termination"),
    ("Indemnity", "indemnity"),
    ("Dispute Resolution", "arbitration"),
    ("Governing Law", "jurisdiction"),
];

/// Immutable recognition configuration. Key order in every table is the
/// order in which the corresponding cascade stage visits terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Canonical term (lowercase) to human-readable definition.
    pub terms: IndexMap<String, String>,
    /// Canonical term to alternate surface forms, in priority order.
    #[serde(default)]
    pub synonyms: IndexMap<String, Vec<String>>,
    /// Canonical term to regular expressions, first match wins.
    #[serde(default)]
    pub patterns: IndexMap<String, Vec<String>>,
    /// Clause-classifier label to canonical term.
    #[serde(default)]
    pub labels: IndexMap<String, String>,
}

impl Lexicon {
    /// The bundled contract-law lexicon.
    pub fn builtin() -> Self {
        Self {
            terms: pairs(LEGAL_TERMS),
            synonyms: lists(TERM_SYNONYMS),
            patterns: lists(TERM_PATTERNS),
            labels: pairs(CLAUSE_LABEL_TERMS),
        }
    }

    /// Load a lexicon from a JSON document.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon: Self = serde_json::from_str(&raw).map_err(|source| LexiconError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            terms = lexicon.terms.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Look up the definition recorded for a canonical term.
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.terms.get(term).map(String::as_str)
    }

    /// Check that every table only refers to terms present in the dictionary.
    pub fn validate(&self) -> Result<(), LexiconError> {
        if self.terms.is_empty() {
            return Err(LexiconError::EmptyDictionary);
        }
        self.check_lists("synonym", &self.synonyms)?;
        self.check_lists("pattern", &self.patterns)?;
        if let Some(term) = self.labels.values().find(|t| !self.terms.contains_key(*t)) {
            return Err(LexiconError::UnknownTerm {
                table: "label",
                term: term.clone(),
            });
        }
        Ok(())
    }

    fn check_lists(
        &self,
        table: &'static str,
        lists: &IndexMap<String, Vec<String>>,
    ) -> Result<(), LexiconError> {
        for (term, entries) in lists {
            if !self.terms.contains_key(term) {
                return Err(LexiconError::UnknownTerm {
                    table,
                    term: term.clone(),
                });
            }
            if entries.iter().any(|entry| entry.trim().is_empty()) {
                return Err(LexiconError::EmptyEntry {
                    table,
                    term: term.clone(),
                });
            }
        }
        Ok(())
    }
}

fn pairs(source: &[(&str, &str)]) -> IndexMap<String, String> {
    source
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn lists(source: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
    source
        .iter()
        .map(|(key, values)| {
            (
                (*key).to_string(),
                values.iter().map(|v| (*v).to_string()).collect(),
            )
        })
        .collect()
}
