//! Typed errors raised at the recognition engine's boundaries.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// Configuration problems detected while loading a lexicon or building a recognizer.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("reading lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lexicon {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("term dictionary is empty")]
    EmptyDictionary,
    #[error("{table} table references unknown term `{term}`")]
    UnknownTerm { table: &'static str, term: String },
    #[error("{table} table has an empty entry for term `{term}`")]
    EmptyEntry { table: &'static str, term: String },
    #[error("invalid pattern `{pattern}` for term `{term}`: {source}")]
    InvalidPattern {
        term: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("fuzzy cutoff must lie within [0, 1], got {0}")]
    InvalidCutoff(f64),
}

/// Failures of the external clause classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    #[error("clause classifier unavailable: {0}")]
    Unavailable(String),
    #[error("clause classifier timed out after {0:?}")]
    Timeout(Duration),
    #[error("clause classifier failed: {0}")]
    Failed(String),
}
