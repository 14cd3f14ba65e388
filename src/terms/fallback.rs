//! Last-resort inference from the clause's predicted category.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    error::ClassifierError,
    terms::{lexicon::Lexicon, result::MatchMethod},
};

/// External clause-type classifier.
pub trait ClauseClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<String, ClassifierError>;
}

impl<F> ClauseClassifier for F
where
    F: Fn(&str) -> Result<String, ClassifierError> + Send + Sync,
{
    fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        self(text)
    }
}

/// Classifier used when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl ClauseClassifier for NoClassifier {
    fn classify(&self, _text: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::Unavailable("no clause classifier configured".into()))
    }
}

/// Maps classifier labels onto canonical terms.
#[derive(Debug, Clone)]
pub struct LabelInference {
    labels: IndexMap<String, String>,
}

impl LabelInference {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            labels: lexicon.labels.clone(),
        }
    }

    /// Term implied by a classifier outcome. Failures and unmapped labels yield nothing.
    pub fn infer(&self, outcome: Result<&str, &ClassifierError>) -> Option<(&str, MatchMethod)> {
        let label = match outcome {
            Ok(label) => label,
            Err(err) => {
                warn!(error = %err, "clause classifier failed; no term inferred");
                return None;
            }
        };
        match self.labels.get(label) {
            Some(term) => Some((term.as_str(), MatchMethod::Inferred(label.to_string()))),
            None => {
                debug!(%label, "clause label has no mapped term");
                None
            }
        }
    }
}
