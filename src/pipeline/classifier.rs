//! Cue-phrase clause classifier. Stands in for a fine-tuned legal language model.

use crate::{error::ClassifierError, terms::ClauseClassifier};

/// Closed label set produced by clause classifiers.
pub const CLAUSE_LABELS: [&str; 5] = [
    "Confidentiality",
    "Termination",
    "Indemnity",
    "Dispute Resolution",
    "Governing Law",
];

/// Label reported when a clause carries no usable signal.
pub const UNKNOWN_LABEL: &str = "Unknown";

const LABEL_CUES: &[(&str, &[&str])] = &[
    (
        "Confidentiality",
        &["confidential", "proprietary", "trade secret", "information", "disclose"],
    ),
    (
        "Termination",
        &["terminat", "notice period", "expire", "cease", "resign"],
    ),
    (
        "Indemnity",
        &["indemn", "hold harmless", "losses", "damages", "reimburse"],
    ),
    (
        "Dispute Resolution",
        &["dispute", "arbitrat", "mediat", "tribunal", "settle"],
    ),
    (
        "Governing Law",
        &["governed by", "laws of", "governing law", "courts of", "venue"],
    ),
];

/// Scores each label by the number of its cue phrases present in the clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl ClauseClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        let lower = text.to_lowercase();
        if lower.trim().is_empty() {
            return Ok(UNKNOWN_LABEL.to_string());
        }
        let mut best = (0usize, UNKNOWN_LABEL);
        for (label, cues) in LABEL_CUES {
            let hits = cues.iter().filter(|cue| lower.contains(*cue)).count();
            if hits > best.0 {
                best = (hits, *label);
            }
        }
        Ok(best.1.to_string())
    }
}
