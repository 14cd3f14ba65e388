use clausease::{
    error::ClassifierError,
    terms::{Recognizer, Stage},
};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "the", "party", "shall", "indemnify", "breach", "arbitrtion", "terminated", "confidential",
    "notice", "force", "majeure", "venue", "secret", "keep", "of", "hold", "harmless", "resign",
    "employer", "days", "jurisdiction", "termination", "proprietary", "information",
];

fn predicts_termination(_: &str) -> Result<String, ClassifierError> {
    Ok("Termination".to_string())
}

fn clause() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..16).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn recognition_is_deterministic(text in clause()) {
        let engine = Recognizer::builtin().unwrap();
        let first = engine.recognize(&text, &predicts_termination);
        let second = engine.recognize(&text, &predicts_termination);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fuzzy_never_mixes_with_lexical_hits(text in clause()) {
        let engine = Recognizer::builtin().unwrap();
        let found = engine.recognize(&text, &predicts_termination);
        let stages: Vec<Stage> = found.iter().map(|(_, m)| m.method.stage()).collect();
        if stages.iter().any(|s| *s <= Stage::Pattern) {
            prop_assert!(stages.iter().all(|s| *s <= Stage::Pattern));
        }
        if stages.contains(&Stage::Inferred) {
            prop_assert_eq!(stages.len(), 1);
        }
    }

    #[test]
    fn standalone_canonical_terms_are_exact(text in clause()) {
        let engine = Recognizer::builtin().unwrap();
        let found = engine.recognize(&text, &predicts_termination);
        let padded = format!(" {text} ");
        for term in engine.definitions().keys() {
            if padded.contains(&format!(" {term} ")) {
                let method = found.get(term).map(|m| m.method.stage());
                prop_assert_eq!(method, Some(Stage::Exact));
            }
        }
    }

    #[test]
    fn empty_clauses_after_cascade_infer_exactly_one_term(text in clause()) {
        let engine = Recognizer::builtin().unwrap();
        let lexical = engine.match_text(&text);
        let found = engine.recognize(&text, &predicts_termination);
        if lexical.is_empty() && !text.trim().is_empty() {
            prop_assert_eq!(found.len(), 1);
            prop_assert_eq!(
                found.get("termination").map(|m| m.method.to_string()),
                Some("inferred_from_clause:Termination".to_string())
            );
        } else {
            prop_assert_eq!(found, lexical);
        }
    }
}
