use std::sync::atomic::{AtomicUsize, Ordering};

use clausease::{
    error::ClassifierError,
    terms::{
        fuzzy::FuzzyMatcher, normalize, ClauseClassifier, Lexicon, MatchMethod, NoClassifier,
        Recognizer, RecognizerOptions,
    },
};

fn engine() -> Recognizer {
    Recognizer::builtin().expect("builtin lexicon is valid")
}

fn lexical_only() -> Recognizer {
    let options = RecognizerOptions {
        fuzzy_enabled: false,
        fallback_enabled: false,
        ..RecognizerOptions::default()
    };
    Recognizer::new(&Lexicon::builtin(), options).expect("builtin lexicon is valid")
}

fn predicts_confidentiality(_: &str) -> Result<String, ClassifierError> {
    Ok("Confidentiality".to_string())
}

#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
}

impl ClauseClassifier for Counting {
    fn classify(&self, _text: &str) -> Result<String, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("Termination".to_string())
    }
}

fn method(found: &clausease::terms::TermMatches, term: &str) -> String {
    found
        .get(term)
        .unwrap_or_else(|| panic!("{term} not recognised"))
        .method
        .to_string()
}

#[test]
fn normalizer_strips_punctuation_but_keeps_newlines() {
    assert_eq!(
        normalize::normalize("Force-Majeure, Act!\nNext"),
        "force majeure  act \nnext"
    );
    assert_eq!(
        normalize::tokens("hello  world\nnext"),
        vec!["hello", "world", "next"]
    );
}

#[test]
fn indemnify_is_found_through_first_matching_synonym() {
    let found = engine().recognize(
        "The Employee agrees to indemnify the Employer and hold harmless...",
        &NoClassifier,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "indemnity"), "synonym:indemnify");
}

#[test]
fn hold_harmless_synonym() {
    let found = engine().recognize("The Lessee shall hold harmless the Lessor.", &NoClassifier);
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "indemnity"), "synonym:hold harmless");
    assert_eq!(
        found.get("indemnity").map(|m| m.definition.as_str()),
        Lexicon::builtin().definition("indemnity")
    );
}

#[test]
fn inflected_verb_falls_through_to_stem_pattern() {
    let found = engine().recognize(
        "This Agreement will be terminated upon 30 days written notice.",
        &NoClassifier,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "termination"), "pattern:terminat");
}

#[test]
fn bare_verb_is_listed_as_synonym() {
    let found = engine().recognize(
        "This Agreement shall terminate upon 30 days written notice.",
        &NoClassifier,
    );
    assert_eq!(method(&found, "termination"), "synonym:terminate");
}

#[test]
fn stem_synonyms_are_matched_literally() {
    let found = engine().recognize("The parties shall arbitrate any dispute.", &NoClassifier);
    assert_eq!(method(&found, "arbitration"), "pattern:arbitrat");
}

#[test]
fn blank_input_never_reaches_the_classifier() {
    let counting = Counting::default();
    let engine = engine();
    assert!(engine.recognize("", &counting).is_empty());
    assert!(engine.recognize("  \n\t ", &counting).is_empty());
    assert!(engine.recognize("...!?", &counting).is_empty());
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn classifier_label_is_mapped_when_nothing_matches() {
    let found = engine().recognize(
        "The Recipient shall protect all proprietary information received.",
        &predicts_confidentiality,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(
        found.get("confidentiality").map(|m| &m.method),
        Some(&MatchMethod::Inferred("Confidentiality".into()))
    );
    assert_eq!(
        method(&found, "confidentiality"),
        "inferred_from_clause:Confidentiality"
    );
}

#[test]
fn classifier_failures_yield_an_empty_result() {
    let engine = engine();
    let text = "The Recipient shall protect all proprietary information received.";

    let unavailable =
        |_: &str| -> Result<String, ClassifierError> { Err(ClassifierError::Failed("boom".into())) };
    assert!(engine.recognize(text, &unavailable).is_empty());

    let unmapped = |_: &str| -> Result<String, ClassifierError> { Ok("Unknown".into()) };
    assert!(engine.recognize(text, &unmapped).is_empty());

    assert!(engine.recognize(text, &NoClassifier).is_empty());
}

#[test]
fn classifier_is_skipped_when_terms_were_found() {
    let counting = Counting::default();
    let found = engine().recognize("Any breach of this Agreement.", &counting);
    assert_eq!(method(&found, "breach"), "exact");
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn disabled_fallback_does_not_consult_classifier() {
    let counting = Counting::default();
    let found = lexical_only().recognize("Nothing of note here.", &counting);
    assert!(found.is_empty());
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn earliest_stage_wins_and_terms_are_unique() {
    // "breach" is a canonical term, a synonym and part of a pattern.
    let found = engine().recognize("Any breach of this Agreement.", &NoClassifier);
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "breach"), "exact");
}

#[test]
fn multiple_exact_terms_follow_dictionary_order() {
    let found = engine().recognize(
        "Any breach shall be settled by arbitration under the jurisdiction of London courts.",
        &NoClassifier,
    );
    let terms: Vec<&str> = found.terms().collect();
    assert_eq!(terms, vec!["arbitration", "breach", "jurisdiction"]);
    assert!(found.iter().all(|(_, m)| m.method == MatchMethod::Exact));
}

#[test]
fn result_order_follows_stage_order() {
    let found = engine().recognize(
        "The employee may resign; confidential data stays.",
        &NoClassifier,
    );
    let terms: Vec<&str> = found.terms().collect();
    assert_eq!(terms, vec!["confidentiality", "termination"]);
    assert_eq!(method(&found, "confidentiality"), "synonym:confidential");
    assert_eq!(method(&found, "termination"), "pattern:resigne?");
}

#[test]
fn multi_word_terms_need_phrase_boundaries() {
    let engine = lexical_only();
    let found = engine.recognize("Delays from Force-Majeure events.", &NoClassifier);
    assert_eq!(method(&found, "force majeure"), "exact");

    let glued = engine.recognize("A forcemajeure clause applies.", &NoClassifier);
    assert!(!glued.contains("force majeure"));
}

#[test]
fn typo_is_caught_by_fuzzy_stage() {
    let counting = Counting::default();
    let found = engine().recognize("The parties submit to arbitrtion in London.", &counting);
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "arbitration"), "fuzzy:arbitrtion");
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn fuzzy_compares_multi_word_terms_with_single_tokens() {
    let text = "Delay caused by force majeur events.";
    let found = engine().recognize(text, &predicts_confidentiality);
    assert_eq!(found.len(), 1);
    assert!(!found.contains("force majeure"));
    assert_eq!(
        method(&found, "confidentiality"),
        "inferred_from_clause:Confidentiality"
    );
}

#[test]
fn fuzzy_catches_a_dropped_letter_in_a_short_term() {
    let counting = Counting::default();
    let found = engine().recognize("A material breah occurred.", &counting);
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "breach"), "fuzzy:breah");
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn fuzzy_is_suppressed_once_anything_matched_lexically() {
    let found = engine().recognize("A breach and an arbitrtion.", &NoClassifier);
    assert_eq!(found.len(), 1);
    assert_eq!(method(&found, "breach"), "exact");
}

#[test]
fn fuzzy_respects_cutoff_and_toggle() {
    let text = "The parties submit to arbitrtion in London.";
    assert!(lexical_only().recognize(text, &NoClassifier).is_empty());

    let strict = Recognizer::new(
        &Lexicon::builtin(),
        RecognizerOptions {
            fuzzy_cutoff: 0.96,
            fallback_enabled: false,
            ..RecognizerOptions::default()
        },
    )
    .expect("valid options");
    assert!(strict.recognize(text, &NoClassifier).is_empty());
}

#[test]
fn fuzzy_ties_keep_the_first_candidate() {
    let fuzzy = FuzzyMatcher::new(&Lexicon::builtin(), 0.85).expect("valid cutoff");
    let token = fuzzy
        .closest("arbitration", &["arbitrtion", "arbitraion"])
        .expect("both tokens clear the floor");
    assert_eq!(token, "arbitrtion");
    assert!(fuzzy.closest("arbitration", &["contract"]).is_none());
    assert!(fuzzy.closest("force majeure", &["force", "majeur"]).is_none());
}

#[test]
fn fuzzy_scan_reports_every_term_from_one_pass() {
    let fuzzy = FuzzyMatcher::new(&Lexicon::builtin(), 0.85).expect("valid cutoff");
    let hits = fuzzy.scan("breah of the arbitrtion terms");
    let terms: Vec<&str> = hits.iter().map(|(term, _)| *term).collect();
    assert_eq!(terms, ["arbitration", "breach"]);
    assert_eq!(hits[1].1, MatchMethod::Fuzzy("breah".into()));
}

#[test]
fn records_export_method_tags() {
    let found = engine().recognize("The Lessee shall hold harmless the Lessor.", &NoClassifier);
    let records = found.to_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].term, "indemnity");
    assert_eq!(records[0].method, "synonym:hold harmless");

    let json = serde_json::to_value(&found).expect("serialisable");
    assert_eq!(json["indemnity"]["method"], "synonym:hold harmless");
}
