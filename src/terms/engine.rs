//! The recognition cascade: exact, synonym, pattern, fuzzy, then inference.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    error::{ClassifierError, LexiconError},
    terms::{
        fallback::{ClauseClassifier, LabelInference},
        fuzzy::{FuzzyMatcher, DEFAULT_CUTOFF},
        lexicon::Lexicon,
        matchers::{ExactMatcher, PatternMatcher, SynonymMatcher, TermMatcher},
        normalize,
        result::TermMatches,
    },
};

/// Stage toggles and thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognizerOptions {
    pub fuzzy_cutoff: f64,
    pub fuzzy_enabled: bool,
    pub fallback_enabled: bool,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: DEFAULT_CUTOFF,
            fuzzy_enabled: true,
            fallback_enabled: true,
        }
    }
}

/// Stateless legal-term recogniser built once from a [`Lexicon`].
pub struct Recognizer {
    definitions: IndexMap<String, String>,
    lexical: Vec<Box<dyn TermMatcher>>,
    fuzzy: Option<FuzzyMatcher>,
    inference: Option<LabelInference>,
    options: RecognizerOptions,
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer")
            .field("terms", &self.definitions.len())
            .field("stages", &self.lexical.len())
            .field("options", &self.options)
            .finish()
    }
}

impl Recognizer {
    /// Validate the lexicon and compile every rule. Bad configuration fails here.
    pub fn new(lexicon: &Lexicon, options: RecognizerOptions) -> Result<Self, LexiconError> {
        lexicon.validate()?;
        let fuzzy = FuzzyMatcher::new(lexicon, options.fuzzy_cutoff)?;
        let lexical: Vec<Box<dyn TermMatcher>> = vec![
            Box::new(ExactMatcher::new(lexicon)?),
            Box::new(SynonymMatcher::new(lexicon)?),
            Box::new(PatternMatcher::new(lexicon)?),
        ];
        Ok(Self {
            definitions: lexicon.terms.clone(),
            lexical,
            fuzzy: options.fuzzy_enabled.then_some(fuzzy),
            inference: options
                .fallback_enabled
                .then(|| LabelInference::new(lexicon)),
            options,
        })
    }

    /// Recogniser over the bundled lexicon with default options.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::new(&Lexicon::builtin(), RecognizerOptions::default())
    }

    pub fn options(&self) -> RecognizerOptions {
        self.options
    }

    pub fn definitions(&self) -> &IndexMap<String, String> {
        &self.definitions
    }

    /// Run every stage through `text`, consulting `classifier` only when
    /// nothing was found lexically or fuzzily.
    pub fn recognize(&self, text: &str, classifier: &dyn ClauseClassifier) -> TermMatches {
        let mut found = self.match_text(text);
        if self.needs_inference(text, &found) {
            let outcome = classifier.classify(text);
            self.apply_inference(&mut found, outcome.as_deref());
        }
        found
    }

    /// Lexical stages followed by the fuzzy stage when they come up empty.
    pub fn match_text(&self, text: &str) -> TermMatches {
        let mut found = TermMatches::new();
        let normalized = normalize::normalize(text);
        if normalized.trim().is_empty() {
            return found;
        }

        for matcher in &self.lexical {
            self.run_stage(matcher.as_ref(), &normalized, &mut found);
        }
        if found.is_empty() {
            if let Some(fuzzy) = &self.fuzzy {
                for (term, method) in fuzzy.scan(&normalized) {
                    if let Some(definition) = self.definitions.get(term) {
                        debug!(%term, %method, "fuzzy candidate");
                        found.record(term, definition, method);
                    }
                }
            }
        }
        found
    }

    /// Whether the classifier fallback would contribute for this clause.
    pub fn needs_inference(&self, text: &str, found: &TermMatches) -> bool {
        self.inference.is_some()
            && found.is_empty()
            && !normalize::normalize(text).trim().is_empty()
    }

    /// Add the term implied by a classifier outcome to an empty result.
    pub fn apply_inference(
        &self,
        found: &mut TermMatches,
        outcome: Result<&str, &ClassifierError>,
    ) {
        if !found.is_empty() {
            return;
        }
        let Some(inference) = &self.inference else {
            return;
        };
        if let Some((term, method)) = inference.infer(outcome) {
            if let Some(definition) = self.definitions.get(term) {
                debug!(%term, %method, "inferred term from clause label");
                found.record(term, definition, method);
            }
        }
    }

    fn run_stage(&self, matcher: &dyn TermMatcher, text: &str, found: &mut TermMatches) {
        let stage = matcher.stage();
        for term in matcher.terms() {
            if found.contains(term) {
                continue;
            }
            let Some(method) = matcher.attempt(term, text) else {
                continue;
            };
            let Some(definition) = self.definitions.get(term) else {
                trace!(%term, ?stage, "matched term missing from dictionary");
                continue;
            };
            debug!(%term, %method, ?stage, "recognised term");
            found.record(term, definition, method);
        }
    }
}
