//! Document analysis: clause splitting, term recognition, classification and
//! simplification over a bounded worker pool.

pub mod classifier;
pub mod clauses;
pub mod report;
pub mod simplify;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::{task, time};
use tracing::{info, instrument};

use crate::{
    config::Settings,
    error::ClassifierError,
    terms::{ClauseClassifier, Recognizer, TermMatches},
};

use self::{
    classifier::{KeywordClassifier, UNKNOWN_LABEL},
    clauses::ClauseRecord,
    report::{ClauseReport, DocumentReport},
    simplify::{PlainLanguage, Simplifier},
};

const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(2);

/// Shared, read-only analysis pipeline.
pub struct Analyzer {
    engine: Arc<Recognizer>,
    classifier: Arc<dyn ClauseClassifier>,
    simplifier: Arc<dyn Simplifier>,
    workers: usize,
    classifier_timeout: Duration,
}

impl Analyzer {
    pub fn new(
        engine: Recognizer,
        classifier: Arc<dyn ClauseClassifier>,
        simplifier: Arc<dyn Simplifier>,
    ) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            engine: Arc::new(engine),
            classifier,
            simplifier,
            workers,
            classifier_timeout: DEFAULT_CLASSIFIER_TIMEOUT,
        }
    }

    /// Pipeline with the bundled classifier and simplifier.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let lexicon = settings.lexicon()?;
        let engine = Recognizer::new(&lexicon, settings.recognizer_options())
            .context("building term recognizer")?;
        let simplifier = PlainLanguage::new().context("building simplifier")?;
        Ok(Self::new(engine, Arc::new(KeywordClassifier), Arc::new(simplifier))
            .with_workers(settings.workers)
            .with_classifier_timeout(settings.classifier_timeout))
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_classifier_timeout(mut self, timeout: Duration) -> Self {
        self.classifier_timeout = timeout;
        self
    }

    pub fn engine(&self) -> &Recognizer {
        &self.engine
    }

    /// Recognise terms in a single clause.
    pub async fn recognize(&self, text: &str) -> Result<TermMatches> {
        let engine = Arc::clone(&self.engine);
        let owned = text.to_string();
        let mut found = task::spawn_blocking(move || engine.match_text(&owned))
            .await
            .context("recognition worker panicked")?;
        if self.engine.needs_inference(text, &found) {
            let outcome = self.classify(text).await;
            self.engine.apply_inference(&mut found, outcome.as_deref());
        }
        Ok(found)
    }

    /// Analyse a document, keeping clause order. `limit` stops scheduling
    /// after that many clauses.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn analyze(
        &self,
        source: Option<String>,
        text: &str,
        limit: Option<usize>,
    ) -> Result<DocumentReport> {
        let clauses = clauses::split_clauses(text);
        let total = clauses.len();
        let scheduled = clauses.into_iter().take(limit.unwrap_or(usize::MAX));

        let reports: Vec<ClauseReport> = stream::iter(scheduled)
            .map(|clause| self.analyze_clause(clause))
            .buffered(self.workers)
            .try_collect()
            .await?;

        let report = DocumentReport::new(source, reports);
        info!(
            clauses = total,
            analysed = report.clause_count,
            terms = report.term_counts.len(),
            "document analysed"
        );
        Ok(report)
    }

    async fn analyze_clause(&self, clause: ClauseRecord) -> Result<ClauseReport> {
        let engine = Arc::clone(&self.engine);
        let simplifier = Arc::clone(&self.simplifier);
        let cleaned = clause.cleaned_text.clone();
        let (mut terms, simple) = task::spawn_blocking(move || {
            let terms = engine.match_text(&cleaned);
            let simple = simplify::simplify_text(simplifier.as_ref(), &cleaned);
            (terms, simple)
        })
        .await
        .with_context(|| format!("clause {} worker panicked", clause.index + 1))?;

        let outcome = if clause.cleaned_text.trim().is_empty() {
            Ok(UNKNOWN_LABEL.to_string())
        } else {
            self.classify(&clause.cleaned_text).await
        };
        if self.engine.needs_inference(&clause.cleaned_text, &terms) {
            self.engine.apply_inference(&mut terms, outcome.as_deref());
        }

        Ok(ClauseReport {
            index: clause.index + 1,
            raw: clause.raw_text,
            cleaned: clause.cleaned_text,
            clause_type: outcome.unwrap_or_else(|_| UNKNOWN_LABEL.to_string()),
            terms: terms.to_records(),
            simple,
        })
    }

    /// Call the classifier off the async threads, bounded by the configured timeout.
    async fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        let classifier = Arc::clone(&self.classifier);
        let text = text.to_string();
        let call = task::spawn_blocking(move || classifier.classify(&text));
        match time::timeout(self.classifier_timeout, call).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(join)) => Err(ClassifierError::Failed(join.to_string())),
            Err(_) => Err(ClassifierError::Timeout(self.classifier_timeout)),
        }
    }
}
