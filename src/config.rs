//! Runtime configuration utilities for clausease.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};

use crate::terms::{fuzzy::DEFAULT_CUTOFF, Lexicon, RecognizerOptions};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Optional JSON lexicon replacing the bundled one.
    pub lexicon_path: Option<PathBuf>,
    /// Similarity floor for the fuzzy stage.
    pub fuzzy_cutoff: f64,
    pub fuzzy_enabled: bool,
    pub fallback_enabled: bool,
    /// Upper bound on a single clause-classifier call.
    pub classifier_timeout: Duration,
    /// Clause worker pool size.
    pub workers: usize,
    /// Root folder for analysis reports.
    pub outputs_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            fuzzy_cutoff: DEFAULT_CUTOFF,
            fuzzy_enabled: true,
            fallback_enabled: true,
            classifier_timeout: Duration::from_millis(2000),
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            outputs_dir: PathBuf::from("./outputs"),
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let lexicon_path = env::var("LEXICON_PATH").ok().map(PathBuf::from);
        let fuzzy_cutoff = parsed("FUZZY_CUTOFF")?.unwrap_or(defaults.fuzzy_cutoff);
        let fuzzy_enabled = flag("FUZZY_ENABLED")?.unwrap_or(defaults.fuzzy_enabled);
        let fallback_enabled = flag("FALLBACK_ENABLED")?.unwrap_or(defaults.fallback_enabled);
        let classifier_timeout = parsed("CLASSIFIER_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.classifier_timeout);
        let workers = match parsed::<usize>("WORKERS")? {
            Some(0) => bail!("WORKERS must be at least 1"),
            Some(n) => n,
            None => defaults.workers,
        };
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.outputs_dir);

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            lexicon_path,
            fuzzy_cutoff,
            fuzzy_enabled,
            fallback_enabled,
            classifier_timeout,
            workers,
            outputs_dir,
        })
    }

    /// The configured lexicon, or the bundled one.
    pub fn lexicon(&self) -> anyhow::Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_path(path).context("loading lexicon"),
            None => Ok(Lexicon::builtin()),
        }
    }

    pub fn recognizer_options(&self) -> RecognizerOptions {
        RecognizerOptions {
            fuzzy_cutoff: self.fuzzy_cutoff,
            fuzzy_enabled: self.fuzzy_enabled,
            fallback_enabled: self.fallback_enabled,
        }
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

fn parsed<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {key}={value:?}")),
        Err(_) => Ok(None),
    }
}

fn flag(key: &str) -> anyhow::Result<Option<bool>> {
    let Ok(value) = env::var(key) else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => bail!("invalid {key}={value:?}: expected a boolean"),
    }
}
