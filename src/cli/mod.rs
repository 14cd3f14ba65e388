//! Command-line interface wiring for clausease.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod analyze;
pub mod recognize;
pub mod serve;
pub mod terms;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Contract clause analyzer and legal-term recognizer", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    stages: StageArgs,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, mut settings: Settings) -> Result<()> {
        self.stages.apply(&mut settings);
        match self.command {
            Commands::Recognize(args) => recognize::run(args, settings).await,
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Terms => terms::run(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recognise legal terms in a single clause.
    Recognize(recognize::Args),
    /// Split a contract into clauses and analyse each one.
    Analyze(analyze::Args),
    /// Print the term dictionary.
    Terms,
    /// Serve the JSON API.
    Serve(serve::Args),
}

/// Cascade overrides applied on top of the environment.
#[derive(Debug, Clone, Args)]
pub struct StageArgs {
    /// Skip the fuzzy matching stage.
    #[arg(long, global = true)]
    pub no_fuzzy: bool,
    /// Skip the clause-classifier fallback stage.
    #[arg(long, global = true)]
    pub no_fallback: bool,
    /// Override the fuzzy similarity floor.
    #[arg(long, global = true)]
    pub fuzzy_cutoff: Option<f64>,
}

impl StageArgs {
    pub fn apply(&self, settings: &mut Settings) {
        if self.no_fuzzy {
            settings.fuzzy_enabled = false;
        }
        if self.no_fallback {
            settings.fallback_enabled = false;
        }
        if let Some(cutoff) = self.fuzzy_cutoff {
            settings.fuzzy_cutoff = cutoff;
        }
    }
}

/// Output rendering for reports.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Human-readable listing.
    Text,
}
