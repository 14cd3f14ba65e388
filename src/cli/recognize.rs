//! CLI entry-point for single-clause term recognition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{cli::OutputFormat, config::Settings, pipeline::Analyzer};

/// Args for the `recognize` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Clause text to analyse.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,
    /// Read the clause from a file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => String::new(),
    };

    let analyzer = Analyzer::from_settings(&settings)?;
    let found = analyzer.recognize(&text).await?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found.to_records())?),
        OutputFormat::Text if found.is_empty() => println!("No legal terms recognized."),
        OutputFormat::Text => {
            for (term, info) in found.iter() {
                println!("{term}: {} (method: {})", info.definition, info.method);
            }
        }
    }
    Ok(())
}
