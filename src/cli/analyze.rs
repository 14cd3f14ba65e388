//! CLI entry-point for whole-document analysis.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};
use walkdir::WalkDir;

use crate::{
    cli::OutputFormat,
    config::Settings,
    pipeline::{report::DocumentReport, Analyzer},
};

/// Args for the `analyze` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Contract text file, or a directory of `.txt`/`.md` files.
    pub input: PathBuf,
    /// Analyse at most this many clauses per document.
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
    /// Do not persist `<name>.results.json` under the outputs dir.
    #[arg(long)]
    pub no_write: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let documents = collect_inputs(&args.input)?;
    if documents.is_empty() {
        bail!("no text documents found under {}", args.input.display());
    }
    let analyzer = Analyzer::from_settings(&settings)?;

    let mut reports = Vec::with_capacity(documents.len());
    for path in &documents {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string();
        let report = analyzer.analyze(Some(name.clone()), &text, args.limit).await?;
        if !args.no_write {
            report.write_json(&settings.join_output(format!("{name}.results.json")))?;
        }
        reports.push(report);
    }
    info!(documents = reports.len(), "analysis complete");

    print_reports(&reports, args.format, args.input.is_dir())
}

fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry?;
        let is_text = matches!(
            entry.path().extension().and_then(|s| s.to_str()),
            Some("txt") | Some("md")
        );
        if entry.file_type().is_file() && is_text {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn print_reports(reports: &[DocumentReport], format: OutputFormat, many: bool) -> Result<()> {
    match format {
        OutputFormat::Json if many => println!("{}", serde_json::to_string_pretty(reports)?),
        OutputFormat::Json => {
            for report in reports {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
        }
        OutputFormat::Text => {
            for report in reports {
                if let Some(source) = &report.source {
                    println!("== {source}");
                }
                print!("{}", report.render_text());
            }
        }
    }
    Ok(())
}
