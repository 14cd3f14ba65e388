//! Document-level analysis records and their export formats.

use std::{fmt::Write as _, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::terms::RecognizedTerm;

/// Analysis of a single clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseReport {
    /// 1-based position within the document.
    pub index: usize,
    pub raw: String,
    pub cleaned: String,
    #[serde(rename = "type")]
    pub clause_type: String,
    pub terms: Vec<RecognizedTerm>,
    pub simple: String,
}

/// Analysis of a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub source: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub clause_count: usize,
    /// Number of clauses each term was recognised in, in first-seen order.
    pub term_counts: IndexMap<String, usize>,
    pub clauses: Vec<ClauseReport>,
}

impl DocumentReport {
    pub fn new(source: Option<String>, clauses: Vec<ClauseReport>) -> Self {
        let mut term_counts = IndexMap::new();
        for clause in &clauses {
            for found in &clause.terms {
                *term_counts.entry(found.term.clone()).or_insert(0) += 1;
            }
        }
        Self {
            source,
            generated_at: Utc::now(),
            clause_count: clauses.len(),
            term_counts,
            clauses,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(self)?;
        std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), clauses = self.clause_count, "wrote analysis report");
        Ok(())
    }

    /// Human-readable listing of every clause with its terms.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for clause in &self.clauses {
            let _ = writeln!(
                out,
                "Clause {} (predicted type: {}):",
                clause.index, clause.clause_type
            );
            let _ = writeln!(out, "{}", clause.cleaned);
            if clause.terms.is_empty() {
                let _ = writeln!(out, "No legal terms recognized.");
            } else {
                let _ = writeln!(out, "Recognized legal terms:");
                for found in &clause.terms {
                    let _ = writeln!(
                        out,
                        "  - {}: {} (method: {})",
                        found.term, found.definition, found.method
                    );
                }
            }
            let _ = writeln!(out, "Simplified: {}", clause.simple);
            let _ = writeln!(out, "{}", "-".repeat(80));
        }
        out
    }
}
