//! Split contract text into clause records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ENUMERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+(?:\.\d+)+\.?|\d+[.)]|\([a-z0-9]{1,4}\))\s+")
        .expect("valid regex")
});
static HORIZONTAL_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").expect("valid regex"));

/// One clause as produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseRecord {
    pub index: usize,
    pub raw_text: String,
    pub cleaned_text: String,
}

/// Break a document into clauses at blank lines and numbered section openers.
pub fn split_clauses(text: &str) -> Vec<ClauseRecord> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ENUMERATOR.is_match(line) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .into_iter()
        .filter_map(|lines| {
            let raw_text = lines.join("\n");
            let cleaned_text = clean(&raw_text);
            (!cleaned_text.is_empty()).then_some((raw_text, cleaned_text))
        })
        .enumerate()
        .map(|(index, (raw_text, cleaned_text))| ClauseRecord {
            index,
            raw_text,
            cleaned_text,
        })
        .collect()
}

/// Drop a leading enumerator and tidy whitespace, keeping line breaks.
pub fn clean(raw: &str) -> String {
    let body = ENUMERATOR.replace(raw, "");
    body.lines()
        .map(|line| HORIZONTAL_SPACE.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
