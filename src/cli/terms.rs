//! CLI entry-point for listing the term dictionary.

use anyhow::Result;
use tracing::instrument;

use crate::config::Settings;

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let lexicon = settings.lexicon()?;
    lexicon.validate()?;
    for (term, definition) in &lexicon.terms {
        println!("{term}: {definition}");
    }
    Ok(())
}
