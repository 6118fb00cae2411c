use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use repcal_core::event::{Event, EventDraft};
use tracing::info;

use crate::render::pluralize;

pub fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    let content = read_input(input)?;
    let events = expand_draft(&content)?;
    let json = serde_json::to_string_pretty(&events)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!(
                "{}",
                format!(
                    "  Wrote {} {} to {}",
                    events.len(),
                    pluralize("event", events.len()),
                    path.display()
                )
                .if_supports_color(Stream::Stdout, |t| t.green())
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("Could not read stdin");
    }

    std::fs::read_to_string(input).with_context(|| format!("Could not read {}", input.display()))
}

/// Parse a draft and expand it into stored events.
fn expand_draft(content: &str) -> Result<Vec<Event>> {
    let draft: EventDraft = serde_json::from_str(content).context("Invalid event draft")?;
    let title = draft.title.clone();

    let events = draft.into_series()?;
    info!(title = %title, count = events.len(), "Expanded event series");

    Ok(events)
}
