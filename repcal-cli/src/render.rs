//! Output rendering for expanded dates.
//!
//! Colour is only applied when stdout is a terminal, so piped output stays plain.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use repcal_core::CalendarDate;
use repcal_core::config::OutputFormat;

/// Render occurrence dates in the requested format.
pub fn render_dates(dates: &[CalendarDate], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dates)?),
        OutputFormat::Text if dates.is_empty() => Ok("No occurrences"
            .if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()),
        OutputFormat::Text => Ok(dates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
