//! Rendering parse outcomes.

use std::fmt;

use oxide_ident_core::{MatchStatus, ParseOutcome};
use serde::Serialize;

use crate::error::Result;

/// Output style selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `|input| => OK B=|..| C=|..|` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// One checked input and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The input exactly as given.
    pub input: String,
    /// The parse outcome.
    pub outcome: ParseOutcome,
}

impl Report {
    /// Pairs an input with its outcome.
    #[must_use]
    pub fn new(input: impl Into<String>, outcome: ParseOutcome) -> Self {
        Self {
            input: input.into(),
            outcome,
        }
    }

    /// Renders the report in `format`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for JSON output.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Json => serde_json::to_string(self)?,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}| => ", self.input)?;
        match self.outcome.status() {
            MatchStatus::Matched => write!(
                f,
                "OK B=|{}| C=|{}|",
                self.outcome.first_part(),
                self.outcome.second_part()
            ),
            MatchStatus::NoMatch => write!(f, "NOK"),
            MatchStatus::TrailingInput { position } => {
                write!(f, "NOK (unexpected input at {position})")
            }
        }
    }
}
