//! Output mode selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Controls whether a [`Printer`](crate::Printer) emits escape sequences.
///
/// The mode is resolved once, when the printer is built, into the fixed
/// styling flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Style only when the destination is a terminal.
    #[default]
    Auto,
    /// Always style.
    #[serde(alias = "always")]
    Term,
    /// Never style.
    #[serde(alias = "never")]
    Text,
}

impl OutputMode {
    /// Resolves this mode against the result of terminal detection.
    pub fn should_use_color(self, is_term: bool) -> bool {
        match self {
            OutputMode::Auto => is_term,
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" | "always" => Ok(OutputMode::Term),
            "text" | "never" => Ok(OutputMode::Text),
            _ => Err(ParseOutputModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Error returned when a string does not name an [`OutputMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputModeError {
    input: String,
}

impl std::fmt::Display for ParseOutputModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown output mode '{}' (expected auto, term or text)",
            self.input
        )
    }
}

impl std::error::Error for ParseOutputModeError {}
