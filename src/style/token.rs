//! The closed set of SGR style tokens.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseStyleError;

/// A single SGR styling instruction.
///
/// Tokens are plain values: combine them into a slice to style a span of text.
/// Duplicate or conflicting tokens are passed through as given.
///
/// # Example
///
/// ```rust
/// use ttycolor::Style;
///
/// assert_eq!(Style::Bold.code(), "1");
/// assert_eq!(Style::ForegroundRed.code(), "31");
/// assert_eq!("bg-cyan".parse::<Style>().unwrap(), Style::BackgroundCyan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Resets all styles to their default.
    Reset,
    /// Renders text in bold (somewhat brighter).
    Bold,
    /// Restores the default weight.
    Default,

    /// Foreground color black.
    ForegroundBlack,
    /// Foreground color red.
    ForegroundRed,
    /// Foreground color green.
    ForegroundGreen,
    /// Foreground color yellow.
    ForegroundYellow,
    /// Foreground color blue.
    ForegroundBlue,
    /// Foreground color magenta.
    ForegroundMagenta,
    /// Foreground color cyan.
    ForegroundCyan,
    /// Foreground color white.
    ForegroundWhite,

    /// Background color black.
    BackgroundBlack,
    /// Background color red.
    BackgroundRed,
    /// Background color green.
    BackgroundGreen,
    /// Background color yellow.
    BackgroundYellow,
    /// Background color blue.
    BackgroundBlue,
    /// Background color magenta.
    BackgroundMagenta,
    /// Background color cyan.
    BackgroundCyan,
    /// Background color white.
    BackgroundWhite,
}

/// Color names in SGR order, shared by the foreground and background ranges.
const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Style {
    /// Every token, in declaration order.
    pub const ALL: [Style; 19] = [
        Style::Reset,
        Style::Bold,
        Style::Default,
        Style::ForegroundBlack,
        Style::ForegroundRed,
        Style::ForegroundGreen,
        Style::ForegroundYellow,
        Style::ForegroundBlue,
        Style::ForegroundMagenta,
        Style::ForegroundCyan,
        Style::ForegroundWhite,
        Style::BackgroundBlack,
        Style::BackgroundRed,
        Style::BackgroundGreen,
        Style::BackgroundYellow,
        Style::BackgroundBlue,
        Style::BackgroundMagenta,
        Style::BackgroundCyan,
        Style::BackgroundWhite,
    ];

    /// Returns the SGR parameter for this token.
    pub fn code(self) -> &'static str {
        match self {
            Style::Reset => "0",
            Style::Bold => "1",
            Style::Default => "22",
            Style::ForegroundBlack => "30",
            Style::ForegroundRed => "31",
            Style::ForegroundGreen => "32",
            Style::ForegroundYellow => "33",
            Style::ForegroundBlue => "34",
            Style::ForegroundMagenta => "35",
            Style::ForegroundCyan => "36",
            Style::ForegroundWhite => "37",
            Style::BackgroundBlack => "40",
            Style::BackgroundRed => "41",
            Style::BackgroundGreen => "42",
            Style::BackgroundYellow => "43",
            Style::BackgroundBlue => "44",
            Style::BackgroundMagenta => "45",
            Style::BackgroundCyan => "46",
            Style::BackgroundWhite => "47",
        }
    }

    /// Returns the kebab-case name used in configuration, e.g. `"fg-red"`.
    pub fn name(self) -> &'static str {
        match self {
            Style::Reset => "reset",
            Style::Bold => "bold",
            Style::Default => "default",
            Style::ForegroundBlack => "fg-black",
            Style::ForegroundRed => "fg-red",
            Style::ForegroundGreen => "fg-green",
            Style::ForegroundYellow => "fg-yellow",
            Style::ForegroundBlue => "fg-blue",
            Style::ForegroundMagenta => "fg-magenta",
            Style::ForegroundCyan => "fg-cyan",
            Style::ForegroundWhite => "fg-white",
            Style::BackgroundBlack => "bg-black",
            Style::BackgroundRed => "bg-red",
            Style::BackgroundGreen => "bg-green",
            Style::BackgroundYellow => "bg-yellow",
            Style::BackgroundBlue => "bg-blue",
            Style::BackgroundMagenta => "bg-magenta",
            Style::BackgroundCyan => "bg-cyan",
            Style::BackgroundWhite => "bg-white",
        }
    }

    fn foreground(index: usize) -> Option<Style> {
        Style::ALL[3..11].get(index).copied()
    }

    fn background(index: usize) -> Option<Style> {
        Style::ALL[11..19].get(index).copied()
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Parses a token from its name (`fg-red`), its long form
    /// (`foreground-red`) or its SGR code (`31`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();

        if let Some(style) = Style::ALL
            .iter()
            .find(|style| style.name() == normalized || style.code() == normalized)
        {
            return Ok(*style);
        }

        let (prefix, color) = normalized
            .split_once('-')
            .ok_or_else(|| ParseStyleError::new(s))?;
        let index = COLOR_NAMES
            .iter()
            .position(|name| *name == color)
            .ok_or_else(|| ParseStyleError::new(s))?;

        match prefix {
            "foreground" => Style::foreground(index),
            "background" => Style::background(index),
            _ => None,
        }
        .ok_or_else(|| ParseStyleError::new(s))
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a comma or whitespace separated list of style names.
///
/// Empty entries are skipped, so `""` parses to an empty list.
///
/// # Errors
///
/// Returns the error for the first entry that is not a known style.
///
/// # Example
///
/// ```rust
/// use ttycolor::{parse_styles, Style};
///
/// let styles = parse_styles("bold, fg-red").unwrap();
/// assert_eq!(styles, vec![Style::Bold, Style::ForegroundRed]);
/// ```
pub fn parse_styles(input: &str) -> Result<Vec<Style>, ParseStyleError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}
