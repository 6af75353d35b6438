//! Pure composition of style tokens into escape sequences.

use super::token::Style;

/// Starts an SGR escape sequence.
pub const START_MARKER: &str = "\x1b[";
/// Terminates an SGR escape sequence.
pub const END_MARKER: &str = "m";
/// Separates style codes inside one escape sequence.
pub const SEPARATOR: char = ';';

/// Joins the codes of `styles` with [`SEPARATOR`].
///
/// An empty slice yields an empty string.
pub fn join(styles: &[Style]) -> String {
    let mut joined = String::new();
    for (i, style) in styles.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(style.code());
    }
    joined
}

/// Returns the escape sequence that activates `styles`.
///
/// With no styles this is still a complete (empty) sequence, `"\x1b[m"`.
///
/// # Example
///
/// ```rust
/// use ttycolor::{activate, Style};
///
/// assert_eq!(activate(&[Style::Bold, Style::ForegroundRed]), "\x1b[1;31m");
/// assert_eq!(activate(&[]), "\x1b[m");
/// ```
pub fn activate(styles: &[Style]) -> String {
    format!("{}{}{}", START_MARKER, join(styles), END_MARKER)
}

/// Wraps `message` in the activation sequence for `styles` and a trailing reset.
///
/// Returns `message` unchanged when `styles` is empty. Otherwise the result
/// always ends in `"\x1b[0m"`, whatever `styles` contains.
///
/// # Example
///
/// ```rust
/// use ttycolor::{apply_styles, Style};
///
/// assert_eq!(apply_styles("hi", &[Style::Bold]), "\x1b[1mhi\x1b[0m");
/// assert_eq!(apply_styles("hi", &[]), "hi");
/// ```
pub fn apply_styles(message: &str, styles: &[Style]) -> String {
    if styles.is_empty() {
        return message.to_string();
    }
    let mut styled = activate(styles);
    styled.push_str(message);
    styled.push_str(&activate(&[Style::Reset]));
    styled
}
