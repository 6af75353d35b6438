//! Style tokens and their composition into ANSI SGR sequences.
//!
//! This module provides the styling primitives:
//!
//! - [`Style`]: The closed set of built-in style tokens
//! - [`join`], [`activate`], [`apply_styles`]: Pure escape-sequence composition
//! - [`parse_styles`]: Style lists from configuration strings
//! - [`ParseStyleError`]: Errors from style parsing

mod compose;
mod error;
mod token;

pub use compose::{activate, apply_styles, join, END_MARKER, SEPARATOR, START_MARKER};
pub use error::ParseStyleError;
pub use token::{parse_styles, Style};
