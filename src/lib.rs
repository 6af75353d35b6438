//! # ttycolor - Conditionally styled terminal output
//!
//! `ttycolor` wraps an output sink and styles text with ANSI SGR escape
//! sequences only when styling is enabled. Whether it is enabled is decided
//! once, when the [`Printer`] is created, usually by asking whether the
//! destination is a terminal. Redirected output gets the exact same text
//! without escape sequences, so applications can use one colorized API
//! everywhere.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ttycolor::{args, Printer, Style};
//!
//! let mut p = Printer::stdout();
//! let colored = p.styled("colored", &[Style::ForegroundCyan]);
//! p.printf("Welcome to {} output!", &args![colored, Style::Bold])?;
//! p.println("", &[])?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Styles
//!
//! [`Style`] is a closed set of tokens: [`Style::Reset`], [`Style::Bold`],
//! [`Style::Default`] and the eight foreground and background colors. A
//! slice of styles is applied as one escape sequence, in the given order,
//! and every styled span ends with a reset:
//!
//! ```rust
//! use ttycolor::{apply_styles, Style};
//!
//! let s = apply_styles("warn", &[Style::Bold, Style::ForegroundYellow]);
//! assert_eq!(s, "\x1b[1;33mwarn\x1b[0m");
//! ```
//!
//! Styles can also come from configuration, by name:
//!
//! ```rust
//! use ttycolor::{parse_styles, Style};
//!
//! assert_eq!(
//!     parse_styles("bold fg-red").unwrap(),
//!     vec![Style::Bold, Style::ForegroundRed]
//! );
//! ```
//!
//! ## Output Modes
//!
//! [`OutputMode`] overrides detection: `Auto` styles only on a terminal,
//! `Term` always styles and `Text` never does.
//!
//! ```rust
//! use ttycolor::{OutputMode, Printer, Style};
//!
//! let mut p = Printer::with_mode(Vec::new(), OutputMode::Text, true);
//! p.print("plain", &[Style::Bold]).unwrap();
//! assert_eq!(p.into_inner(), b"plain");
//! ```

mod output;
mod printer;
mod style;

pub use output::{OutputMode, ParseOutputModeError};
pub use printer::{partition, template, Arg, Printer};
pub use style::{
    activate, apply_styles, join, parse_styles, ParseStyleError, Style, END_MARKER, SEPARATOR,
    START_MARKER,
};
