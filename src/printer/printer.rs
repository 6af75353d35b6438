//! The conditionally styling printer.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use console::Term;
use tracing::{debug, trace};

use super::args::{partition, Arg};
use super::template::render;
use crate::output::OutputMode;
use crate::style::{apply_styles, Style};

/// Writes messages to a sink, styling them only when styling is enabled.
///
/// Whether styling is enabled is decided once, at construction, and never
/// changes; build a new printer to change it. When disabled, every message is
/// written byte-for-byte as given and style arguments are ignored.
///
/// The printer owns `W`, but `&mut W` is itself a writer, so a caller keeps
/// ownership of a sink by passing a mutable reference. The printer never
/// flushes or closes its sink.
///
/// A printer does no internal synchronization. Writing methods take
/// `&mut self`; callers sharing output across threads must serialize access
/// themselves, e.g. with one printer per thread or a `Mutex<Printer<_>>`.
///
/// # Example
///
/// ```rust
/// use ttycolor::{args, Printer, Style};
///
/// let mut out = Vec::new();
/// let mut p = Printer::new(&mut out, true);
/// let colored = p.styled("colored", &[Style::ForegroundCyan]);
/// p.printf("Welcome to {} output!", &args![colored, Style::Bold]).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\x1b[1mWelcome to \x1b[36mcolored\x1b[0m output!\x1b[0m"
/// );
/// ```
#[derive(Debug)]
pub struct Printer<W> {
    sink: W,
    styling: bool,
}

impl<W: Write> Printer<W> {
    /// Creates a printer writing to `sink`, styling output if `styling` is true.
    pub fn new(sink: W, styling: bool) -> Self {
        Self { sink, styling }
    }

    /// Creates a printer for `handle`, styling output if it is a terminal.
    ///
    /// Works for any handle that can be asked, such as a `File` opened on
    /// `/dev/tty` or a redirected log file.
    pub fn for_handle(handle: W) -> Self
    where
        W: IsTerminal,
    {
        let styling = handle.is_terminal();
        debug!(styling, "detected handle capability");
        Self::new(handle, styling)
    }

    /// Creates a printer whose styling flag is `mode` resolved against `is_term`.
    pub fn with_mode(sink: W, mode: OutputMode, is_term: bool) -> Self {
        let styling = mode.should_use_color(is_term);
        debug!(?mode, is_term, styling, "resolved output mode");
        Self::new(sink, styling)
    }

    /// Returns whether this printer emits escape sequences.
    pub fn is_styling_enabled(&self) -> bool {
        self.styling
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    ///
    /// Bytes written directly to the sink bypass styling.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consumes the printer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Prints `message` with `styles` applied.
    ///
    /// The complete output is composed before anything is written, then
    /// handed to the sink in a single `write_all`.
    ///
    /// # Errors
    ///
    /// Returns the sink's write error unchanged.
    pub fn print(&mut self, message: &str, styles: &[Style]) -> io::Result<()> {
        if !self.styling {
            trace!(len = message.len(), styled = false, "print");
            return self.sink.write_all(message.as_bytes());
        }

        let styled = apply_styles(message, styles);
        trace!(len = styled.len(), styled = !styles.is_empty(), "print");
        self.sink.write_all(styled.as_bytes())
    }

    /// Prints `message` followed by a newline.
    ///
    /// The newline is part of the styled span, so the trailing reset comes
    /// after it.
    ///
    /// # Errors
    ///
    /// Returns the sink's write error unchanged.
    pub fn println(&mut self, message: &str, styles: &[Style]) -> io::Result<()> {
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        self.print(&line, styles)
    }

    /// Renders `template` with the values in `args` and prints the result
    /// styled with the styles in `args`.
    ///
    /// Values and styles may be interleaved in any order: values fill the
    /// template in the order they appear, styles apply to the whole message.
    /// See [`template`](crate::template) for the placeholder syntax.
    ///
    /// ```rust
    /// use ttycolor::{args, Printer, Style};
    ///
    /// let mut out = Vec::new();
    /// let mut p = Printer::new(&mut out, true);
    /// p.printf("{} and {}", &args!["one", Style::Bold, "two"]).unwrap();
    /// assert_eq!(out, b"\x1b[1mone and two\x1b[0m");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the sink's write error unchanged.
    pub fn printf(&mut self, template: &str, args: &[Arg<'_>]) -> io::Result<()> {
        let (values, styles) = partition(args);
        let message = render(template, &values);
        self.print(&message, &styles)
    }

    /// Prints pre-formatted arguments with `styles` applied.
    ///
    /// ```rust
    /// use ttycolor::{Printer, Style};
    ///
    /// let mut out = Vec::new();
    /// let mut p = Printer::new(&mut out, false);
    /// p.print_fmt(format_args!("{}-{}", 1, 2), &[Style::Bold]).unwrap();
    /// assert_eq!(out, b"1-2");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the sink's write error unchanged.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>, styles: &[Style]) -> io::Result<()> {
        match args.as_str() {
            Some(message) => self.print(message, styles),
            None => self.print(&fmt::format(args), styles),
        }
    }

    /// Returns `text` styled for this printer, without writing anything.
    ///
    /// Use it to style part of a message before passing it to
    /// [`printf`](Self::printf).
    pub fn styled(&self, text: &str, styles: &[Style]) -> String {
        if !self.styling {
            return text.to_string();
        }
        apply_styles(text, styles)
    }
}

impl Printer<Term> {
    /// Creates a printer for `term`, styling output if it is a terminal.
    pub fn for_term(term: Term) -> Self {
        let styling = term.is_term();
        debug!(styling, "detected terminal capability");
        Self::new(term, styling)
    }

    /// Creates a printer for `term` with an explicit output mode.
    ///
    /// [`OutputMode::Auto`] behaves like [`for_term`](Self::for_term).
    pub fn for_term_with_mode(term: Term, mode: OutputMode) -> Self {
        let is_term = term.is_term();
        Self::with_mode(term, mode, is_term)
    }

    /// Creates a printer for standard output.
    pub fn stdout() -> Self {
        Self::for_term(Term::stdout())
    }

    /// Creates a printer for standard error.
    pub fn stderr() -> Self {
        Self::for_term(Term::stderr())
    }
}
