//! Mixed value/style argument lists for [`Printer::printf`](crate::Printer::printf).

use std::fmt::{self, Display};

use crate::style::Style;

/// One entry of a `printf` argument list: a value to substitute, or a style
/// to apply to the whole message.
///
/// Build lists with the [`args!`](crate::args) macro, which passes values by
/// reference and styles by value.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// A value substituted into the template.
    Value(&'a dyn Display),
    /// A style applied to the rendered message.
    Style(Style),
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(value) => f.debug_tuple("Value").field(&value.to_string()).finish(),
            Arg::Style(style) => f.debug_tuple("Style").field(style).finish(),
        }
    }
}

impl<'a, T: Display> From<&'a T> for Arg<'a> {
    fn from(value: &'a T) -> Self {
        Arg::Value(value)
    }
}

impl From<Style> for Arg<'_> {
    fn from(style: Style) -> Self {
        Arg::Style(style)
    }
}

impl<'a> From<&'a Style> for Arg<'a> {
    fn from(style: &'a Style) -> Self {
        Arg::Style(*style)
    }
}

/// Splits `args` into template values and styles, keeping the relative order
/// within each.
pub fn partition<'a>(args: &[Arg<'a>]) -> (Vec<&'a dyn Display>, Vec<Style>) {
    let mut values = Vec::with_capacity(args.len());
    let mut styles = Vec::new();
    for arg in args {
        match *arg {
            Arg::Value(value) => values.push(value),
            Arg::Style(style) => styles.push(style),
        }
    }
    (values, styles)
}

/// Builds an argument array for [`Printer::printf`](crate::Printer::printf).
///
/// Every entry is borrowed and converted with [`Arg::from`]: [`Style`] tokens
/// become [`Arg::Style`], anything else that implements `Display` becomes
/// [`Arg::Value`]. Tokens may appear in any position.
///
/// ```rust
/// use ttycolor::{args, Printer, Style};
///
/// let mut out = Vec::new();
/// let mut printer = Printer::new(&mut out, false);
/// let name = "world";
/// printer.printf("hello, {}! ({})", &args![name, Style::Bold, 42]).unwrap();
/// assert_eq!(out, b"hello, world! (42)");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from(&$arg)),*]
    };
}
