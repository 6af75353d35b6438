//! End-to-end tests for printers writing to real sinks.

use std::io::{self, Write};

use console::Term;
use ttycolor::{apply_styles, args, OutputMode, Printer, Style};

#[test]
fn test_plain_printer_scenario() {
    let mut buf = Vec::new();
    let mut p = Printer::new(&mut buf, false);

    p.print("hello, ", &[Style::Bold]).unwrap();
    p.println("world!", &[Style::ForegroundBlack]).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "hello, world!\n");
}

#[test]
fn test_styled_printer_scenario() {
    let mut buf = Vec::new();
    let mut p = Printer::new(&mut buf, true);

    p.print("hello, ", &[Style::Bold]).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[1mhello, \x1b[0m");
}

#[test]
fn test_mixed_operations_plain() {
    let mut buf = Vec::new();
    let mut p = Printer::new(&mut buf, false);

    p.print("hello, ", &[Style::Bold]).unwrap();
    p.println("world!", &[Style::ForegroundBlack]).unwrap();
    let world = p.styled("world", &[Style::ForegroundCyan]);
    p.printf("hello, {}!", &args![world, Style::Bold]).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "hello, world!\nhello, world!"
    );
}

#[test]
fn test_mixed_operations_styled() {
    let mut buf = Vec::new();
    let mut p = Printer::new(&mut buf, true);

    p.print("hello, ", &[Style::Bold]).unwrap();
    p.println("world!", &[Style::ForegroundBlack]).unwrap();
    let world = p.styled("world", &[Style::ForegroundCyan]);
    p.printf("hello, {}!", &args![world, Style::Bold]).unwrap();

    let expected = apply_styles("hello, ", &[Style::Bold])
        + &apply_styles("world!\n", &[Style::ForegroundBlack])
        + &apply_styles("hello, \x1b[36mworld", &[Style::Bold])
        + "!\x1b[0m";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_printf_with_only_styles() {
    let mut buf = Vec::new();
    let mut p = Printer::new(&mut buf, true);

    p.printf("static text", &args![Style::ForegroundGreen, Style::Bold])
        .unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\x1b[32;1mstatic text\x1b[0m"
    );
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_errors_are_returned_unchanged() {
    let mut p = Printer::new(FailingWriter, true);

    let err = p.print("x", &[Style::Bold]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(err.to_string(), "sink closed");

    let err = p.println("x", &[]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

    let err = p.printf("{}", &args![1]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_styled_never_touches_failing_sink() {
    let p = Printer::new(FailingWriter, true);
    assert_eq!(p.styled("ok", &[Style::Bold]), "\x1b[1mok\x1b[0m");
}

#[test]
fn test_file_sink() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    {
        let mut p = Printer::new(file.as_file_mut(), true);
        p.println("saved", &[Style::BackgroundBlue]).unwrap();
        p.print("plain", &[]).unwrap();
    }
    file.flush().unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(contents, "\x1b[44msaved\n\x1b[0mplain");
}

#[test]
fn test_regular_file_handle_disables_styling() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let handle = file.as_file().try_clone().unwrap();

    let mut p = Printer::for_handle(handle);
    assert!(!p.is_styling_enabled());
    p.println("logged", &[Style::Bold, Style::ForegroundRed]).unwrap();
    p.get_mut().flush().unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(contents, "logged\n");
}

#[test]
fn test_owned_file_handle_disables_styling() {
    let file = tempfile::tempfile().unwrap();
    let p = Printer::for_handle(file);
    assert!(!p.is_styling_enabled());
    assert_eq!(p.styled("x", &[Style::Bold]), "x");
}

#[test]
fn test_term_printers_honor_explicit_modes() {
    let p = Printer::for_term_with_mode(Term::stdout(), OutputMode::Text);
    assert!(!p.is_styling_enabled());

    let p = Printer::for_term_with_mode(Term::stderr(), OutputMode::Term);
    assert!(p.is_styling_enabled());
}

#[test]
fn test_term_printer_follows_detection() {
    let is_term = Term::stdout().is_term();
    assert_eq!(Printer::stdout().is_styling_enabled(), is_term);

    let is_term = Term::stderr().is_term();
    assert_eq!(Printer::stderr().is_styling_enabled(), is_term);
}
