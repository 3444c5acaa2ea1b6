//! Error rendering using ariadne
//!
//! The plain two-line caret diagram is available as
//! [`Error::render_caret`](crate::Error::render_caret). This module renders
//! the same errors as full reports with a code, a labelled source snippet and,
//! for some errors, a help line.

use crate::{Error, ErrorKind};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<input>";

/// Render an error with rich formatting to stderr
///
/// # Example
/// ```no_run
/// use tally::{evaluate, render_error};
///
/// let source = "2 + x";
/// if let Err(e) = evaluate(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for UIs and logs)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn help_for(error: &Error) -> Option<&'static str> {
    match error.kind {
        ErrorKind::Lexical => Some("only digits, whitespace and `+ - * / ^ ( )` are allowed"),
        ErrorKind::Syntactic if error.message == "')' expected" => {
            Some("add the missing closing parenthesis")
        }
        ErrorKind::ResourceExceeded => Some("reduce nesting or simplify the expression"),
        _ => None,
    }
}

/// Highlight the offending character, or an empty span at end of input.
fn label_range(source: &str, offset: usize) -> Range<usize> {
    if offset < source.len() {
        offset..offset + 1
    } else {
        source.len()..source.len()
    }
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(offset) = error.offset else {
        return writeln!(writer, "{}: {}", error.kind, error.message);
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let range = label_range(source, offset);
    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, range.clone()))
        .with_code(error.kind.code())
        .with_message(format!("{}: {}", error.kind, error.message))
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, range))
                .with_message(&error.message)
                .with_color(colors.next()),
        );

    if let Some(help) = help_for(error) {
        report = report.with_help(help);
    }

    report.finish().write((SOURCE_ID, Source::from(source)), &mut *writer)
}
