//! Rendering validation errors with ariadne.
//!
//! Email errors are shown against the rejected address, with a label on the
//! offending span, the rule code and a help line when one exists. Errors
//! without a location are written as a single line.

use crate::{EmailRule, ValidationError};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr.
///
/// # Example
/// ```no_run
/// use tenet::{render_error, validate_email_address};
///
/// if let Err(e) = validate_email_address("abc@-example.com") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &ValidationError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer.
pub fn render_error_to(error: &ValidationError, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs and UIs).
pub fn render_error_to_string(error: &ValidationError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Same as [`render_error_to_string`], without ANSI color codes.
pub fn render_error_to_string_no_color(error: &ValidationError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &ValidationError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        ValidationError::NotAnInteger { .. } => {
            writeln!(writer, "[{}] Error: {}", error.code(), error)
        }
        ValidationError::NotAnEmailAddress { address, rule } => {
            render_email_rule(address, rule, error, writer, use_color)
        }
    }
}

fn render_email_rule(
    address: &str,
    rule: &EmailRule,
    error: &ValidationError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let span = rule.span().0;
    let config = Config::default()
        .with_color(use_color)
        .with_index_type(IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_code(rule.code())
        .with_message(error.to_string())
        .with_config(config)
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(rule.to_string())
                .with_color(colors.next()),
        );

    if let Some(help) = rule.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(address)), &mut *writer)
}
