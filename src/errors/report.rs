// src/errors/report.rs
//! Rendering utilities for miette diagnostics.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};

use super::ShroudError;

/// Create a handler for terminal output (unicode + colors).
pub fn terminal_handler() -> GraphicalReportHandler {
    let theme = GraphicalTheme {
        characters: ThemeCharacters::unicode(),
        styles: ThemeStyles::ansi(),
    };
    GraphicalReportHandler::new_themed(theme)
}

/// Create a handler for plain output (ascii + no colors).
pub fn plain_handler() -> GraphicalReportHandler {
    let theme = GraphicalTheme {
        characters: ThemeCharacters::ascii(),
        styles: ThemeStyles::none(),
    };
    GraphicalReportHandler::new_themed(theme)
}

/// Render to stderr with unicode/colors.
pub fn render_to_stderr(report: &dyn Diagnostic) {
    let handler = terminal_handler();
    let mut output = String::new();
    if handler.render_report(&mut output, report).is_ok() {
        eprint!("{}", output);
    }
}

/// Report an error that ends the run: log it, then render it to stderr.
///
/// Substitution errors describe a malformed graph, so the driver must stop
/// after this instead of renaming from partial results.
pub fn report_fatal(err: &ShroudError) {
    tracing::error!(origin = err.origin(), code = ?err.code().map(|c| c.to_string()), "aborting run: {err}");
    render_to_stderr(err);
}

/// Render to a buffer without colors (for logs and tests).
pub fn render_to_string(report: &dyn Diagnostic) -> String {
    let mut output = String::new();
    let handler = plain_handler();
    let _ = handler.render_report(&mut output, report);
    output
}
