//! Error adapter for converting SchemataError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Every error gets a
//! stable code and its remediation hint as help text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use schemata::SchemataError;

/// Adapter that renders a [`SchemataError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a SchemataError);

impl ErrorAdapter<'_> {
    /// Stable diagnostic code for the wrapped error.
    pub fn code_str(&self) -> &'static str {
        match self.0 {
            SchemataError::InvalidShape { .. } => "schemata::invalid_shape",
            SchemataError::InvalidConnector { .. } => "schemata::invalid_connector",
            SchemataError::InvalidAnnotation { .. } => "schemata::invalid_annotation",
            SchemataError::InvalidLegend { .. } => "schemata::invalid_legend",
            SchemataError::Render(_) => "schemata::render",
            SchemataError::DependencyMissing { .. } => "schemata::dependency_missing",
            SchemataError::Io { .. } => "schemata::io",
            SchemataError::Config(_) => "schemata::config",
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.0.hint()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Renders `err` as a graphical miette report.
pub fn render_report(err: &SchemataError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    if reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .is_err()
    {
        // Formatting into a String only fails if a Display impl does
        return format!("{err}\n  help: {}", err.hint());
    }
    writer
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_code_and_help() {
        let err = SchemataError::InvalidShape {
            index: 0,
            label: "Flat".to_string(),
            reason: "width must be positive, got 0".to_string(),
        };
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.code().map(|c| c.to_string()).as_deref(),
            Some("schemata::invalid_shape")
        );
        assert_eq!(
            adapter.help().map(|h| h.to_string()).as_deref(),
            Some(err.hint())
        );
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_report_contains_message_and_hint() {
        let err = SchemataError::Io {
            path: PathBuf::from("missing/layered_architecture.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let report = render_report(&err);
        assert!(report.contains("layered_architecture.png"));
        assert!(report.contains("writable"));
        assert!(report.contains("schemata::io"));
    }
}
