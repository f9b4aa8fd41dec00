//! The core diagnostic type for the eventgrid error system.
//!
//! A [`Diagnostic`] represents a single problem found on one source line,
//! with its error code, labeled source spans and help text.

use std::fmt;

use crate::{
    SourceLine, Span,
    error::{Category, Severity, error_code::ErrorCode, label::Label},
};

/// A diagnostic message tied to the source line it was raised for.
///
/// Diagnostics carry:
/// - An error code, which fixes the category and the severity
/// - A primary message describing the problem
/// - The originating line number and its raw text
/// - Zero or more labeled spans inside the source
/// - Optional help text with suggestions
///
/// # Example
///
/// ```text
/// warning[E100]: line 2: Element "Order Placed" should be positioned at row -1, but is at row 0. Events should be at row -1 or lower
///   ,-[orders.evm:2:1]
/// 2 | ELEMENT: 2, Event, "Order Placed", 2;0
///   : ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ row convention violated
///   `----
///   help: move the element to row -1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: ErrorCode,
    message: String,
    line: usize,
    raw: String,
    span: Span,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic for `line`.
    ///
    /// Severity and category follow from `code`.
    ///
    /// # Example
    ///
    /// ```
    /// # use eventgrid_parser::error::{Diagnostic, ErrorCode};
    /// # use eventgrid_parser::{SourceLine, Span};
    ///
    /// let line = SourceLine::new(1, "FLOW: one to two", Span::new(0..16));
    /// let diag = Diagnostic::new(ErrorCode::E011, &line, "Invalid FLOW syntax")
    ///     .with_help("use `FLOW: <id> to <id>`");
    ///
    /// assert!(diag.severity().is_error());
    /// assert_eq!(diag.raw(), "FLOW: one to two");
    /// ```
    pub fn new(code: ErrorCode, line: &SourceLine, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            line: line.number(),
            raw: line.text().to_string(),
            span: line.span(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the category, derived from the error code.
    pub fn category(&self) -> Category {
        self.code.category()
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based number of the line this diagnostic was raised for.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Trimmed text of the originating line.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Byte span of the originating line.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Returns `true` if both diagnostics report the same code on the same line.
    pub fn same_problem(&self, other: &Diagnostic) -> bool {
        self.code == other.code && self.line == other.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: line 3: message"
        write!(
            f,
            "{}[{}]: line {}: {}",
            self.severity, self.code, self.line, self.message
        )
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> SourceLine {
        SourceLine::new(3, "LEVEL: high", Span::new(20..31))
    }

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(ErrorCode::E003, &line(), "Invalid LEVEL");

        assert!(diag.severity().is_error());
        assert_eq!(diag.category(), Category::Syntax);
        assert_eq!(diag.message(), "Invalid LEVEL");
        assert_eq!(diag.line(), 3);
        assert_eq!(diag.raw(), "LEVEL: high");
        assert_eq!(diag.span(), Span::new(20..31));
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_rule_diagnostics_are_warnings() {
        let diag = Diagnostic::new(ErrorCode::E300, &line(), "Invalid VIEW_STATE");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.category(), Category::SliceComposition);
    }

    #[test]
    fn test_diagnostic_with_labels() {
        let diag = Diagnostic::new(ErrorCode::E012, &line(), "duplicate id")
            .with_label(Span::new(27..31), "duplicate here")
            .with_secondary_label(Span::new(5..15), "first defined here");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(ErrorCode::E003, &line(), "Invalid LEVEL (must be numeric)");

        assert_eq!(
            diag.to_string(),
            "error[E003]: line 3: Invalid LEVEL (must be numeric)"
        );
    }

    #[test]
    fn test_same_problem_ignores_message() {
        let a = Diagnostic::new(ErrorCode::E202, &line(), "Invalid BACK_FLOW: Command -> Screen");
        let b = Diagnostic::new(ErrorCode::E202, &line(), "other wording");
        let c = Diagnostic::new(ErrorCode::E200, &line(), "other wording");

        assert!(a.same_problem(&b));
        assert!(!a.same_problem(&c));
    }
}
