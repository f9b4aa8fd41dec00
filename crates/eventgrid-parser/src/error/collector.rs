//! Collector for accumulating diagnostics across processing phases.
//!
//! The [`DiagnosticCollector`] lets the builder and every rule pass report
//! problems without ever stopping at the first one.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics.
///
/// # Example
///
/// ```
/// # use eventgrid_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
/// # use eventgrid_parser::{SourceLine, Span};
///
/// let mut collector = DiagnosticCollector::new();
///
/// let line = SourceLine::new(1, "FLOOW: 1 to 2", Span::new(0..13));
/// collector.emit(Diagnostic::new(ErrorCode::E001, &line, "Unknown directive"));
///
/// assert!(collector.has_errors());
/// assert!(collector.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is added to the collection and if it's an error,
    /// the collector is marked as having errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Emit every diagnostic from `diagnostics`, in order.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Emit `diagnostic` unless one for the same code and line is already collected.
    pub fn emit_unique(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.iter().any(|d| d.same_problem(&diagnostic)) {
            self.emit(diagnostic);
        }
    }

    /// Returns `true` if an error-severity diagnostic was emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collector, returning every diagnostic in emission order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, returns `Ok` with the warnings.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
