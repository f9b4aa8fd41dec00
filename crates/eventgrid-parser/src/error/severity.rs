//! Severity levels for diagnostics.
//!
//! This module defines the severity of diagnostic messages,
//! distinguishing between errors and advisory warnings.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Severity never stops processing; it only tells callers how to treat the
/// result:
/// - [`Severity::Error`] marks a line that could not be understood
/// - [`Severity::Warning`] marks a modeling rule that the diagram breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// A non-fatal warning about a broken modeling convention.
    ///
    /// The diagram is still usable as written.
    Warning,

    /// A line the parser had to drop.
    ///
    /// The diagram is usable but is missing whatever the line declared.
    Error,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
