//! Labeled source spans for diagnostic messages.
//!
//! A label associates a message with a span in the source code,
//! providing context for where a problem occurred.

use crate::Span;

/// A labeled span in source code.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the main location of a problem, usually the
///   offending field of a line.
/// - **Secondary labels** provide additional context, such as "first defined here"
///   or "also placed here".
///
/// # Example
///
/// ```text
/// error[E012]: line 7: element id 2 is already used by "Order Placed"
///   ,-[orders.evm:7:1]
/// 7 | ELEMENT: 2, Event, "Order Cancelled", 3;-1
///   :          ^ duplicate id
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(10..20), "error here");

        assert_eq!(label.span().start(), 10);
        assert_eq!(label.span().end(), 20);
        assert_eq!(label.message(), "error here");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(5..15), "first defined here");

        assert_eq!(label.message(), "first defined here");
        assert!(!label.is_primary());
        assert!(label.is_secondary());
    }
}
