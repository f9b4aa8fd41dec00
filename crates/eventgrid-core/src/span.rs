//! Source location tracking.
//!
//! [`Span`] is a byte range into the DSL source text. [`SourceLine`] records
//! the line a diagram item was declared on, so diagnostics raised long after
//! parsing can still point back at the original text.

use std::{fmt, ops::Range};

/// A half-open byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    ///
    /// A reversed range collapses to an empty span at `range.end`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start.min(range.end),
            end: range.end,
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// A span covering `range` relative to this span's start.
    ///
    /// Used to point at a field inside a line. The result is clamped to this span.
    pub fn subspan(&self, range: Range<usize>) -> Span {
        let start = (self.start + range.start).min(self.end);
        let end = (self.start + range.end).clamp(start, self.end);
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

/// The line a diagram item was declared on.
///
/// Only the trimmed text is kept; the span covers exactly that trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    number: usize,
    text: String,
    span: Span,
}

impl SourceLine {
    /// Create a new source line record.
    ///
    /// `number` is 1-based.
    pub fn new(number: usize, text: impl Into<String>, span: Span) -> Self {
        Self {
            number,
            text: text.into(),
            span,
        }
    }

    /// 1-based line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The trimmed line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte span of the trimmed text in the full source.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.number, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic_functionality() {
        let span = Span::new(5..10);
        assert_eq!(span.start(), 5);
        assert_eq!(span.end(), 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_empty() {
        let span = Span::new(5..5);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_subspan_is_relative_and_clamped() {
        let line = Span::new(100..120);
        assert_eq!(line.subspan(2..6), Span::new(102..106));
        assert_eq!(line.subspan(15..40), Span::new(115..120));
        assert_eq!(line.subspan(50..60), Span::new(120..120));
    }

    #[test]
    fn test_source_line_display() {
        let line = SourceLine::new(3, "FLOW: 1 to 2", Span::new(40..52));
        assert_eq!(line.to_string(), "line 3: FLOW: 1 to 2");
        assert_eq!(line.number(), 3);
        assert_eq!(line.span().len(), 12);
    }
}
