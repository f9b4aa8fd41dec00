//! Error and diagnostic system for the eventgrid parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - A category per code (syntax, positioning, flow type, slice composition)
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple problems
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single problem found on one source line, with its error code, labeled
//! source locations and help text. Diagnostics never stop processing: parsing,
//! validation and connection resolution all return them as data. When a caller
//! wants a hard failure, [`ParseError`] wraps a list of them into a
//! [`std::error::Error`].
//!
//! # Example
//!
//! ```
//! # use eventgrid_parser::error::{Category, Diagnostic, ErrorCode};
//! # use eventgrid_parser::{SourceLine, Span};
//!
//! let line = SourceLine::new(4, "ELEMENT: x, Command, \"Pay\", 1;0", Span::new(40..71));
//!
//! let diag = Diagnostic::new(ErrorCode::E005, &line, "ELEMENT id must be numeric")
//!     .with_label(line.span().subspan(9..10), "not a number")
//!     .with_help("element ids are non-negative integers, e.g. `ELEMENT: 1, ...`");
//!
//! assert_eq!(diag.category(), Category::Syntax);
//! assert_eq!(diag.line(), 4);
//! ```

mod category;
mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use parse_error::Result;

pub use category::Category;
pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
