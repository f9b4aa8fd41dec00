//! # eventgrid Parser
//!
//! Parser and rule validators for the eventgrid event-modeling language. This
//! crate turns DSL text into a [`Diagram`] plus every problem found along the
//! way.
//!
//! ## Usage
//!
//! ```
//! # use eventgrid_parser::{parse, ValidateConfig};
//!
//! let source = r#"
//!     ELEMENT: 1, Screen, "Menu", 1;1
//!     ELEMENT: 2, Command, "Place Order", 1;0
//!     FLOW: 1 to 2
//! "#;
//!
//! let output = parse(source, ValidateConfig::default());
//! assert_eq!(output.diagram().elements().len(), 2);
//! assert!(output.diagnostics().is_empty());
//! ```
//!
//! Parsing never fails as a whole: a malformed line yields a diagnostic and
//! the rest of the document is still read.

mod builder;
pub mod error;
pub mod fields;
pub mod lines;
#[cfg(test)]
mod parser_tests;
pub mod validate;

pub use eventgrid_core::{Diagram, SourceLine, Span};
pub use error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};
pub use validate::ValidateConfig;

use log::debug;

/// A parsed diagram together with the diagnostics found while building and
/// validating it.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    diagram: Diagram,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// Get the parsed diagram.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Get every diagnostic, syntax first, then rule violations in rule order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity().is_error())
    }

    /// Split into the diagram and its diagnostics.
    pub fn into_parts(self) -> (Diagram, Vec<Diagnostic>) {
        (self.diagram, self.diagnostics)
    }
}

/// Parse source text and run the enabled rule validators.
///
/// This is the main entry point of the crate:
///
/// 1. **Classify** - Tag every meaningful line with its directive
/// 2. **Decode** - Turn each directive into a typed record
/// 3. **Build** - Assemble elements, flows, slices and metadata
/// 4. **Validate** - Run positioning, flow-type and slice rules
///
/// The same text always produces the same output.
///
/// # Example
///
/// ```
/// # use eventgrid_parser::{parse, ErrorCode, ValidateConfig};
///
/// let output = parse("ELEMENT: 1, Event, \"Paid\", 1;0", ValidateConfig::default());
/// assert_eq!(output.diagnostics()[0].code(), ErrorCode::E100);
/// ```
pub fn parse(source: &str, config: ValidateConfig) -> ParseOutput {
    let (diagram, mut collector) = builder::build(source);
    validate::run(&diagram, config, &mut collector);

    debug!(
        diagnostics = collector.diagnostics().len(),
        errors = collector.has_errors();
        "Parse finished"
    );

    ParseOutput {
        diagram,
        diagnostics: collector.into_diagnostics(),
    }
}

/// Parse source text without running any rule validator.
pub fn build(source: &str) -> ParseOutput {
    parse(source, ValidateConfig::none())
}
