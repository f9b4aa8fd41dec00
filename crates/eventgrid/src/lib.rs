//! eventgrid - A line-oriented language for event-modeling diagrams.
//!
//! Parsing, rule validation and connection resolution for eventgrid
//! documents: screens, commands, events, read models and automations placed
//! on a row/column grid and joined by flows.

pub mod config;
pub mod connect;

mod error;

pub use eventgrid_core::{
    Anchor, Annotation, Cell, Connection, Diagram, EdgeStyle, Element, ElementId, ElementType,
    Flow, FlowKind, Slice, SliceType,
};
pub use eventgrid_parser::{Diagnostic, ErrorCode, ParseError, ParseOutput};

pub use connect::Resolution;
pub use error::EventGridError;

use log::{debug, info, trace};

use eventgrid_parser::{DiagnosticCollector, ValidateConfig};

use config::AppConfig;

/// The result of a successful [`Workbench::check`].
#[derive(Debug, Clone)]
pub struct Report {
    diagram: Diagram,
    connections: Vec<Connection>,
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Connections for every flow that could be resolved.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Warnings that did not fail the check.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Entry point for parsing, validating and resolving eventgrid diagrams.
///
/// # Examples
///
/// ```rust
/// use eventgrid::{Workbench, config::AppConfig};
///
/// let source = r#"
///     ELEMENT: 1, Screen, "Menu", 1;1
///     ELEMENT: 2, Command, "Place Order", 1;0
///     FLOW: 1 to 2
/// "#;
///
/// let workbench = Workbench::new(AppConfig::default());
/// let report = workbench.check(source).expect("clean diagram");
/// assert_eq!(report.connections().len(), 1);
///
/// // Or use default config
/// let workbench = Workbench::default();
/// ```
#[derive(Debug, Default)]
pub struct Workbench {
    config: AppConfig,
}

impl Workbench {
    /// Create a new workbench with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Get the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text and run the rules enabled in the configuration.
    ///
    /// Never fails: problems are returned as diagnostics next to the
    /// best-effort diagram.
    pub fn parse(&self, source: &str) -> ParseOutput {
        info!("Parsing diagram");

        let output = eventgrid_parser::parse(source, ValidateConfig::from(self.config.rules()));

        debug!(diagnostics = output.diagnostics().len(); "Diagram parsed");
        trace!(diagram:? = output.diagram(); "Parsed diagram");

        output
    }

    /// Resolve the flows of `diagram` into connections.
    pub fn resolve<'d>(&self, diagram: &'d Diagram) -> Resolution<'d> {
        info!("Resolving connections");
        connect::resolve(diagram.elements(), diagram.flows())
    }

    /// Run the whole pipeline and judge the result.
    ///
    /// Parse and resolve diagnostics are merged; a resolver finding that
    /// repeats a validator finding on the same line is reported once.
    ///
    /// # Errors
    ///
    /// Returns [`EventGridError::Diagnostics`] when any diagnostic is an
    /// error, or when any diagnostic exists and warnings are denied.
    pub fn check(&self, source: &str) -> Result<Report, EventGridError> {
        let (diagram, parse_diagnostics) = self.parse(source).into_parts();

        let mut collector = DiagnosticCollector::new();
        collector.extend(parse_diagnostics);

        let (connections, resolve_diagnostics) = self.resolve(&diagram).into_parts();
        for diag in resolve_diagnostics {
            collector.emit_unique(diag);
        }

        let warnings = collector
            .finish()
            .map_err(|err| EventGridError::new_diagnostics_error(err, source))?;
        if self.config.report().deny_warnings() && !warnings.is_empty() {
            return Err(EventGridError::new_diagnostics_error(
                ParseError::new(warnings),
                source,
            ));
        }

        info!(
            elements = diagram.elements().len(),
            connections = connections.len();
            "Diagram checked"
        );

        Ok(Report {
            diagram,
            connections,
            diagnostics: warnings,
        })
    }
}
