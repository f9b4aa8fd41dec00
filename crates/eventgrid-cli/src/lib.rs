//! CLI logic for the eventgrid checker.
//!
//! This module contains the core CLI logic: load configuration, read the
//! input, run the pipeline and report what it found.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};
use miette::GraphicalReportHandler;

use eventgrid::{EventGridError, Report, Workbench};

use error_adapter::diagnostics_to_reportables;

/// Run the eventgrid CLI application
///
/// This function checks the input file through the eventgrid pipeline,
/// logs every warning, and prints the resolved connections when asked to.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `EventGridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Error diagnostics, or any diagnostic when warnings are denied
pub fn run(args: &Args) -> Result<Report, EventGridError> {
    info!(input_path = args.input; "Checking diagram");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.deny_warnings {
        app_config = app_config.with_deny_warnings(true);
    }

    let source = fs::read_to_string(&args.input)?;

    let workbench = Workbench::new(app_config);
    let report = workbench.check(&source)?;

    let reporter = GraphicalReportHandler::new();
    for reportable in diagnostics_to_reportables(report.diagnostics(), &source) {
        let mut writer = String::new();
        if reporter.render_report(&mut writer, &reportable).is_ok() {
            warn!("{writer}");
        }
    }

    if args.connections {
        for connection in report.connections() {
            println!("{connection}");
        }
    }

    info!(
        warnings = report.diagnostics().len(),
        connections = report.connections().len();
        "Diagram checked"
    );

    Ok(report)
}
