//! Error types for eventgrid operations.
//!
//! This module provides the main error type [`EventGridError`] which wraps
//! the error conditions that can occur while checking a diagram.

use std::io;

use thiserror::Error;

use eventgrid_parser::ParseError;

/// The main error type for eventgrid operations.
///
/// # Diagnostic Variants
///
/// The `Diagnostics` variant carries every diagnostic of a failed check
/// together with the source text, so callers can render them against it.
#[derive(Debug, Error)]
pub enum EventGridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Diagnostics { err: ParseError, src: String },
}

impl EventGridError {
    /// Create a new `Diagnostics` error with the associated source code.
    pub fn new_diagnostics_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Diagnostics {
            err,
            src: src.into(),
        }
    }
}
