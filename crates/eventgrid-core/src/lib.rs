//! eventgrid Core Types and Definitions
//!
//! This crate provides the foundational types for eventgrid event-modeling
//! diagrams. It includes:
//!
//! - **Source tracking**: byte spans and originating lines ([`span`] module)
//! - **Elements**: typed grid nodes and their annotations ([`element`] module)
//! - **Flows**: declared edges between elements ([`flow`] module)
//! - **Slices**: column groupings with a declared purpose ([`slice`] module)
//! - **Diagram**: the parse product tying everything together ([`diagram`] module)
//! - **Connections**: resolved, anchored edges between grid cells ([`connection`] module)

pub mod connection;
pub mod diagram;
pub mod element;
pub mod flow;
pub mod slice;
pub mod span;

pub use connection::{Anchor, Cell, Connection, EdgeStyle};
pub use diagram::Diagram;
pub use element::{Annotation, Element, ElementId, ElementType};
pub use flow::{Flow, FlowKind};
pub use slice::{Slice, SliceType};
pub use span::{SourceLine, Span};

use thiserror::Error;

/// Error returned when a keyword does not name a known element or slice type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownKindError {
    kind: &'static str,
    value: String,
}

impl UnknownKindError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The text that failed to match.
    pub fn value(&self) -> &str {
        &self.value
    }
}
