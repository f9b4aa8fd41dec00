//! Declared edges between elements.

use std::fmt;

use crate::{element::ElementId, span::SourceLine};

/// Direction of a declared flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// `FLOW:`, follows the time axis.
    Forward,
    /// `BACK_FLOW:`, points back against the time axis.
    Backward,
}

impl FlowKind {
    /// The DSL directive that declares this kind of flow.
    pub fn keyword(&self) -> &'static str {
        match self {
            FlowKind::Forward => "FLOW",
            FlowKind::Backward => "BACK_FLOW",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A directed edge declaration between two element ids.
///
/// A flow only references its endpoints; ids that do not exist in the diagram
/// are allowed here and are dropped when connections are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    source_id: ElementId,
    target_id: ElementId,
    kind: FlowKind,
    source: SourceLine,
}

impl Flow {
    pub fn new(
        source_id: ElementId,
        target_id: ElementId,
        kind: FlowKind,
        source: SourceLine,
    ) -> Self {
        Self {
            source_id,
            target_id,
            kind,
            source,
        }
    }

    pub fn source_id(&self) -> ElementId {
        self.source_id
    }

    pub fn target_id(&self) -> ElementId {
        self.target_id
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn is_backward(&self) -> bool {
        self.kind == FlowKind::Backward
    }

    /// The line this flow was declared on.
    pub fn source(&self) -> &SourceLine {
        &self.source
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} to {}", self.kind, self.source_id, self.target_id)
    }
}
