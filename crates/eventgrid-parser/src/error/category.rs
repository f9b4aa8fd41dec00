//! Diagnostic categories.

use std::fmt;

/// The kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Malformed directive, bad coordinates, non-numeric ids, unknown directive.
    Syntax,
    /// Row convention violation, shared cell, branch column gap.
    Positioning,
    /// Illegal transition pair or illegal back flow endpoints.
    FlowType,
    /// A slice is missing an element type its purpose requires.
    SliceComposition,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Syntax => "syntax",
            Category::Positioning => "positioning",
            Category::FlowType => "flow-type",
            Category::SliceComposition => "slice-composition",
        };
        f.write_str(name)
    }
}
