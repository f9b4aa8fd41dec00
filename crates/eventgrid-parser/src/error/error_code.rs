//! Error codes for the eventgrid diagnostic system.
//!
//! Error codes are organized by category:
//! - `E0xx` - Syntax errors
//! - `E1xx` - Positioning rules
//! - `E2xx` - Flow type rules
//! - `E3xx` - Slice composition rules

use std::fmt;

use crate::error::{Category, Severity};

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Unknown directive.
    ///
    /// The line does not start with a recognized `KEYWORD:` prefix.
    E001,

    /// Invalid description.
    ///
    /// `DESCRIPTION:` must be followed by a non-empty double-quoted string.
    E002,

    /// Invalid level.
    ///
    /// `LEVEL:` must be followed by a bare non-negative integer.
    E003,

    /// Too few fields.
    ///
    /// An `ELEMENT:` or `SLICE:` line has fewer comma-separated fields than
    /// the directive requires.
    E004,

    /// Non-numeric element id.
    E005,

    /// Invalid coordinate format.
    ///
    /// A coordinate must have exactly two parts separated by `;`, `:` or `,`.
    E006,

    /// Non-numeric coordinates.
    E007,

    /// Annotation without element.
    ///
    /// A `TEXT:` block appeared before any element was declared.
    E008,

    /// Unknown slice type.
    ///
    /// Valid slice types are `STATE_CHANGE`, `AUTOMATION`, `VIEW_STATE` and
    /// `TRANSLATION`.
    E009,

    /// Slice without columns.
    ///
    /// A `SLICE:` line must list at least one numeric column.
    E010,

    /// Invalid flow syntax.
    ///
    /// `FLOW:` and `BACK_FLOW:` take the form `<id> to <id>`.
    E011,

    /// Duplicate element id.
    ///
    /// An element with this id has already been declared.
    E012,

    // =========================================================================
    // Positioning Rules (E1xx)
    // =========================================================================
    /// Row convention violated.
    ///
    /// The element sits outside the row band its type belongs to.
    E100,

    /// Shared position.
    ///
    /// More than one element occupies the same grid cell.
    E101,

    /// Branch column gap.
    ///
    /// Events produced by the same command are not in consecutive columns.
    E102,

    /// Unrecognized element type.
    ///
    /// The element type is not one the row conventions know about.
    E103,

    // =========================================================================
    // Flow Type Rules (E2xx)
    // =========================================================================
    /// Flow not allowed.
    ///
    /// The source and target types of a forward flow are not a legal pair.
    E200,

    /// Screen linked to automation.
    ///
    /// A screen can never flow directly into an automation.
    E201,

    /// Invalid back flow.
    ///
    /// A back flow may only go from an event to a read model.
    E202,

    // =========================================================================
    // Slice Composition Rules (E3xx)
    // =========================================================================
    /// Incomplete slice.
    ///
    /// The slice's columns do not hold the element types its purpose requires.
    E300,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E006 => "E006",
            ErrorCode::E007 => "E007",
            ErrorCode::E008 => "E008",
            ErrorCode::E009 => "E009",
            ErrorCode::E010 => "E010",
            ErrorCode::E011 => "E011",
            ErrorCode::E012 => "E012",
            // Positioning rules
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Flow type rules
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            // Slice composition rules
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorCode::E001 => "unknown directive",
            ErrorCode::E002 => "invalid description",
            ErrorCode::E003 => "invalid level",
            ErrorCode::E004 => "too few fields",
            ErrorCode::E005 => "non-numeric element id",
            ErrorCode::E006 => "invalid coordinate format",
            ErrorCode::E007 => "non-numeric coordinates",
            ErrorCode::E008 => "text without element",
            ErrorCode::E009 => "unknown slice type",
            ErrorCode::E010 => "slice without columns",
            ErrorCode::E011 => "invalid flow syntax",
            ErrorCode::E012 => "duplicate element id",
            // Positioning rules
            ErrorCode::E100 => "row convention violated",
            ErrorCode::E101 => "shared position",
            ErrorCode::E102 => "branch column gap",
            ErrorCode::E103 => "unrecognized element type",
            // Flow type rules
            ErrorCode::E200 => "flow not allowed",
            ErrorCode::E201 => "screen linked to automation",
            ErrorCode::E202 => "invalid back flow",
            // Slice composition rules
            ErrorCode::E300 => "incomplete slice",
        }
    }

    /// The category this code reports under.
    pub fn category(&self) -> Category {
        match self {
            ErrorCode::E001
            | ErrorCode::E002
            | ErrorCode::E003
            | ErrorCode::E004
            | ErrorCode::E005
            | ErrorCode::E006
            | ErrorCode::E007
            | ErrorCode::E008
            | ErrorCode::E009
            | ErrorCode::E010
            | ErrorCode::E011
            | ErrorCode::E012 => Category::Syntax,
            ErrorCode::E100 | ErrorCode::E101 | ErrorCode::E102 | ErrorCode::E103 => {
                Category::Positioning
            }
            ErrorCode::E200 | ErrorCode::E201 | ErrorCode::E202 => Category::FlowType,
            ErrorCode::E300 => Category::SliceComposition,
        }
    }

    /// Syntax problems are errors; rule violations are warnings.
    pub fn severity(&self) -> Severity {
        match self.category() {
            Category::Syntax => Severity::Error,
            Category::Positioning | Category::FlowType | Category::SliceComposition => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
