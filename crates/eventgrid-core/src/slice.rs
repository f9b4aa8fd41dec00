//! Column groupings with a declared purpose.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::{UnknownKindError, span::SourceLine};

/// The purpose a slice declares, which decides the element types it must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceType {
    StateChange,
    Automation,
    ViewState,
    Translation,
}

impl SliceType {
    /// The keyword used in the DSL.
    pub fn as_str(&self) -> &'static str {
        match self {
            SliceType::StateChange => "STATE_CHANGE",
            SliceType::Automation => "AUTOMATION",
            SliceType::ViewState => "VIEW_STATE",
            SliceType::Translation => "TRANSLATION",
        }
    }
}

impl fmt::Display for SliceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliceType {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SliceType::StateChange,
            SliceType::Automation,
            SliceType::ViewState,
            SliceType::Translation,
        ]
        .into_iter()
        .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| UnknownKindError::new("slice type", s))
    }
}

/// A named, column-scoped grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    slice_type: SliceType,
    name: String,
    columns: BTreeSet<i32>,
    source: SourceLine,
}

impl Slice {
    pub fn new(
        slice_type: SliceType,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = i32>,
        source: SourceLine,
    ) -> Self {
        Self {
            slice_type,
            name: name.into(),
            columns: columns.into_iter().collect(),
            source,
        }
    }

    pub fn slice_type(&self) -> SliceType {
        self.slice_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member columns, ascending.
    pub fn columns(&self) -> &BTreeSet<i32> {
        &self.columns
    }

    pub fn contains_column(&self, column: i32) -> bool {
        self.columns.contains(&column)
    }

    /// The line this slice was declared on.
    pub fn source(&self) -> &SourceLine {
        &self.source
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.slice_type, self.name)
    }
}
