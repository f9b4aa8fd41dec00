//! Resolved, anchored edges between grid cells.
//!
//! A [`Connection`] is the renderable form of a flow: it names the two cells
//! it joins and the side of each box the edge attaches to. Only logical
//! anchors live here; mapping them to pixels belongs to the renderer.

use std::fmt;

use crate::element::ElementId;

/// A `(row, column)` grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: i32,
    column: i32,
}

impl Cell {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }
}

impl fmt::Display for Cell {
    /// Formats as `column;row`, the order the DSL writes coordinates in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.column, self.row)
    }
}

/// The side of an element's box where a connection attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
        };
        f.write_str(name)
    }
}

/// Line style of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeStyle::Solid => f.write_str("solid"),
            EdgeStyle::Dashed => f.write_str("dashed"),
        }
    }
}

/// A renderable edge between two grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    source_id: ElementId,
    target_id: ElementId,
    source_cell: Cell,
    target_cell: Cell,
    style: EdgeStyle,
    source_anchor: Anchor,
    target_anchor: Anchor,
}

impl Connection {
    pub fn new(
        (source_id, source_cell): (ElementId, Cell),
        (target_id, target_cell): (ElementId, Cell),
        style: EdgeStyle,
        (source_anchor, target_anchor): (Anchor, Anchor),
    ) -> Self {
        Self {
            source_id,
            target_id,
            source_cell,
            target_cell,
            style,
            source_anchor,
            target_anchor,
        }
    }

    pub fn source_id(&self) -> ElementId {
        self.source_id
    }

    pub fn target_id(&self) -> ElementId {
        self.target_id
    }

    pub fn source_cell(&self) -> Cell {
        self.source_cell
    }

    pub fn target_cell(&self) -> Cell {
        self.target_cell
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }

    pub fn source_anchor(&self) -> Anchor {
        self.source_anchor
    }

    pub fn target_anchor(&self) -> Anchor {
        self.target_anchor
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} -> {} ({}) {} [{}]",
            self.source_id,
            self.source_cell,
            self.source_anchor,
            self.target_id,
            self.target_cell,
            self.target_anchor,
            self.style
        )
    }
}
