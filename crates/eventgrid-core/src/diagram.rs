//! The parsed diagram: elements, flows, slices and free-form metadata.

use crate::{
    element::{Element, ElementId},
    flow::Flow,
    slice::Slice,
};

/// Everything a DSL document declares.
///
/// A diagram is built once per parse and not modified afterwards. It may still
/// hold problems (duplicate cells, dangling flow ids); those are reported as
/// diagnostics rather than prevented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    description: Option<String>,
    level: Option<u32>,
    elements: Vec<Element>,
    flows: Vec<Flow>,
    slices: Vec<Slice>,
}

impl Diagram {
    pub fn new(
        description: Option<String>,
        level: Option<u32>,
        elements: Vec<Element>,
        flows: Vec<Flow>,
        slices: Vec<Slice>,
    ) -> Self {
        Self {
            description,
            level,
            elements,
            flows,
            slices,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn level(&self) -> Option<u32> {
        self.level
    }

    /// Elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Flows in declaration order.
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    /// Slices in declaration order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Look an element up by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id() == id)
    }

    /// Smallest and largest column used by any element.
    pub fn column_extent(&self) -> Option<(i32, i32)> {
        let mut columns = self.elements.iter().map(Element::column);
        let first = columns.next()?;
        Some(columns.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }

    /// Returns `true` if the document declared nothing at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
            && self.flows.is_empty()
            && self.slices.is_empty()
            && self.description.is_none()
            && self.level.is_none()
    }
}
