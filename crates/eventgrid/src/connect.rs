//! Connection resolution.
//!
//! Turns declared flows into anchored [`Connection`]s between grid cells.
//! Flows that point at missing elements are dropped quietly; flows with an
//! illegal topology are dropped with a diagnostic. Every other flow yields
//! exactly one connection, in declaration order.

use indexmap::IndexMap;
use log::{debug, warn};

use eventgrid_core::{Anchor, Cell, Connection, EdgeStyle, Element, Flow, FlowKind};
use eventgrid_parser::{
    Diagnostic,
    validate::{flow_type, index_by_id},
};

/// The output of [`resolve`].
#[derive(Debug, Clone)]
pub struct Resolution<'d> {
    position_index: IndexMap<Cell, &'d Element>,
    connections: Vec<Connection>,
    diagnostics: Vec<Diagnostic>,
}

impl<'d> Resolution<'d> {
    /// Cell to element, in first-seen order. When several elements share a
    /// cell the first one declared is kept.
    pub fn position_index(&self) -> &IndexMap<Cell, &'d Element> {
        &self.position_index
    }

    /// The element at `cell`, if any.
    pub fn element_at(&self, cell: Cell) -> Option<&'d Element> {
        self.position_index.get(&cell).copied()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Topology violations found while resolving.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<Connection>, Vec<Diagnostic>) {
        (self.connections, self.diagnostics)
    }
}

/// Pick the anchors for an edge from `(r1, c1)` to `(r2, c2)`.
///
/// Across rows the endpoint on the lower row is anchored at its top and the
/// other at its bottom. Within a row an edge going right leaves the source's
/// right side and enters the target's left side; any other same-row edge
/// runs bottom to top.
///
/// # Examples
///
/// ```
/// # use eventgrid::connect::determine_segments;
/// # use eventgrid::Anchor;
/// assert_eq!(determine_segments(1, 1, 0, 1), (Anchor::Bottom, Anchor::Top));
/// assert_eq!(determine_segments(0, 1, 0, 2), (Anchor::Right, Anchor::Left));
/// ```
pub fn determine_segments(r1: i32, c1: i32, r2: i32, c2: i32) -> (Anchor, Anchor) {
    if r1 != r2 {
        if r2 < r1 {
            (Anchor::Bottom, Anchor::Top)
        } else {
            (Anchor::Top, Anchor::Bottom)
        }
    } else if c2 > c1 {
        (Anchor::Right, Anchor::Left)
    } else {
        (Anchor::Bottom, Anchor::Top)
    }
}

fn connect(flow: &Flow, from: &Element, to: &Element) -> Connection {
    let (style, anchors) = match flow.kind() {
        FlowKind::Forward => (
            EdgeStyle::Solid,
            determine_segments(from.row(), from.column(), to.row(), to.column()),
        ),
        FlowKind::Backward => (EdgeStyle::Dashed, (Anchor::Left, Anchor::Bottom)),
    };
    Connection::new(
        (from.id(), from.cell()),
        (to.id(), to.cell()),
        style,
        anchors,
    )
}

/// Resolve `flows` against `elements`.
pub fn resolve<'d>(elements: &'d [Element], flows: &[Flow]) -> Resolution<'d> {
    let by_id = index_by_id(elements);

    let mut position_index = IndexMap::with_capacity(elements.len());
    for element in elements {
        position_index.entry(element.cell()).or_insert(element);
    }

    let mut connections = Vec::with_capacity(flows.len());
    let mut diagnostics = Vec::new();

    for flow in flows {
        let (Some(&from), Some(&to)) = (by_id.get(&flow.source_id()), by_id.get(&flow.target_id()))
        else {
            warn!(
                line = flow.source().number(),
                from = flow.source_id().value(),
                to = flow.target_id().value();
                "Dropping flow with a missing endpoint"
            );
            continue;
        };

        if let Some(diag) = flow_type::rejection(flow, from, to) {
            debug!(line = flow.source().number(), code = diag.code().as_str(); "Rejected flow");
            diagnostics.push(diag);
            continue;
        }

        connections.push(connect(flow, from, to));
    }

    debug!(
        connections = connections.len(),
        rejected = diagnostics.len();
        "Flows resolved"
    );

    Resolution {
        position_index,
        connections,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgrid_core::{Diagram, ElementId};
    use eventgrid_parser::{ErrorCode, build};

    fn diagram(source: &str) -> Diagram {
        let (diagram, diagnostics) = build(source).into_parts();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        diagram
    }

    #[test]
    fn test_segments_across_rows() {
        assert_eq!(determine_segments(1, 3, 0, 3), (Anchor::Bottom, Anchor::Top));
        assert_eq!(determine_segments(-1, 3, 0, 5), (Anchor::Top, Anchor::Bottom));
    }

    #[test]
    fn test_segments_within_row() {
        assert_eq!(determine_segments(0, 1, 0, 2), (Anchor::Right, Anchor::Left));
        assert_eq!(determine_segments(0, 2, 0, 1), (Anchor::Bottom, Anchor::Top));
        assert_eq!(determine_segments(0, 2, 0, 2), (Anchor::Bottom, Anchor::Top));
    }

    #[test]
    fn test_forward_flow_is_solid() {
        let diagram = diagram(
            "ELEMENT: 1, Screen, \"A\", 1;1\nELEMENT: 2, Command, \"B\", 1;0\nFLOW: 1 to 2",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());
        let connection = resolution.connections()[0];

        assert!(resolution.diagnostics().is_empty());
        assert_eq!(connection.style(), EdgeStyle::Solid);
        assert_eq!(connection.source_anchor(), Anchor::Bottom);
        assert_eq!(connection.target_anchor(), Anchor::Top);
        assert_eq!(connection.source_cell(), Cell::new(1, 1));
        assert_eq!(connection.target_cell(), Cell::new(0, 1));
    }

    #[test]
    fn test_back_flow_is_dashed() {
        let diagram = diagram(
            "ELEMENT: 1, Event, \"E\", 1;-1\nELEMENT: 2, ReadModel, \"R\", 2;0\nBACK_FLOW: 1 to 2",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());
        let connection = resolution.connections()[0];

        assert_eq!(connection.style(), EdgeStyle::Dashed);
        assert_eq!(connection.source_anchor(), Anchor::Left);
        assert_eq!(connection.target_anchor(), Anchor::Bottom);
    }

    #[test]
    fn test_illegal_back_flow_is_dropped() {
        let diagram = diagram(
            "ELEMENT: 1, ReadModel, \"R\", 1;0\nELEMENT: 2, Event, \"E\", 2;-1\nBACK_FLOW: 1 to 2",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());

        assert!(resolution.connections().is_empty());
        assert_eq!(resolution.diagnostics().len(), 1);
        assert_eq!(resolution.diagnostics()[0].code(), ErrorCode::E202);
    }

    #[test]
    fn test_screen_to_automation_is_dropped() {
        let diagram = diagram(
            "ELEMENT: 1, Screen, \"S\", 1;1\nELEMENT: 2, Automation, \"A\", 2;1\nFLOW: 1 to 2",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());

        assert!(resolution.connections().is_empty());
        assert_eq!(resolution.diagnostics()[0].code(), ErrorCode::E201);
    }

    #[test]
    fn test_disallowed_pair_still_connects() {
        let diagram = diagram(
            "ELEMENT: 1, Event, \"E\", 1;-1\nELEMENT: 2, Screen, \"S\", 1;1\nFLOW: 1 to 2",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());

        assert_eq!(resolution.connections().len(), 1);
        assert!(resolution.diagnostics().is_empty());
    }

    #[test]
    fn test_dangling_flows_are_dropped_silently() {
        let diagram = diagram(
            "ELEMENT: 1, Command, \"C\", 1;0\nELEMENT: 2, Event, \"E\", 1;-1\n\
             FLOW: 1 to 9\nFLOW: 8 to 2\nFLOW: 1 to 2",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());

        assert!(resolution.diagnostics().is_empty());
        assert_eq!(resolution.connections().len(), 1);
        assert_eq!(resolution.connections()[0].target_id(), ElementId::new(2));
    }

    #[test]
    fn test_position_index_keeps_first() {
        let diagram = diagram(
            "ELEMENT: 1, Event, \"A\", 1;-1\nELEMENT: 2, Event, \"B\", 1;-1\nELEMENT: 3, Event, \"C\", 2;-1",
        );
        let resolution = resolve(diagram.elements(), diagram.flows());

        assert_eq!(resolution.position_index().len(), 2);
        assert_eq!(resolution.element_at(Cell::new(-1, 1)).map(Element::name), Some("A"));
        assert!(resolution.element_at(Cell::new(0, 0)).is_none());
    }

    #[test]
    fn test_connections_follow_declaration_order() {
        let diagram = diagram(
            "ELEMENT: 1, Command, \"C\", 1;0\nELEMENT: 2, Event, \"E1\", 1;-1\n\
             ELEMENT: 3, Event, \"E2\", 2;-1\nFLOW: 1 to 3\nFLOW: 1 to 2",
        );
        let targets: Vec<u32> = resolve(diagram.elements(), diagram.flows())
            .connections()
            .iter()
            .map(|c| c.target_id().value())
            .collect();

        assert_eq!(targets, [3, 2]);
    }
}
