//! Grid layout conventions.
//!
//! Every element type lives in a fixed band of rows: triggers (screens and
//! automations) above row 0, commands and read models on row 0, events below
//! it and external events below every event. On top of that no two elements
//! may share a cell, and the events a command produces sit in consecutive
//! columns.

use indexmap::IndexMap;

use eventgrid_core::{Cell, Diagram, Element, ElementType};

use crate::{
    error::{Diagnostic, ErrorCode},
    validate::{Rule, index_by_id},
};

/// Checks row bands, shared cells and command branch columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositioningRule;

impl Rule for PositioningRule {
    fn name(&self) -> &'static str {
        "positioning"
    }

    fn check(&self, diagram: &Diagram) -> Vec<Diagnostic> {
        let mut diagnostics = row_conventions(diagram.elements());
        diagnostics.extend(shared_positions(diagram.elements()));
        diagnostics.extend(branch_gaps(diagram));
        diagnostics
    }
}

/// The lowest row any external event may take, given the events present.
pub fn external_event_limit(elements: &[Element]) -> i32 {
    elements
        .iter()
        .filter(|el| el.is(ElementType::Event))
        .map(Element::row)
        .min()
        .map_or(-2, |lowest| (lowest - 1).min(-2))
}

/// Expected row and the rule text when `element` breaks its row band.
fn row_violation(element: &Element, external_limit: i32) -> Option<(i32, &'static str)> {
    let row = element.row();
    match element.element_type()? {
        ElementType::Screen => (row < 1).then_some((1, "Screens should be at row 1 or higher")),
        ElementType::Automation => {
            (row < 1).then_some((1, "Automations should be at row 1 or higher"))
        }
        ElementType::Command => (row != 0).then_some((0, "Commands should be at row 0")),
        ElementType::ReadModel => (row != 0).then_some((0, "ReadModels should be at row 0")),
        ElementType::Event => (row >= 0).then_some((-1, "Events should be at row -1 or lower")),
        ElementType::ExternalEvent => (row > external_limit).then_some((
            external_limit,
            "External Events should be below every Event and at row -2 or lower",
        )),
    }
}

fn row_conventions(elements: &[Element]) -> Vec<Diagnostic> {
    let external_limit = external_event_limit(elements);
    let mut diagnostics = Vec::new();

    for element in elements {
        if element.element_type().is_none() {
            diagnostics.push(
                Diagnostic::new(
                    ErrorCode::E103,
                    element.source(),
                    format!(
                        "Element \"{}\" has unrecognized type `{}`; no row convention applies",
                        element.name(),
                        element.type_name()
                    ),
                )
                .with_help(
                    "use one of Screen, Command, Event, ExternalEvent, ReadModel or Automation",
                ),
            );
            continue;
        }

        if let Some((expected, rule)) = row_violation(element, external_limit) {
            diagnostics.push(
                Diagnostic::new(
                    ErrorCode::E100,
                    element.source(),
                    format!(
                        "Element \"{}\" should be positioned at row {expected}, but is at row {}. {rule}",
                        element.name(),
                        element.row()
                    ),
                )
                .with_help(format!("move the element to row {expected}")),
            );
        }
    }

    diagnostics
}

fn shared_positions(elements: &[Element]) -> Vec<Diagnostic> {
    let mut cells: IndexMap<Cell, Vec<&Element>> = IndexMap::new();
    for element in elements {
        cells.entry(element.cell()).or_default().push(element);
    }

    let mut diagnostics = Vec::new();
    for (cell, group) in cells.iter().filter(|(_, group)| group.len() > 1) {
        let names = group
            .iter()
            .map(|el| format!("\"{}\"", el.name()))
            .collect::<Vec<_>>()
            .join(", ");

        for element in group {
            let mut diag = Diagnostic::new(
                ErrorCode::E101,
                element.source(),
                format!("Multiple elements share the same position ({cell}): {names}"),
            );
            for other in group.iter().filter(|other| other.id() != element.id()) {
                diag = diag.with_secondary_label(
                    other.source().span(),
                    format!("\"{}\" is also at {cell}", other.name()),
                );
            }
            diagnostics.push(diag);
        }
    }

    diagnostics
}

fn branch_gaps(diagram: &Diagram) -> Vec<Diagnostic> {
    let by_id = index_by_id(diagram.elements());
    let mut diagnostics = Vec::new();

    for command in diagram.elements().iter().filter(|el| el.is(ElementType::Command)) {
        let mut events: Vec<&Element> = Vec::new();
        for flow in diagram.flows() {
            if flow.is_backward() || flow.source_id() != command.id() {
                continue;
            }
            let Some(&target) = by_id.get(&flow.target_id()) else {
                continue;
            };
            if target.is(ElementType::Event) && events.iter().all(|el| el.id() != target.id()) {
                events.push(target);
            }
        }
        if events.len() < 2 {
            continue;
        }

        let mut columns: Vec<i32> = events.iter().map(|el| el.column()).collect();
        columns.sort_unstable();
        if columns.windows(2).all(|pair| pair[1] - pair[0] <= 1) {
            continue;
        }

        for event in events {
            diagnostics.push(
                Diagnostic::new(
                    ErrorCode::E102,
                    event.source(),
                    format!(
                        "Element \"{}\" should be positioned in consecutive columns with the other events of command \"{}\"",
                        event.name(),
                        command.name()
                    ),
                )
                .with_secondary_label(command.source().span(), "command declared here"),
            );
        }
    }

    diagnostics
}
