//! Legal flow transitions.

use eventgrid_core::{Diagram, Element, ElementType, Flow, FlowKind};

use crate::{
    error::{Diagnostic, ErrorCode},
    validate::{Rule, index_by_id},
};

/// Forward flows allowed between element types.
pub const ALLOWED_FLOWS: [(ElementType, ElementType); 8] = [
    (ElementType::Screen, ElementType::Command),
    (ElementType::Automation, ElementType::Command),
    (ElementType::Command, ElementType::Event),
    (ElementType::Command, ElementType::Automation),
    (ElementType::Event, ElementType::ReadModel),
    (ElementType::ReadModel, ElementType::Screen),
    (ElementType::ReadModel, ElementType::Automation),
    (ElementType::ExternalEvent, ElementType::Automation),
];

/// Returns `true` if a forward flow may go from `from` to `to`.
pub fn is_allowed(from: ElementType, to: ElementType) -> bool {
    ALLOWED_FLOWS.contains(&(from, to))
}

/// Checks every flow whose endpoints both exist against the allow-list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowTypeRule;

impl Rule for FlowTypeRule {
    fn name(&self) -> &'static str {
        "flow-types"
    }

    fn check(&self, diagram: &Diagram) -> Vec<Diagnostic> {
        let by_id = index_by_id(diagram.elements());
        diagram
            .flows()
            .iter()
            .filter_map(|flow| {
                let from = by_id.get(&flow.source_id())?;
                let to = by_id.get(&flow.target_id())?;
                check_flow(flow, from, to)
            })
            .collect()
    }
}

/// Diagnose topologies that must never be drawn: a screen flowing straight
/// into an automation, and any back flow other than event to read model.
pub fn rejection(flow: &Flow, from: &Element, to: &Element) -> Option<Diagnostic> {
    match flow.kind() {
        FlowKind::Forward => {
            if !(from.is(ElementType::Screen) && to.is(ElementType::Automation)) {
                return None;
            }
            Some(
                Diagnostic::new(
                    ErrorCode::E201,
                    flow.source(),
                    format!(
                        "Invalid FLOW: SCREEN cannot be linked to AUTOMATION (from \"{}\" to \"{}\")",
                        from.name(),
                        to.name()
                    ),
                )
                .with_help("route the screen through a command instead"),
            )
        }
        FlowKind::Backward => {
            if from.is(ElementType::Event) && to.is(ElementType::ReadModel) {
                return None;
            }
            Some(
                Diagnostic::new(
                    ErrorCode::E202,
                    flow.source(),
                    format!(
                        "Invalid BACK_FLOW: {} -> {} (from \"{}\" to \"{}\"); only Event -> ReadModel is allowed",
                        from.type_label(),
                        to.type_label(),
                        from.name(),
                        to.name()
                    ),
                )
                .with_help("use FLOW for forward transitions"),
            )
        }
    }
}

/// Full check of one flow between resolved endpoints.
pub fn check_flow(flow: &Flow, from: &Element, to: &Element) -> Option<Diagnostic> {
    if let Some(diag) = rejection(flow, from, to) {
        return Some(diag);
    }
    if flow.is_backward() {
        return None;
    }

    let allowed = match (from.element_type(), to.element_type()) {
        (Some(from), Some(to)) => is_allowed(from, to),
        _ => false,
    };
    if allowed {
        return None;
    }

    Some(Diagnostic::new(
        ErrorCode::E200,
        flow.source(),
        format!(
            "Invalid FLOW: Not allowed from {} to {} (from \"{}\" to \"{}\")",
            from.type_label(),
            to.type_label(),
            from.name(),
            to.name()
        ),
    ))
}
