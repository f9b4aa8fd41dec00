//! Slice composition requirements.

use std::collections::BTreeSet;

use eventgrid_core::{Diagram, ElementType, Slice, SliceType};

use crate::{
    error::{Diagnostic, ErrorCode},
    validate::Rule,
};

/// Checks that each slice's columns hold the element types its purpose needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceRule;

impl Rule for SliceRule {
    fn name(&self) -> &'static str {
        "slices"
    }

    fn check(&self, diagram: &Diagram) -> Vec<Diagnostic> {
        diagram
            .slices()
            .iter()
            .filter_map(|slice| {
                let present: BTreeSet<ElementType> = diagram
                    .elements()
                    .iter()
                    .filter(|el| slice.contains_column(el.column()))
                    .filter_map(|el| el.element_type())
                    .collect();
                unmet_requirement(slice.slice_type(), &present)
                    .map(|(requirement, help)| diagnostic(slice, requirement, help))
            })
            .collect()
    }
}

fn diagnostic(slice: &Slice, requirement: &str, help: String) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E300,
        slice.source(),
        format!(
            "Invalid {} slice \"{}\": {requirement}",
            slice.slice_type(),
            slice.name()
        ),
    )
    .with_help(help)
}

fn missing(present: &BTreeSet<ElementType>, required: &[ElementType]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|ty| !present.contains(*ty))
        .map(|ty| ty.as_str())
        .collect()
}

/// The requirement text and a help line, or `None` when satisfied.
fn unmet_requirement(
    slice_type: SliceType,
    present: &BTreeSet<ElementType>,
) -> Option<(&'static str, String)> {
    match slice_type {
        SliceType::StateChange | SliceType::Automation => {
            let mut absent = Vec::new();
            if !present.iter().any(ElementType::is_screen_like) {
                absent.push("Screen or Automation");
            }
            absent.extend(missing(present, &[ElementType::Command, ElementType::Event]));
            (!absent.is_empty()).then(|| {
                (
                    "must include a Screen or Automation, a Command and at least one Event",
                    format!("missing: {}", absent.join(", ")),
                )
            })
        }
        SliceType::ViewState => {
            if present.contains(&ElementType::Event) {
                Some((
                    "must not include any Event",
                    "move the events out of the slice's columns".to_string(),
                ))
            } else if !present.contains(&ElementType::ReadModel) {
                Some((
                    "must include at least one ReadModel",
                    "missing: ReadModel".to_string(),
                ))
            } else {
                None
            }
        }
        SliceType::Translation => {
            let absent = missing(
                present,
                &[
                    ElementType::ExternalEvent,
                    ElementType::Automation,
                    ElementType::Command,
                    ElementType::Event,
                ],
            );
            (!absent.is_empty()).then(|| {
                (
                    "must include an ExternalEvent, an Automation, a Command and an Event",
                    format!("missing: {}", absent.join(", ")),
                )
            })
        }
    }
}
