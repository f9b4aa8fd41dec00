//! Diagram assembly.
//!
//! The builder walks the classified lines once, decodes each directive and
//! accumulates the result. A line that fails to decode contributes a
//! diagnostic and is otherwise skipped; nothing aborts the walk.

use std::collections::HashMap;

use log::{debug, trace};

use eventgrid_core::{Annotation, Diagram, Element, ElementId, Flow, FlowKind, Slice};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Result},
    fields,
    lines::{self, ClassifiedLine, DirectiveKind},
};

/// The typed outcome of one decoded directive line.
#[derive(Debug)]
enum ParsedLine {
    Description(String),
    Level(u32),
    Element(Element),
    /// Start of an annotation block, with the text found on the `TEXT:` line.
    Text(String),
    Slice(Slice),
    Flow(Flow),
}

fn decode(line: &ClassifiedLine<'_>) -> Result<ParsedLine> {
    match line.kind() {
        DirectiveKind::Description => fields::description(line).map(ParsedLine::Description),
        DirectiveKind::Level => fields::level(line).map(ParsedLine::Level),
        DirectiveKind::Element => fields::element(line).map(ParsedLine::Element),
        DirectiveKind::Text => Ok(ParsedLine::Text(line.payload().trim().to_string())),
        DirectiveKind::Slice => fields::slice(line).map(ParsedLine::Slice),
        DirectiveKind::Flow => fields::flow(line, FlowKind::Forward).map(ParsedLine::Flow),
        DirectiveKind::BackFlow => fields::flow(line, FlowKind::Backward).map(ParsedLine::Flow),
        DirectiveKind::Unknown => Err(Diagnostic::new(
            ErrorCode::E001,
            line.source(),
            "Unknown directive",
        )
        .with_help(
            "lines start with DESCRIPTION, LEVEL, ELEMENT, TEXT, SLICE, FLOW or BACK_FLOW followed by `:`",
        )),
    }
}

/// An open `TEXT` block.
#[derive(Debug)]
struct TextBlock {
    /// Index of the annotated element; `None` when the block is discarded.
    target: Option<usize>,
    lines: Vec<String>,
}

/// Accumulates declarations into a [`Diagram`].
#[derive(Debug, Default)]
struct DiagramBuilder {
    description: Option<String>,
    level: Option<u32>,
    elements: Vec<Element>,
    flows: Vec<Flow>,
    slices: Vec<Slice>,
    ids: HashMap<ElementId, usize>,
    last_element: Option<usize>,
    text: Option<TextBlock>,
}

impl DiagramBuilder {
    fn apply(&mut self, parsed: ParsedLine, line: &ClassifiedLine<'_>) -> Result<()> {
        match parsed {
            ParsedLine::Description(text) => self.description = Some(text),
            ParsedLine::Level(level) => self.level = Some(level),
            ParsedLine::Element(element) => self.add_element(element)?,
            ParsedLine::Text(first) => self.open_text_block(first, line)?,
            ParsedLine::Slice(slice) => self.slices.push(slice),
            ParsedLine::Flow(flow) => self.flows.push(flow),
        }
        Ok(())
    }

    fn add_element(&mut self, element: Element) -> Result<()> {
        if let Some(&first) = self.ids.get(&element.id()) {
            let previous = self.elements[first].source();
            return Err(Diagnostic::new(
                ErrorCode::E012,
                element.source(),
                format!("Duplicate element id {}", element.id()),
            )
            .with_label(element.source().span(), "duplicate definition")
            .with_secondary_label(
                previous.span(),
                format!("first defined on line {}", previous.number()),
            )
            .with_help("give every element a unique id"));
        }

        let index = self.elements.len();
        self.ids.insert(element.id(), index);
        self.last_element = Some(index);
        self.elements.push(element);
        Ok(())
    }

    /// The block is opened even when there is no element to attach to, so its
    /// continuation lines are consumed instead of reported as unknown.
    fn open_text_block(&mut self, first: String, line: &ClassifiedLine<'_>) -> Result<()> {
        self.text = Some(TextBlock {
            target: self.last_element,
            lines: if first.is_empty() { Vec::new() } else { vec![first] },
        });

        if self.last_element.is_none() {
            return Err(Diagnostic::new(
                ErrorCode::E008,
                line.source(),
                "TEXT without preceding ELEMENT",
            )
            .with_help("declare an ELEMENT before its TEXT block"));
        }
        Ok(())
    }

    fn close_text_block(&mut self) {
        let Some(block) = self.text.take() else {
            return;
        };
        let Some(target) = block.target else {
            return;
        };

        let text = block.lines.join("\n");
        if text.is_empty() {
            return;
        }
        trace!(element = self.elements[target].id().value(); "Attached annotation");
        self.elements[target].set_annotation(Annotation::new(text));
    }

    fn finish(mut self) -> Diagram {
        self.close_text_block();
        Diagram::new(
            self.description,
            self.level,
            self.elements,
            self.flows,
            self.slices,
        )
    }
}

/// Build a diagram from `source`, collecting every syntax diagnostic.
pub(crate) fn build(source: &str) -> (Diagram, DiagnosticCollector) {
    let mut builder = DiagramBuilder::default();
    let mut collector = DiagnosticCollector::new();

    for line in lines::classify(source) {
        if let Some(block) = builder.text.as_mut() {
            if !line.kind().is_recognized() {
                block.lines.push(line.source().text().to_string());
                continue;
            }
            builder.close_text_block();
        }

        if let Err(diag) = decode(&line).and_then(|parsed| builder.apply(parsed, &line)) {
            trace!(line = line.source().number(), code = diag.code().as_str(); "Rejected line");
            collector.emit(diag);
        }
    }

    let diagram = builder.finish();
    debug!(
        elements = diagram.elements().len(),
        flows = diagram.flows().len(),
        slices = diagram.slices().len(),
        diagnostics = collector.diagnostics().len();
        "Diagram built"
    );

    (diagram, collector)
}
