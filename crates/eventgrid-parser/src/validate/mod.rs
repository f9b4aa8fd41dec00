//! Semantic rules over a built [`Diagram`].
//!
//! Each rule is independent: it reads the whole diagram and returns its own
//! diagnostics. Rules never modify the diagram and never see each other's
//! output, so they may run in any order or not at all.

pub mod flow_type;
pub mod positioning;
pub mod slice;

use std::collections::HashMap;

use log::debug;

use eventgrid_core::{Diagram, Element, ElementId};

use crate::error::{Diagnostic, DiagnosticCollector};

pub use flow_type::FlowTypeRule;
pub use positioning::PositioningRule;
pub use slice::SliceRule;

/// A semantic check over a complete diagram.
pub trait Rule {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Check `diagram` and return every violation found.
    fn check(&self, diagram: &Diagram) -> Vec<Diagnostic>;
}

/// Which rules to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateConfig {
    positioning: bool,
    flow_types: bool,
    slices: bool,
}

impl ValidateConfig {
    pub fn new(positioning: bool, flow_types: bool, slices: bool) -> Self {
        Self {
            positioning,
            flow_types,
            slices,
        }
    }

    /// A configuration with every rule switched off.
    pub fn none() -> Self {
        Self::new(false, false, false)
    }

    pub fn positioning(&self) -> bool {
        self.positioning
    }

    pub fn flow_types(&self) -> bool {
        self.flow_types
    }

    pub fn slices(&self) -> bool {
        self.slices
    }
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Run the enabled rules over `diagram`, appending into `collector`.
pub fn run(diagram: &Diagram, config: ValidateConfig, collector: &mut DiagnosticCollector) {
    let rules: [(&dyn Rule, bool); 3] = [
        (&PositioningRule, config.positioning),
        (&FlowTypeRule, config.flow_types),
        (&SliceRule, config.slices),
    ];

    for (rule, enabled) in rules {
        if !enabled {
            debug!(rule = rule.name(); "Rule disabled");
            continue;
        }
        let found = rule.check(diagram);
        debug!(rule = rule.name(), diagnostics = found.len(); "Rule finished");
        collector.extend(found);
    }
}

/// Id lookup over `elements`; the first element with an id wins.
pub fn index_by_id(elements: &[Element]) -> HashMap<ElementId, &Element> {
    let mut index = HashMap::with_capacity(elements.len());
    for element in elements {
        index.entry(element.id()).or_insert(element);
    }
    index
}
