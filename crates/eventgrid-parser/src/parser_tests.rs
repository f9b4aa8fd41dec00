//! Unit tests for the full parse pipeline
//!
//! These tests drive [`crate::parse`] end to end and check how syntax
//! diagnostics and rule diagnostics combine for realistic documents.

use crate::{Diagnostic, ErrorCode, ParseOutput, ValidateConfig, error::Category, parse};

fn parse_default(source: &str) -> ParseOutput {
    parse(source, ValidateConfig::default())
}

/// Helper function to parse a source string and assert it is clean
fn assert_parses_cleanly(source: &str) -> ParseOutput {
    let output = parse_default(source);
    if !output.diagnostics().is_empty() {
        let rendered: Vec<String> = output.diagnostics().iter().map(ToString::to_string).collect();
        panic!("Expected no diagnostics, but got:\n{}", rendered.join("\n"));
    }
    output
}

/// Helper function returning the codes of every diagnostic, in order
fn codes(source: &str) -> Vec<ErrorCode> {
    parse_default(source)
        .diagnostics()
        .iter()
        .map(Diagnostic::code)
        .collect()
}

const COFFEE_SHOP: &str = r#"
    DESCRIPTION: "Coffee shop ordering"
    LEVEL: 1

    # Ordering
    ELEMENT: 1, Screen, "Menu", 1;1
    ELEMENT: 2, Command, "Place Order", 1;0
    ELEMENT: 3, Event, "Order Placed", 1;-1
    TEXT: drink: latte; size: large
    ELEMENT: 4, ReadModel, "Open Orders", 2;0
    ELEMENT: 5, Screen, "Barista Queue", 3;1

    FLOW: 1 to 2
    FLOW: 2 to 3
    FLOW: 3 to 4
    FLOW: 4 to 5

    SLICE: STATE_CHANGE, "Place Order", 1
    SLICE: VIEW_STATE, "Open Orders", 2
"#;

#[cfg(test)]
mod basic_parsing_tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let output = assert_parses_cleanly("");
        assert!(output.diagram().is_empty());
    }

    #[test]
    fn test_comments_only() {
        let output = assert_parses_cleanly("# nothing\n\n   # still nothing\n");
        assert!(output.diagram().is_empty());
    }

    #[test]
    fn test_complete_document() {
        let output = assert_parses_cleanly(COFFEE_SHOP);
        let diagram = output.diagram();

        assert_eq!(diagram.description(), Some("Coffee shop ordering"));
        assert_eq!(diagram.level(), Some(1));
        assert_eq!(diagram.elements().len(), 5);
        assert_eq!(diagram.flows().len(), 4);
        assert_eq!(diagram.slices().len(), 2);
        assert_eq!(diagram.column_extent(), Some((1, 3)));
    }

    #[test]
    fn test_element_lines_are_recorded() {
        let output = assert_parses_cleanly(COFFEE_SHOP);
        let event = &output.diagram().elements()[2];

        assert_eq!(event.source().number(), 8);
        assert_eq!(event.source().text(), r#"ELEMENT: 3, Event, "Order Placed", 1;-1"#);
        assert_eq!(
            event.annotation().map(|a| a.entries()),
            Some(vec![("drink", "latte"), ("size", "large")])
        );
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_screen_to_command() {
        let output = assert_parses_cleanly(
            "ELEMENT: 1, Screen, \"A\", 1;1\nELEMENT: 2, Command, \"B\", 1;0\nFLOW: 1 to 2",
        );
        assert_eq!(output.diagram().elements().len(), 2);
    }

    #[test]
    fn test_misplaced_event() {
        let output = parse_default(
            "ELEMENT: 1, Command, \"C\", 1;0\nELEMENT: 2, Event, \"E\", 2;1\nFLOW: 1 to 2",
        );
        let diagnostics = output.diagnostics();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].category(), Category::Positioning);
        assert_eq!(diagnostics[0].line(), 2);
        assert!(diagnostics[0].message().contains("row -1"));
    }

    #[test]
    fn test_shared_cell_names_each_element() {
        let output = parse_default(
            "ELEMENT: 1, Event, \"A\", 1;-1\nELEMENT: 2, Event, \"B\", 1;-1",
        );
        let shared: Vec<&Diagnostic> = output
            .diagnostics()
            .iter()
            .filter(|d| d.code() == ErrorCode::E101)
            .collect();

        assert_eq!(shared.len(), 2);
        assert_eq!(shared[0].line(), 1);
        assert_eq!(shared[1].line(), 2);
    }

    #[test]
    fn test_screen_to_automation_once() {
        let source = "ELEMENT: 1, Screen, \"S\", 1;1\nELEMENT: 2, Automation, \"A\", 2;1\nFLOW: 1 to 2";
        assert_eq!(codes(source), [ErrorCode::E201]);
    }

    #[test]
    fn test_view_state_with_event_once() {
        let source = r#"
            ELEMENT: 1, ReadModel, "R", 1;0
            ELEMENT: 2, Event, "E", 1;-1
            ELEMENT: 3, Event, "F", 2;-1
            SLICE: VIEW_STATE, "View", 1, 2
        "#;
        assert_eq!(codes(source), [ErrorCode::E300]);
    }
}

#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_syntax_errors_come_first() {
        let source = r#"
            ELEMENT: 1, Event, "E", 1;0
            MYSTERY: line
        "#;
        assert_eq!(codes(source), [ErrorCode::E001, ErrorCode::E100]);
    }

    #[test]
    fn test_rejected_element_is_absent_from_rules() {
        let source = r#"
            ELEMENT: x, Event, "E", 1;0
            FLOW: 1 to 2
        "#;
        let output = parse_default(source);

        assert!(output.diagram().elements().is_empty());
        assert_eq!(output.diagram().flows().len(), 1);
        assert_eq!(codes(source), [ErrorCode::E005]);
    }

    #[test]
    fn test_severity_split() {
        let output = parse_default("ELEMENT: 1, Event, \"E\", 1;0\nLEVEL: deep");

        assert!(output.has_errors());
        let errors = output
            .diagnostics()
            .iter()
            .filter(|d| d.severity().is_error())
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_warnings_alone_are_not_errors() {
        let output = parse_default("ELEMENT: 1, Event, \"E\", 1;0");
        assert!(!output.has_errors());
        assert_eq!(output.diagnostics().len(), 1);
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use crate::build;

    const MESSY: &str = r#"
        ELEMENT: 1, Screen, "S", 1;0
        ELEMENT: 2, Automation, "A", 2;1
        FLOW: 1 to 2
        SLICE: VIEW_STATE, "V", 1
    "#;

    #[test]
    fn test_every_rule_reports() {
        let categories: Vec<Category> = parse_default(MESSY)
            .diagnostics()
            .iter()
            .map(Diagnostic::category)
            .collect();

        assert_eq!(
            categories,
            [
                Category::Positioning,
                Category::FlowType,
                Category::SliceComposition
            ]
        );
    }

    #[test]
    fn test_disabled_rules_emit_nothing() {
        assert!(build(MESSY).diagnostics().is_empty());

        let only_slices = parse(MESSY, ValidateConfig::new(false, false, true));
        assert_eq!(only_slices.diagnostics().len(), 1);
        assert_eq!(only_slices.diagnostics()[0].code(), ErrorCode::E300);
    }

    #[test]
    fn test_disabled_rules_keep_syntax_errors() {
        let output = build("LEVEL: ?\nELEMENT: 1, Event, \"E\", 1;0");
        assert_eq!(output.diagnostics().len(), 1);
        assert_eq!(output.diagnostics()[0].code(), ErrorCode::E003);
    }
}

#[cfg(test)]
mod whitespace_and_case_tests {
    use super::*;

    #[test]
    fn test_case_insensitive_types() {
        let output = assert_parses_cleanly(
            "ELEMENT: 1, SCREEN, \"S\", 1;1\nELEMENT: 2, command, \"C\", 1;0\nFLOW: 1 to 2",
        );
        assert_eq!(output.diagram().flows().len(), 1);
    }

    #[test]
    fn test_keywords_are_upper_case() {
        assert_eq!(
            codes("element: 1, Screen, \"S\", 1;1\nFlow: 1 to 2"),
            [ErrorCode::E001, ErrorCode::E001]
        );
    }

    #[test]
    fn test_ui_alias() {
        let output = assert_parses_cleanly(
            "ELEMENT: 1, UI, \"S\", 1;1\nELEMENT: 2, Command, \"C\", 1;0\nFLOW: 1 to 2",
        );
        assert_eq!(output.diagram().elements()[0].type_label(), "Screen");
    }

    #[test]
    fn test_indented_and_padded_lines() {
        let output = assert_parses_cleanly(
            "\t  ELEMENT:   1 ,  Event ,  \"Paid\" ,  1 ; -1   \n",
        );
        let element = &output.diagram().elements()[0];
        assert_eq!(element.name(), "Paid");
        assert_eq!(element.row(), -1);
    }
}
