use eventgrid_core::{Cell, ElementId, ElementType, FlowKind, SliceType};
use eventgrid_parser::{ErrorCode, ValidateConfig, error::Category, parse};

#[test]
fn test_minimal_state_change() {
    let source = r#"
        ELEMENT: 1, Screen, "A", 1;1
        ELEMENT: 2, Command, "B", 1;0
        FLOW: 1 to 2
    "#;

    let output = parse(source, ValidateConfig::default());
    let diagram = output.diagram();

    assert!(output.diagnostics().is_empty());
    assert_eq!(diagram.elements().len(), 2);

    let screen = &diagram.elements()[0];
    assert_eq!(screen.id(), ElementId::new(1));
    assert_eq!(screen.element_type(), Some(ElementType::Screen));
    assert_eq!(screen.name(), "A");
    assert_eq!(screen.cell(), Cell::new(1, 1));

    let flow = &diagram.flows()[0];
    assert_eq!(flow.source_id(), ElementId::new(1));
    assert_eq!(flow.target_id(), ElementId::new(2));
    assert_eq!(flow.kind(), FlowKind::Forward);
}

#[test]
fn test_translation_document() {
    let source = r#"
        DESCRIPTION: "Bean supply"
        ELEMENT: 1, ExternalEvent, "Beans Delivered", 1;-2
        ELEMENT: 2, Automation, "Stock Keeper", 1;1
        ELEMENT: 3, Command, "Restock", 1;0
        ELEMENT: 4, Event, "Restocked", 1;-1
        FLOW: 1 to 2
        FLOW: 2 to 3
        FLOW: 3 to 4
        SLICE: TRANSLATION, "Restock", 1
    "#;

    let output = parse(source, ValidateConfig::default());

    assert!(output.diagnostics().is_empty(), "{:?}", output.diagnostics());
    assert_eq!(output.diagram().slices()[0].slice_type(), SliceType::Translation);
}

#[test]
fn test_back_flow_document() {
    let source = r#"
        ELEMENT: 1, Event, "Order Placed", 1;-1
        ELEMENT: 2, ReadModel, "Orders", 2;0
        BACK_FLOW: 1 to 2
    "#;

    let output = parse(source, ValidateConfig::default());

    assert!(output.diagnostics().is_empty());
    assert!(output.diagram().flows()[0].is_backward());
}

#[test]
fn test_illegal_back_flow_document() {
    let source = r#"
        ELEMENT: 1, Command, "Order", 1;0
        ELEMENT: 2, Screen, "Menu", 2;1
        BACK_FLOW: 1 to 2
    "#;

    let output = parse(source, ValidateConfig::default());
    let diagnostics = output.diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), ErrorCode::E202);
    assert_eq!(diagnostics[0].category(), Category::FlowType);
    assert_eq!(diagnostics[0].line(), 4);
}

#[test]
fn test_every_line_gets_a_chance() {
    let source = r#"
        ELEMENT: 1, Screen, "A", 1
        GARBAGE
        ELEMENT: 2, Command, "B", 1;0
        SLICE: SOMETHING, "X", 1
        ELEMENT: 3, Event, "C", 1;-1
    "#;

    let output = parse(source, ValidateConfig::default());
    let codes: Vec<ErrorCode> = output.diagnostics().iter().map(|d| d.code()).collect();

    assert_eq!(codes, [ErrorCode::E006, ErrorCode::E001, ErrorCode::E009]);
    assert_eq!(output.diagram().elements().len(), 2);
}

#[test]
fn test_parse_error_from_diagnostics() {
    let output = parse("LEVEL: many\nFLOW: 1 to", ValidateConfig::default());
    let err = eventgrid_parser::ParseError::new(output.diagnostics().to_vec());

    assert_eq!(err.diagnostics().len(), 2);
    assert!(err.to_string().starts_with("error[E003]: line 1:"));
}

mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Arbitrary lines, biased toward things that look like directives.
    fn line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            ".{0,40}",
            "(ELEMENT|SLICE|FLOW|BACK_FLOW|TEXT|LEVEL|DESCRIPTION): [ -~]{0,40}",
            "ELEMENT: [0-9a-z]{0,3}, [A-Za-z_]{0,12}, \"?[a-z ,]{0,8}\"?, [-0-9;:,]{0,8}",
            "FLOW: [0-9]{0,3} to [0-9]{0,3}",
        ]
    }

    fn document_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(line_strategy(), 0..20).prop_map(|lines| lines.join("\n"))
    }

    fn coordinate_strategy() -> impl Strategy<Value = (i32, i32)> {
        (-50i32..50, -50i32..50)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Parsing any text finishes, and every diagnostic points at a real line.
    fn check_parse_is_total(source: &str) -> Result<(), TestCaseError> {
        let output = parse(source, ValidateConfig::default());
        let line_count = source.split('\n').count();

        for diag in output.diagnostics() {
            prop_assert!(diag.line() >= 1 && diag.line() <= line_count);
            prop_assert!(diag.span().end() <= source.len());
        }
        Ok(())
    }

    /// The same text always parses to the same result.
    fn check_parse_is_deterministic(source: &str) -> Result<(), TestCaseError> {
        let first = parse(source, ValidateConfig::default());
        let second = parse(source, ValidateConfig::default());

        prop_assert_eq!(first.diagram(), second.diagram());
        prop_assert_eq!(first.diagnostics(), second.diagnostics());
        Ok(())
    }

    /// `;`, `:` and `,` coordinates decode to the same cell.
    fn check_separator_insensitive(column: i32, row: i32) -> Result<(), TestCaseError> {
        let cells: Vec<Cell> = [";", ":", ","]
            .iter()
            .map(|sep| {
                let source = format!("ELEMENT: 1, Event, \"E\", {column}{sep}{row}");
                let output = parse(&source, ValidateConfig::none());
                output.diagram().elements()[0].cell()
            })
            .collect();

        prop_assert!(cells.iter().all(|cell| *cell == Cell::new(row, column)));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn parse_is_total(source in document_strategy()) {
            check_parse_is_total(&source)?;
        }

        #[test]
        fn parse_is_deterministic(source in document_strategy()) {
            check_parse_is_deterministic(&source)?;
        }

        #[test]
        fn coordinates_are_separator_insensitive((column, row) in coordinate_strategy()) {
            check_separator_insensitive(column, row)?;
        }
    }
}
