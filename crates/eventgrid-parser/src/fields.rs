//! Per-directive field decoders.
//!
//! The low-level grammars ([`split_fields`], [`parse_coordinates`],
//! [`parse_integer`]) work on plain text and are exposed for reuse. The
//! directive decoders take a [`ClassifiedLine`] and either build the typed
//! record or return a syntax [`Diagnostic`] with labels pointing into the
//! offending part of the line.

use std::ops::Range;

use winnow::{
    Parser as _,
    ascii::{dec_int, dec_uint, space0, space1},
    combinator::{alt, opt, repeat, separated},
    error::ModalResult,
    stream::LocatingSlice,
    token::{literal, take_till},
};

use eventgrid_core::{Cell, Element, ElementId, Flow, FlowKind, Slice, SliceType};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    lines::ClassifiedLine,
};

/// One comma-separated field, trimmed, with its byte range in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'s> {
    text: &'s str,
    start: usize,
}

impl<'s> Field<'s> {
    pub fn text(&self) -> &'s str {
        self.text
    }

    /// Byte range of the trimmed text within the split input.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// The text with one pair of surrounding double quotes removed.
    pub fn unquoted(&self) -> &'s str {
        let text = self.text.strip_prefix('"').unwrap_or(self.text);
        text.strip_suffix('"').unwrap_or(text)
    }
}

type Located<'s> = LocatingSlice<&'s str>;

/// A double-quoted run; an unterminated quote runs to the end of input.
fn quoted(input: &mut Located<'_>) -> ModalResult<()> {
    ('"', take_till(0.., '"'), opt('"')).void().parse_next(input)
}

fn bare(input: &mut Located<'_>) -> ModalResult<()> {
    take_till(1.., [',', '"']).void().parse_next(input)
}

fn field<'s>(input: &mut Located<'s>) -> ModalResult<&'s str> {
    repeat::<_, _, (), _, _>(0.., alt((quoted, bare)))
        .take()
        .parse_next(input)
}

/// Split `text` on commas that are not inside double quotes.
///
/// Always yields at least one field. Fields are trimmed; their ranges point
/// at the trimmed text.
pub fn split_fields(text: &str) -> Vec<Field<'_>> {
    let raw: Vec<(&str, Range<usize>)> = separated(1.., field.with_span(), ',')
        .parse(LocatingSlice::new(text))
        .unwrap_or_else(|_| vec![(text, 0..text.len())]);

    raw.into_iter()
        .map(|(raw, range)| {
            let trimmed = raw.trim();
            Field {
                text: trimmed,
                start: range.start + (raw.len() - raw.trim_start().len()),
            }
        })
        .collect()
}

fn signed(input: &mut &str) -> ModalResult<i32> {
    dec_int.parse_next(input)
}

fn unsigned(input: &mut &str) -> ModalResult<u32> {
    dec_uint.parse_next(input)
}

/// Parse a whole, optionally signed, decimal integer.
pub fn parse_integer(text: &str) -> Option<i32> {
    signed.parse(text.trim()).ok()
}

/// Parse a whole non-negative decimal integer.
pub fn parse_unsigned(text: &str) -> Option<u32> {
    unsigned.parse(text.trim()).ok()
}

/// Why a coordinate could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// Not exactly two parts.
    Format,
    /// Two parts, but at least one is not an integer.
    NonNumeric,
}

/// Parse `column<sep>row` where `<sep>` is `;`, `:` or `,`, tried in that
/// order. Whitespace is ignored.
pub fn parse_coordinates(text: &str) -> std::result::Result<Cell, CoordinateError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut parts: Vec<&str> = compact.split([';', ':']).collect();
    if parts.len() != 2 {
        parts = compact.split(',').collect();
    }
    let [column, row] = parts.as_slice() else {
        return Err(CoordinateError::Format);
    };

    match (parse_integer(column), parse_integer(row)) {
        (Some(column), Some(row)) => Ok(Cell::new(row, column)),
        _ => Err(CoordinateError::NonNumeric),
    }
}

/// `DESCRIPTION: "text"`
pub(crate) fn description(line: &ClassifiedLine<'_>) -> Result<String> {
    let payload = line.payload().trim();
    payload
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|inner| !inner.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Diagnostic::new(
                ErrorCode::E002,
                line.source(),
                "Invalid DESCRIPTION (must be a quoted string)",
            )
            .with_help("write the description as `DESCRIPTION: \"text\"`")
        })
}

/// `LEVEL: <int>`
pub(crate) fn level(line: &ClassifiedLine<'_>) -> Result<u32> {
    parse_unsigned(line.payload()).ok_or_else(|| {
        let payload = line.payload();
        let start = payload.len() - payload.trim_start().len();
        Diagnostic::new(
            ErrorCode::E003,
            line.source(),
            "Invalid LEVEL (must be numeric)",
        )
        .with_label(
            line.payload_span(start..payload.trim_end().len().max(start)),
            "expected a non-negative integer",
        )
    })
}

/// `ELEMENT: <id>, <Type>, "<name>", <col><sep><row>`
pub(crate) fn element(line: &ClassifiedLine<'_>) -> Result<Element> {
    let fields = split_fields(line.payload());
    if fields.len() < 4 {
        return Err(Diagnostic::new(
            ErrorCode::E004,
            line.source(),
            format!(
                "Invalid ELEMENT syntax (expected 4 fields, found {})",
                fields.len()
            ),
        )
        .with_help("use `ELEMENT: <id>, <Type>, \"<name>\", <column>;<row>`"));
    }

    let id_field = fields[0];
    let id = parse_unsigned(id_field.text()).ok_or_else(|| {
        Diagnostic::new(
            ErrorCode::E005,
            line.source(),
            format!("Invalid element id `{}` (must be numeric)", id_field.text()),
        )
        .with_label(line.payload_span(id_field.range()), "not a number")
    })?;

    // A `,` separated coordinate was split into several trailing fields.
    let coordinate_fields = if fields[3].text().contains([';', ':']) {
        &fields[3..4]
    } else {
        &fields[3..]
    };
    let coordinate = coordinate_fields
        .iter()
        .map(Field::text)
        .collect::<Vec<_>>()
        .join(",");
    let coordinate_span = line.payload_span(
        coordinate_fields[0].range().start..coordinate_fields[coordinate_fields.len() - 1].range().end,
    );

    let cell = parse_coordinates(&coordinate).map_err(|err| match err {
        CoordinateError::Format => Diagnostic::new(
            ErrorCode::E006,
            line.source(),
            format!("Invalid coordinate format `{coordinate}`"),
        )
        .with_label(coordinate_span, "expected two parts")
        .with_help("write coordinates as `column;row`, for example `2;-1`"),
        CoordinateError::NonNumeric => Diagnostic::new(
            ErrorCode::E007,
            line.source(),
            format!("Non-numeric coordinates `{coordinate}`"),
        )
        .with_label(coordinate_span, "column and row must be integers"),
    })?;

    Ok(Element::new(
        ElementId::new(id),
        fields[1].text(),
        fields[2].unquoted(),
        cell,
        line.source().clone(),
    ))
}

/// `SLICE: <TYPE>, "<name>", <col>, ...`
pub(crate) fn slice(line: &ClassifiedLine<'_>) -> Result<Slice> {
    let fields = split_fields(line.payload());
    if fields.len() < 3 {
        return Err(Diagnostic::new(
            ErrorCode::E004,
            line.source(),
            format!(
                "Invalid SLICE syntax (expected at least 3 fields, found {})",
                fields.len()
            ),
        )
        .with_help("use `SLICE: <TYPE>, \"<name>\", <column>, ...`"));
    }

    let type_field = fields[0];
    let slice_type: SliceType = type_field.text().parse().map_err(|_| {
        Diagnostic::new(
            ErrorCode::E009,
            line.source(),
            format!("Unknown slice type `{}`", type_field.text()),
        )
        .with_label(line.payload_span(type_field.range()), "unknown slice type")
        .with_help("valid types are STATE_CHANGE, AUTOMATION, VIEW_STATE and TRANSLATION")
    })?;

    let columns: Vec<i32> = fields[2..]
        .iter()
        .filter_map(|field| parse_integer(field.text()))
        .collect();
    if columns.is_empty() {
        return Err(Diagnostic::new(
            ErrorCode::E010,
            line.source(),
            format!("SLICE \"{}\" has no numeric columns", fields[1].unquoted()),
        ));
    }

    Ok(Slice::new(
        slice_type,
        fields[1].unquoted(),
        columns,
        line.source().clone(),
    ))
}

/// `<id> to <id>`, surrounding spaces allowed.
fn flow_body(input: &mut &str) -> ModalResult<(u32, u32)> {
    (
        space0,
        dec_uint::<_, u32, _>,
        space1,
        literal("to"),
        space1,
        dec_uint::<_, u32, _>,
        space0,
    )
        .map(|(_, source, _, _, _, target, _)| (source, target))
        .parse_next(input)
}

/// `FLOW: <id> to <id>` and `BACK_FLOW: <id> to <id>`
pub(crate) fn flow(line: &ClassifiedLine<'_>, kind: FlowKind) -> Result<Flow> {
    let (source, target) = flow_body.parse(line.payload()).map_err(|_| {
        Diagnostic::new(
            ErrorCode::E011,
            line.source(),
            format!("Invalid {} syntax", kind.keyword()),
        )
        .with_help(format!("use `{}: <id> to <id>`", kind.keyword()))
    })?;

    Ok(Flow::new(
        ElementId::new(source),
        ElementId::new(target),
        kind,
        line.source().clone(),
    ))
}
