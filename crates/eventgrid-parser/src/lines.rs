//! Line classification for eventgrid source text.
//!
//! The DSL is line oriented: every meaningful line starts with a directive
//! keyword followed by `:`. [`classify`] splits the source into lines, drops
//! blank lines and `#` comments, and tags each remaining line with its
//! [`DirectiveKind`] exactly once, so later stages dispatch on the enum rather
//! than re-inspecting the text.

use log::trace;
use winnow::{
    Parser as _,
    ascii::space0,
    combinator::terminated,
    error::ModalResult,
    token::take_while,
};

use crate::{SourceLine, Span};

/// The directive a line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Description,
    Level,
    Element,
    Text,
    Slice,
    Flow,
    BackFlow,
    /// Any non-blank, non-comment line without a recognized keyword.
    Unknown,
}

/// Keyword lookup table. Keywords are upper case and match exactly.
const DIRECTIVES: [(&str, DirectiveKind); 7] = [
    ("DESCRIPTION", DirectiveKind::Description),
    ("LEVEL", DirectiveKind::Level),
    ("ELEMENT", DirectiveKind::Element),
    ("TEXT", DirectiveKind::Text),
    ("SLICE", DirectiveKind::Slice),
    ("FLOW", DirectiveKind::Flow),
    ("BACK_FLOW", DirectiveKind::BackFlow),
];

impl DirectiveKind {
    /// Find the directive named by `keyword`.
    pub fn lookup(keyword: &str) -> Option<DirectiveKind> {
        DIRECTIVES
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, kind)| *kind)
    }

    /// The canonical keyword, or `None` for [`DirectiveKind::Unknown`].
    pub fn keyword(&self) -> Option<&'static str> {
        DIRECTIVES
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
    }

    /// Returns `true` for every kind except [`DirectiveKind::Unknown`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DirectiveKind::Unknown)
    }
}

/// A meaningful source line tagged with its directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'src> {
    kind: DirectiveKind,
    source: SourceLine,
    payload: &'src str,
    payload_offset: usize,
}

impl<'src> ClassifiedLine<'src> {
    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// The originating line.
    pub fn source(&self) -> &SourceLine {
        &self.source
    }

    /// Everything after the `KEYWORD:` prefix, or the whole line for
    /// [`DirectiveKind::Unknown`].
    pub fn payload(&self) -> &'src str {
        self.payload
    }

    /// Source span of `range`, given relative to the start of the payload.
    pub fn payload_span(&self, range: std::ops::Range<usize>) -> Span {
        self.source
            .span()
            .subspan(self.payload_offset + range.start..self.payload_offset + range.end)
    }
}

/// `KEYWORD` followed by optional spaces and a colon.
fn directive_head<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        (space0, ':'),
    )
    .parse_next(input)
}

fn classify_text(text: &str) -> (DirectiveKind, &str) {
    let mut rest = text;
    match directive_head.parse_next(&mut rest) {
        Ok(head) => match DirectiveKind::lookup(head) {
            Some(kind) => (kind, rest),
            None => (DirectiveKind::Unknown, text),
        },
        Err(_) => (DirectiveKind::Unknown, text),
    }
}

/// Split `source` into classified lines.
///
/// Blank lines and lines whose first non-space character is `#` are skipped.
/// Line numbers are 1-based and count every line of the input, skipped or not.
pub fn classify(source: &str) -> Vec<ClassifiedLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for (index, raw) in source.split('\n').enumerate() {
        let line_start = offset;
        offset += raw.len() + 1;

        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let start = line_start + (raw.len() - raw.trim_start().len());
        let span = Span::new(start..start + text.len());
        let (kind, payload) = classify_text(text);

        trace!(line = index + 1, kind:? = kind; "Classified line");

        lines.push(ClassifiedLine {
            kind,
            source: SourceLine::new(index + 1, text, span),
            payload,
            payload_offset: text.len() - payload.len(),
        });
    }

    lines
}
