//! Diagram elements: typed boxes placed on the row/column grid.

use std::{fmt, str::FromStr};

use crate::{UnknownKindError, connection::Cell, span::SourceLine};

/// Numeric identifier of an element, unique within one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// Wrap a raw identifier.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of element types.
///
/// `Screen` is the canonical name for user-facing elements; the DSL also
/// accepts `UI` as a spelling of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    Screen,
    Command,
    Event,
    ExternalEvent,
    ReadModel,
    Automation,
}

impl ElementType {
    /// Canonical CamelCase name, as used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Screen => "Screen",
            ElementType::Command => "Command",
            ElementType::Event => "Event",
            ElementType::ExternalEvent => "ExternalEvent",
            ElementType::ReadModel => "ReadModel",
            ElementType::Automation => "Automation",
        }
    }

    /// Returns `true` for the types that sit on the trigger lane above commands.
    pub fn is_screen_like(&self) -> bool {
        matches!(self, ElementType::Screen | ElementType::Automation)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = UnknownKindError;

    /// Match ignoring ASCII case, underscores and inner spaces, so `READMODEL`,
    /// `ReadModel` and `read_model` are the same type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "screen" | "ui" => Ok(ElementType::Screen),
            "command" => Ok(ElementType::Command),
            "event" => Ok(ElementType::Event),
            "externalevent" => Ok(ElementType::ExternalEvent),
            "readmodel" => Ok(ElementType::ReadModel),
            "automation" => Ok(ElementType::Automation),
            _ => Err(UnknownKindError::new("element type", s)),
        }
    }
}

/// Free-form text attached to an element through a `TEXT` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    text: String,
}

impl Annotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The annotation text; lines are joined with `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `key:value` pairs found in the text.
    ///
    /// Pairs are separated by `;` or line breaks. Only the first `:` splits a
    /// pair, so values may contain colons. Parts without a key or without a
    /// `:` are skipped.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.text
            .split([';', '\n'])
            .filter_map(|part| {
                let (key, value) = part.split_once(':')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key, value.trim()))
            })
            .collect()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A typed, positioned diagram node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    element_type: Option<ElementType>,
    type_name: String,
    name: String,
    cell: Cell,
    source: SourceLine,
    annotation: Option<Annotation>,
}

impl Element {
    /// Create a new element.
    ///
    /// `type_name` is kept verbatim; the typed [`ElementType`] is derived from it
    /// and is `None` when the name is not recognized.
    pub fn new(
        id: ElementId,
        type_name: impl Into<String>,
        name: impl Into<String>,
        cell: Cell,
        source: SourceLine,
    ) -> Self {
        let type_name = type_name.into();
        let element_type = type_name.parse().ok();
        Self {
            id,
            element_type,
            type_name,
            name: name.into(),
            cell,
            source,
            annotation: None,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The recognized element type, if any.
    pub fn element_type(&self) -> Option<ElementType> {
        self.element_type
    }

    /// Returns `true` if this element is of type `ty`.
    pub fn is(&self, ty: ElementType) -> bool {
        self.element_type == Some(ty)
    }

    /// The type as written in the source.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Display name for messages: the canonical type name when recognized,
    /// otherwise the raw text.
    pub fn type_label(&self) -> &str {
        self.element_type
            .map(|ty| ty.as_str())
            .unwrap_or(&self.type_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn row(&self) -> i32 {
        self.cell.row()
    }

    pub fn column(&self) -> i32 {
        self.cell.column()
    }

    /// The line this element was declared on.
    pub fn source(&self) -> &SourceLine {
        &self.source
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }

    /// Attach an annotation, replacing any previous one.
    pub fn set_annotation(&mut self, annotation: Annotation) {
        self.annotation = Some(annotation);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({} #{})", self.name, self.type_label(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn element(type_name: &str) -> Element {
        Element::new(
            ElementId::new(1),
            type_name,
            "Order",
            Cell::new(0, 2),
            SourceLine::new(1, "ELEMENT: 1, ...", Span::new(0..15)),
        )
    }

    #[test]
    fn test_element_type_normalization() {
        assert_eq!("SCREEN".parse::<ElementType>(), Ok(ElementType::Screen));
        assert_eq!("ui".parse::<ElementType>(), Ok(ElementType::Screen));
        assert_eq!("READMODEL".parse::<ElementType>(), Ok(ElementType::ReadModel));
        assert_eq!("ReadModel".parse::<ElementType>(), Ok(ElementType::ReadModel));
        assert_eq!("External_Event".parse::<ElementType>(), Ok(ElementType::ExternalEvent));
        assert_eq!("EXTERNALEVENT".parse::<ElementType>(), Ok(ElementType::ExternalEvent));
        assert!("Gadget".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_unknown_type_is_retained() {
        let el = element("Gadget");
        assert_eq!(el.element_type(), None);
        assert_eq!(el.type_name(), "Gadget");
        assert_eq!(el.type_label(), "Gadget");
    }

    #[test]
    fn test_known_type_label_is_canonical() {
        let el = element("COMMAND");
        assert!(el.is(ElementType::Command));
        assert_eq!(el.type_label(), "Command");
        assert_eq!(el.to_string(), "\"Order\" (Command #1)");
    }

    #[test]
    fn test_annotation_entries() {
        let annotation = Annotation::new("price: 3.50; size:large\nnote: at 10:30");
        assert_eq!(
            annotation.entries(),
            vec![("price", "3.50"), ("size", "large"), ("note", "at 10:30")]
        );
    }

    #[test]
    fn test_annotation_entries_skip_free_text() {
        let annotation = Annotation::new("just a sentence; :orphan");
        assert!(annotation.entries().is_empty());
    }
}
