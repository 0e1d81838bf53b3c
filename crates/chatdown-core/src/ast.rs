//! Chat message document model
//!
//! This module defines the block and inline nodes produced by the HTML parser
//! and consumed by the Markdown and plain-text renderers. Nodes are built once
//! per conversion and never mutated afterwards.

/// A block-level node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// Heading with the source level (1-6) and inline content
    Heading { level: u8, content: Vec<Inline> },

    /// List (ordered or unordered), possibly nested through its items
    List(List),

    /// Pre-formatted code with an optional language hint (empty when absent)
    CodeBlock { language: String, code: String },

    /// Block quote containing nested blocks
    BlockQuote(Vec<Block>),

    /// Table whose cells are already reduced to plain text
    Table {
        rows: Vec<Vec<String>>,
        has_header: bool,
    },

    /// Thematic break (horizontal rule)
    ThematicBreak,
}

/// An ordered or unordered list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(ordered: bool, items: Vec<ListItem>) -> Self {
        Self { ordered, items }
    }
}

/// A list item: its own inline text plus any sub-lists nested under it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub inlines: Vec<Inline>,
    pub children: Vec<List>,
}

impl ListItem {
    pub fn new(inlines: Vec<Inline>, children: Vec<List>) -> Self {
        Self { inlines, children }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            inlines,
            children: Vec::new(),
        }
    }
}

/// An inline node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text with whitespace runs collapsed to single spaces
    Text(String),

    /// Hard line break
    LineBreak,

    /// Inline code, newlines already flattened to spaces
    Code(String),

    /// Strong emphasis (bold)
    Strong(Vec<Inline>),

    /// Emphasis (italic)
    Emphasis(Vec<Inline>),

    /// Link with a target and its visible label
    Link { href: String, content: Vec<Inline> },
}

impl Inline {
    /// Shorthand for a text node
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    /// Whether this inline carries renderable content.
    ///
    /// A bare line break does not count: a paragraph made only of `<br>`s
    /// has nothing to show.
    pub fn has_content(&self) -> bool {
        match self {
            Inline::Text(text) => !text.trim().is_empty(),
            Inline::LineBreak => false,
            Inline::Code(_) | Inline::Link { .. } => true,
            Inline::Strong(inlines) | Inline::Emphasis(inlines) => has_inline_content(inlines),
        }
    }
}

/// Check whether any inline in the slice carries renderable content
pub fn has_inline_content(inlines: &[Inline]) -> bool {
    inlines.iter().any(Inline::has_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_has_no_content() {
        assert!(!Inline::text("   ").has_content());
        assert!(Inline::text(" a ").has_content());
    }

    #[test]
    fn test_line_break_alone_has_no_content() {
        assert!(!has_inline_content(&[Inline::LineBreak, Inline::text(" ")]));
    }

    #[test]
    fn test_nested_strong_content() {
        let strong = Inline::Strong(vec![Inline::Emphasis(vec![Inline::text("x")])]);
        assert!(strong.has_content());

        let hollow = Inline::Strong(vec![Inline::text(" ")]);
        assert!(!hollow.has_content());
    }

    #[test]
    fn test_code_and_link_always_count() {
        assert!(Inline::Code("x".to_string()).has_content());
        assert!(Inline::Link {
            href: String::new(),
            content: vec![Inline::text(" ")],
        }
        .has_content());
    }
}
