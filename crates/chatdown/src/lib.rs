//! # chatdown
//!
//! Convert chat message HTML fragments to Markdown and plain text.
//!
//! Chat pages render assistant and user messages as loosely structured HTML.
//! This crate parses such a fragment into a small document model (headings,
//! paragraphs, lists, code blocks, quotes, tables, rules and inline emphasis)
//! and renders it either as Markdown or as plain text with light structural
//! cues.
//!
//! ## Design
//!
//! - **Total**: conversion never fails. Unknown tags are transparent, empty
//!   structure is dropped, and blank input yields an empty string.
//! - **Owned tree**: the fragment is parsed once into an owned [`Node`] tree;
//!   the parser never touches a live DOM.
//! - **Bounded**: nesting deeper than [`MAX_NESTING`] elements is read as
//!   plain text, and no tree walk recurses on the call stack past that.
//! - **Stateless**: every call builds and discards its own tree, so calls can
//!   run concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! let html = "<h2>Steps</h2><ol><li>Install</li><li>Run <code>cargo test</code></li></ol>";
//!
//! assert_eq!(
//!     chatdown::to_markdown(html),
//!     "##### Steps\n\n1. Install\n2. Run cargo test"
//! );
//! assert_eq!(
//!     chatdown::to_text(html),
//!     "## Steps\n\n1. Install\n2. Run cargo test"
//! );
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod prepare;

use std::fmt;
use std::str::FromStr;

pub use chatdown_core::{
    render_markdown, render_text, Block, Inline, List, ListItem, MarkdownOptions, TextOptions,
};
pub use convert::{parse_blocks, parse_inlines, parse_list, parse_table, MAX_NESTING};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use prepare::{escape_html, strip_highlight_markup, wrap_plain_text_as_html};

/// Error type for chatdown operations
#[derive(Debug, thiserror::Error)]
pub enum ChatdownError {
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ChatdownError>;

/// Output format of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Markdown with demoted headings
    #[default]
    Markdown,
    /// Plain text with light structural cues
    Text,
}

impl Format {
    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Text => "txt",
        }
    }
}

impl FromStr for Format {
    type Err = ChatdownError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(Format::Markdown),
            "txt" | "text" => Ok(Format::Text),
            _ => Err(ChatdownError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Parse an already-built Node tree into the document model
pub fn parse_node(root: &Node) -> Vec<Block> {
    parse_blocks(root)
}

/// Parse an HTML fragment into the document model.
///
/// Blank input short-circuits to an empty sequence without invoking the parser.
#[cfg(feature = "html")]
pub fn parse(html: &str) -> Vec<Block> {
    if html.trim().is_empty() {
        return Vec::new();
    }
    let blocks = parse_blocks(&parse_html(html));
    tracing::debug!(input_len = html.len(), blocks = blocks.len(), "parsed message fragment");
    blocks
}

/// Convert an HTML fragment to Markdown
#[cfg(feature = "html")]
pub fn to_markdown(html: &str) -> String {
    to_markdown_with_options(html, &MarkdownOptions::default())
}

/// Convert an HTML fragment to Markdown with custom render options
#[cfg(feature = "html")]
pub fn to_markdown_with_options(html: &str, options: &MarkdownOptions) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    render_markdown(&parse(html), options)
}

/// Convert an HTML fragment to plain text
#[cfg(feature = "html")]
pub fn to_text(html: &str) -> String {
    to_text_with_options(html, &TextOptions::default())
}

/// Convert an HTML fragment to plain text with custom render options
#[cfg(feature = "html")]
pub fn to_text_with_options(html: &str, options: &TextOptions) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    render_text(&parse(html), options)
}

/// Convert an HTML fragment to the requested format
#[cfg(feature = "html")]
pub fn render(html: &str, format: Format) -> String {
    match format {
        Format::Markdown => to_markdown(html),
        Format::Text => to_text(html),
    }
}

/// Render one chat message for export.
///
/// Uses the captured HTML with highlight markup stripped when it is present
/// and non-blank; otherwise wraps `fallback_text` into paragraphs so plain
/// messages go through the same conversion.
#[cfg(feature = "html")]
pub fn render_message(html: Option<&str>, fallback_text: &str, format: Format) -> String {
    let source = match html.filter(|h| !h.trim().is_empty()) {
        Some(h) => strip_highlight_markup(h),
        None => {
            tracing::trace!("message has no HTML, wrapping plain text");
            wrap_plain_text_as_html(fallback_text)
        }
    };
    render(&source, format)
}
