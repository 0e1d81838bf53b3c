//! chatdown-core - chat message document model and renderers
//!
//! This crate provides the document model produced from chat message HTML and
//! the two renderers that consume it. It is used by `chatdown`, which owns the
//! HTML side of the conversion.
//!
//! # Architecture
//!
//! ```text
//!                              ┌──▶ render_markdown ──▶ Markdown String
//! HTML fragment ──▶ Vec<Block> │
//!                              └──▶ render_text ──────▶ Plain-text String
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatdown_core::{render_markdown, render_text, Block, Inline, MarkdownOptions, TextOptions};
//!
//! let blocks = vec![
//!     Block::Heading {
//!         level: 2,
//!         content: vec![Inline::Text("Answer".to_string())],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::Text("This is ".to_string()),
//!         Inline::Strong(vec![Inline::Text("bold".to_string())]),
//!         Inline::Text(" text.".to_string()),
//!     ]),
//! ];
//!
//! let markdown = render_markdown(&blocks, &MarkdownOptions::default());
//! assert_eq!(markdown, "##### Answer\n\nThis is **bold** text.");
//!
//! let text = render_text(&blocks, &TextOptions::default());
//! assert_eq!(text, "## Answer\n\nThis is bold text.");
//! ```

mod ast;
mod layout;
mod markdown;
mod options;
mod text;

pub use ast::{has_inline_content, Block, Inline, List, ListItem};
pub use markdown::{render_inlines as render_markdown_inlines, render_markdown};
pub use options::{MarkdownOptions, TextOptions};
pub use text::{render_inlines as render_text_inlines, render_text};
