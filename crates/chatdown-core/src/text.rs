//! Plain-text rendering
//!
//! Produces readable text with light structural cues (`#` before headings,
//! bullets, `>` quotes) and no inline Markdown syntax.

use crate::ast::{Block, Inline};
use crate::layout::{collapse_and_trim, join_blocks, quote_lines, render_list, ListStyle};
use crate::options::TextOptions;

/// Render a block sequence to plain text
pub fn render_text(blocks: &[Block], options: &TextOptions) -> String {
    join_blocks(blocks.iter().map(|block| render_block(block, options)))
}

fn render_block(block: &Block, options: &TextOptions) -> String {
    match block {
        Block::Paragraph(inlines) => render_inlines(inlines),

        Block::Heading { level, content } => {
            let hashes = "#".repeat(options.heading_level(*level));
            format!("{} {}", hashes, render_inlines(content))
        }

        Block::List(list) => {
            let style = ListStyle {
                indent: &options.list_indent,
                bullet: &options.bullet_marker,
            };
            render_list(list, 0, &style, &render_inlines)
        }

        // The language hint is dropped; the fence alone marks the code
        Block::CodeBlock { code, .. } => {
            format!("{fence}\n{code}\n{fence}", fence = options.fence)
        }

        Block::BlockQuote(blocks) => quote_lines(&render_text(blocks, options)),

        Block::Table { rows, .. } => rows
            .iter()
            .map(|row| row.join(&options.cell_separator))
            .collect::<Vec<_>>()
            .join("\n"),

        Block::ThematicBreak => options.hr.clone(),
    }
}

/// Render inline content to plain text, trimmed
pub fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        render_inline(inline, &mut out);
    }
    collapse_and_trim(&out)
}

fn render_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(text),
        Inline::LineBreak => out.push('\n'),
        Inline::Code(code) => out.push_str(code),
        Inline::Strong(content) | Inline::Emphasis(content) => {
            out.push_str(&render_inlines(content));
        }
        Inline::Link { href, content } => {
            let label = render_inlines(content);
            match (label.is_empty(), href.is_empty()) {
                (false, false) => {
                    out.push_str(&label);
                    out.push_str(" (");
                    out.push_str(href);
                    out.push(')');
                }
                (false, true) => out.push_str(&label),
                (true, _) => out.push_str(href),
            }
        }
    }
}
