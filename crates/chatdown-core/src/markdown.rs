//! Markdown rendering
//!
//! Converts a block sequence into Markdown text.

use crate::ast::{Block, Inline};
use crate::layout::{collapse_and_trim, join_blocks, quote_lines, render_list, ListStyle};
use crate::options::MarkdownOptions;

/// Render a block sequence to Markdown
pub fn render_markdown(blocks: &[Block], options: &MarkdownOptions) -> String {
    join_blocks(blocks.iter().map(|block| render_block(block, options)))
}

fn render_block(block: &Block, options: &MarkdownOptions) -> String {
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

        Block::CodeBlock { language, code } => {
            format!("{fence}{language}\n{code}\n{fence}", fence = options.fence)
        }

        Block::BlockQuote(blocks) => quote_lines(&render_markdown(blocks, options)),

        Block::Table { rows, has_header } => render_table(rows, *has_header, options),

        Block::ThematicBreak => options.hr.clone(),
    }
}

fn render_table(rows: &[Vec<String>], has_header: bool, options: &MarkdownOptions) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    // Markdown tables need a header row; invent column names when the source had none
    let (header, body): (Vec<String>, &[Vec<String>]) = if has_header {
        (first.clone(), &rows[1..])
    } else {
        let synthesized = (1..=first.len())
            .map(|n| format!("{}{}", options.column_prefix, n))
            .collect();
        (synthesized, rows)
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(table_row(&header));
    lines.push(table_row(&vec!["---".to_string(); header.len()]));
    lines.extend(body.iter().map(|row| table_row(row)));
    lines.join("\n")
}

fn table_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Render inline content to Markdown, trimmed
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

        // Code spans keep their literal text with no backtick delimiters
        Inline::Code(code) => out.push_str(code),

        Inline::Strong(content) => {
            let inner = render_inlines(content);
            if !inner.is_empty() {
                out.push_str("**");
                out.push_str(&inner);
                out.push_str("**");
            }
        }

        Inline::Emphasis(content) => {
            let inner = render_inlines(content);
            if !inner.is_empty() {
                out.push('*');
                out.push_str(&inner);
                out.push('*');
            }
        }

        Inline::Link { href, content } => {
            let label = render_inlines(content);
            if label.is_empty() {
                out.push_str(href);
            } else {
                out.push('[');
                out.push_str(&label);
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{List, ListItem};

    fn render(blocks: Vec<Block>) -> String {
        render_markdown(&blocks, &MarkdownOptions::default())
    }

    fn text(value: &str) -> Inline {
        Inline::text(value)
    }

    #[test]
    fn test_paragraph() {
        let result = render(vec![Block::Paragraph(vec![text("Hello World")])]);
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_paragraphs_joined_by_blank_line() {
        let result = render(vec![
            Block::Paragraph(vec![text("one")]),
            Block::Paragraph(vec![text("two")]),
        ]);
        assert_eq!(result, "one\n\ntwo");
    }

    #[test]
    fn test_heading_demoted() {
        let result = render(vec![
            Block::Heading {
                level: 1,
                content: vec![text("Title")],
            },
            Block::Heading {
                level: 5,
                content: vec![text("Deep")],
            },
        ]);
        assert_eq!(result, "#### Title\n\n###### Deep");
    }

    #[test]
    fn test_strong_and_emphasis() {
        let result = render(vec![Block::Paragraph(vec![
            Inline::Strong(vec![text("bold")]),
            text(" and "),
            Inline::Emphasis(vec![text("italic")]),
        ])]);
        assert_eq!(result, "**bold** and *italic*");
    }

    #[test]
    fn test_blank_strong_renders_nothing() {
        let result = render(vec![Block::Paragraph(vec![
            text("a"),
            Inline::Strong(vec![text(" ")]),
            text("b"),
        ])]);
        assert_eq!(result, "ab");
    }

    #[test]
    fn test_inline_code_has_no_backticks() {
        let result = render(vec![Block::Paragraph(vec![
            text("run "),
            Inline::Code("cargo test".to_string()),
        ])]);
        assert_eq!(result, "run cargo test");
    }

    #[test]
    fn test_link() {
        let result = render(vec![Block::Paragraph(vec![Inline::Link {
            href: "https://example.com".to_string(),
            content: vec![text("Example")],
        }])]);
        assert_eq!(result, "[Example](https://example.com)");
    }

    #[test]
    fn test_link_without_label_falls_back_to_href() {
        let result = render(vec![Block::Paragraph(vec![Inline::Link {
            href: "https://example.com".to_string(),
            content: vec![text(" ")],
        }])]);
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_line_break() {
        let result = render(vec![Block::Paragraph(vec![
            text("a"),
            Inline::LineBreak,
            text("b"),
        ])]);
        assert_eq!(result, "a\nb");
    }

    #[test]
    fn test_nested_list() {
        let inner = List::new(false, vec![ListItem::from_inlines(vec![text("b")])]);
        let outer = List::new(
            false,
            vec![
                ListItem::new(vec![text("a")], vec![inner]),
                ListItem::from_inlines(vec![text("c")]),
            ],
        );
        let result = render(vec![Block::List(outer)]);
        assert_eq!(result, "- a\n  - b\n- c");
    }

    #[test]
    fn test_ordered_list() {
        let list = List::new(
            true,
            vec![
                ListItem::from_inlines(vec![text("First")]),
                ListItem::from_inlines(vec![text("Second")]),
            ],
        );
        let result = render(vec![Block::List(list)]);
        assert_eq!(result, "1. First\n2. Second");
    }

    #[test]
    fn test_empty_list_item_keeps_marker() {
        let list = List::new(false, vec![ListItem::default()]);
        assert_eq!(render(vec![Block::List(list)]), "-");
    }

    #[test]
    fn test_code_block() {
        let result = render(vec![Block::CodeBlock {
            language: "rust".to_string(),
            code: "let x = 1;".to_string(),
        }]);
        assert_eq!(result, "```rust\nlet x = 1;\n```");
    }

    #[test]
    fn test_code_block_without_language() {
        let result = render(vec![Block::CodeBlock {
            language: String::new(),
            code: "plain".to_string(),
        }]);
        assert_eq!(result, "```\nplain\n```");
    }

    #[test]
    fn test_blockquote() {
        let result = render(vec![Block::BlockQuote(vec![
            Block::Paragraph(vec![text("Quote")]),
            Block::Paragraph(vec![text("More")]),
        ])]);
        assert_eq!(result, "> Quote\n>\n> More");
    }

    #[test]
    fn test_table_with_header() {
        let result = render(vec![Block::Table {
            rows: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ],
            has_header: true,
        }]);
        assert_eq!(result, "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_table_synthesizes_header() {
        let result = render(vec![Block::Table {
            rows: vec![vec!["x".to_string(), "y".to_string()]],
            has_header: false,
        }]);
        assert_eq!(result, "| 列1 | 列2 |\n| --- | --- |\n| x | y |");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let result = render(vec![
            Block::Table {
                rows: Vec::new(),
                has_header: false,
            },
            Block::Paragraph(vec![text("after")]),
        ]);
        assert_eq!(result, "after");
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(render(vec![Block::ThematicBreak]), "---");
    }
}
