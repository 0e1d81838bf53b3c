//! Convert an owned Node tree into the chat message document model
//!
//! The block parser walks the direct children of a root node; inline content,
//! lists and tables are handed to their own sub-parsers. Nothing here fails:
//! unknown markup is either transparent or folded into a paragraph.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::node::{Node, NodeType};
use chatdown_core::{has_inline_content, render_text_inlines, Block, Inline, List, ListItem};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

static LANGUAGE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)language-([a-z0-9_-]+)").expect("valid regex"));

const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Element nesting past which a subtree is read as plain text
pub const MAX_NESTING: usize = 128;

/// Conversion context threaded through the parsers
#[derive(Debug, Default, Clone, Copy)]
struct Context {
    /// Elements entered above the current node
    depth: usize,
    /// Set while tokenizing a list item's own text
    skip_lists: bool,
}

impl Context {
    fn enter(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    fn exhausted(&self) -> bool {
        self.depth >= MAX_NESTING
    }
}

/// Parse the direct children of `root` into a block sequence
pub fn parse_blocks(root: &Node) -> Vec<Block> {
    blocks_of(root, Context::default())
}

fn blocks_of(root: &Node, ctx: Context) -> Vec<Block> {
    let mut blocks = Vec::new();
    for child in root.children() {
        node_to_blocks(child, ctx, &mut blocks);
    }
    blocks
}

fn node_to_blocks(node: &Node, ctx: Context, blocks: &mut Vec<Block>) {
    match node.node_type {
        NodeType::Text => {
            let text = normalize_whitespace(node.value.as_deref().unwrap_or(""));
            if !text.trim().is_empty() {
                blocks.push(Block::Paragraph(vec![Inline::Text(text)]));
            }
        }
        _ if ctx.exhausted() => {
            trace!(depth = ctx.depth, "nesting limit reached, reading subtree as text");
            let text = normalize_whitespace(&node.text_content());
            if !text.trim().is_empty() {
                blocks.push(Block::Paragraph(vec![Inline::Text(text.trim().to_string())]));
            }
        }
        NodeType::Fragment => {
            for child in node.children() {
                node_to_blocks(child, ctx.enter(), blocks);
            }
        }
        NodeType::Element => element_to_blocks(node, ctx.enter(), blocks),
    }
}

/// `ctx` already counts `node` itself
fn element_to_blocks(node: &Node, ctx: Context, blocks: &mut Vec<Block>) {
    let tag = node.tag_name();

    match tag {
        "p" => {
            let inlines = inlines_of(node, ctx);
            if has_inline_content(&inlines) {
                blocks.push(Block::Paragraph(inlines));
            } else {
                trace!("dropping empty paragraph");
            }
        }

        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag.as_bytes()[1] - b'0';
            let content = inlines_of(node, ctx);
            if has_inline_content(&content) {
                blocks.push(Block::Heading { level, content });
            } else {
                trace!(tag, "dropping empty heading");
            }
        }

        "ul" | "ol" => blocks.push(Block::List(list_of(node, ctx))),

        "pre" => blocks.push(parse_code_block(node)),

        "blockquote" => {
            let inner = blocks_of(node, ctx);
            if !inner.is_empty() {
                blocks.push(Block::BlockQuote(inner));
            }
        }

        "table" => blocks.push(table_of(node, ctx)),

        "hr" => blocks.push(Block::ThematicBreak),

        // Containers - splice their blocks into the parent sequence
        "div" | "section" | "article" => blocks.extend(blocks_of(node, ctx)),

        "br" => blocks.push(Block::Paragraph(vec![Inline::LineBreak])),

        // Anything else is read as inline content, the element itself included
        _ => {
            let mut inlines = Vec::new();
            collect_element_inlines(node, ctx, &mut inlines);
            if has_inline_content(&inlines) {
                blocks.push(Block::Paragraph(inlines));
            } else {
                trace!(tag, "dropping element without inline content");
            }
        }
    }
}

fn parse_code_block(pre: &Node) -> Block {
    let code = pre.find_descendant("code");

    let class = code
        .and_then(|c| c.attr("class"))
        .filter(|c| !c.is_empty())
        .or_else(|| pre.attr("class"))
        .unwrap_or("");

    let language = LANGUAGE_CLASS
        .captures(class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mut text = code.unwrap_or(pre).text_content();
    if text.ends_with('\n') {
        text.pop();
    }

    Block::CodeBlock {
        language,
        code: text,
    }
}

/// Parse a `<ul>`/`<ol>` element, recursing into nested lists
pub fn parse_list(list: &Node) -> List {
    list_of(list, Context::default())
}

fn list_of(list: &Node, ctx: Context) -> List {
    let ordered = list.tag_name() == "ol";

    let items = list
        .element_children()
        .filter(|child| child.tag_name() == "li")
        .map(|li| parse_list_item(li, ctx.enter()))
        .collect();

    List::new(ordered, items)
}

fn parse_list_item(li: &Node, ctx: Context) -> ListItem {
    // The item's own text must not pick up any nested list's text
    let inlines = inlines_of(
        li,
        Context {
            skip_lists: !ctx.exhausted(),
            ..ctx
        },
    );

    let children = if ctx.exhausted() {
        Vec::new()
    } else {
        li.element_children()
            .filter(|child| child.is_any_of(LIST_TAGS))
            .map(|list| list_of(list, ctx.enter()))
            .collect()
    };

    ListItem::new(inlines, children)
}

/// Parse a `<table>` element into rows of plain-text cells
pub fn parse_table(table: &Node) -> Block {
    table_of(table, Context::default())
}

fn table_of(table: &Node, ctx: Context) -> Block {
    let mut rows = Vec::new();
    let mut has_header = false;

    for tr in table.descendants_by_tag("tr") {
        let mut cells = Vec::new();
        for cell in tr.element_children() {
            match cell.tag_name() {
                "th" => {
                    has_header = true;
                    cells.push(cell_text(cell, ctx));
                }
                "td" => cells.push(cell_text(cell, ctx)),
                _ => {}
            }
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    Block::Table { rows, has_header }
}

fn cell_text(cell: &Node, ctx: Context) -> String {
    render_text_inlines(&inlines_of(cell, ctx.enter()))
}

/// Tokenize the inline content of a node's children
pub fn parse_inlines(node: &Node) -> Vec<Inline> {
    inlines_of(node, Context::default())
}

fn inlines_of(node: &Node, ctx: Context) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for child in node.children() {
        collect_inlines(child, ctx, &mut inlines);
    }
    inlines
}

fn collect_inlines(node: &Node, ctx: Context, out: &mut Vec<Inline>) {
    match node.node_type {
        NodeType::Text => {
            let text = normalize_whitespace(node.value.as_deref().unwrap_or(""));
            if !text.is_empty() {
                out.push(Inline::Text(text));
            }
        }
        NodeType::Element if ctx.skip_lists && node.is_any_of(LIST_TAGS) => {}
        _ if ctx.exhausted() => {
            let text = normalize_whitespace(&node.text_content());
            if !text.is_empty() {
                out.push(Inline::Text(text));
            }
        }
        NodeType::Fragment => {
            for child in node.children() {
                collect_inlines(child, ctx.enter(), out);
            }
        }
        NodeType::Element => collect_element_inlines(node, ctx.enter(), out),
    }
}

/// `ctx` already counts `node` itself
fn collect_element_inlines(node: &Node, ctx: Context, out: &mut Vec<Inline>) {
    match node.tag_name() {
        "br" => out.push(Inline::LineBreak),

        "strong" | "b" => push_wrapped(inlines_of(node, ctx), Inline::Strong, out),

        "em" | "i" => push_wrapped(inlines_of(node, ctx), Inline::Emphasis, out),

        "code" => {
            let text = node.text_content().replace('\n', " ");
            let text = text.trim();
            if !text.is_empty() {
                out.push(Inline::Code(text.to_string()));
            }
        }

        "a" => {
            let content = inlines_of(node, ctx);
            if !content.is_empty() {
                let href = node.attr("href").unwrap_or("").to_string();
                out.push(Inline::Link { href, content });
            }
        }

        // span, mark and every other element: transparent
        _ => {
            for child in node.children() {
                collect_inlines(child, ctx, out);
            }
        }
    }
}

/// Wrap emphasis children; emphasis holding only whitespace contributes nothing.
fn push_wrapped(children: Vec<Inline>, wrap: fn(Vec<Inline>) -> Inline, out: &mut Vec<Inline>) {
    if has_inline_content(&children) {
        out.push(wrap(children));
    } else if !children.is_empty() {
        trace!("dropping whitespace-only emphasis");
    }
}

fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}
