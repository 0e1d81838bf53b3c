//! Layout helpers shared by both renderers.

use crate::ast::{Inline, List};

/// Join rendered blocks with a blank line, skipping empty ones
pub(crate) fn join_blocks<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let parts: Vec<String> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    collapse_and_trim(&parts.join("\n\n"))
}

/// Trim, then collapse every run of three or more newlines down to two
pub(crate) fn collapse_and_trim(s: &str) -> String {
    let trimmed = s.trim();
    let mut result = String::with_capacity(trimmed.len());
    let mut newline_count = 0;

    for c in trimmed.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(c);
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    result
}

/// Prefix every line with `> `; blank lines become a bare `>`
pub(crate) fn quote_lines(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List markers and indentation, borrowed from either renderer's options
pub(crate) struct ListStyle<'a> {
    pub indent: &'a str,
    pub bullet: &'a str,
}

/// Render a list and its nested sub-lists, one item per line.
///
/// `render_inlines` turns an item's own inline content into a single string.
pub(crate) fn render_list<F>(
    list: &List,
    depth: usize,
    style: &ListStyle,
    render_inlines: &F,
) -> String
where
    F: Fn(&[Inline]) -> String,
{
    let indent = style.indent.repeat(depth);
    let mut lines = Vec::with_capacity(list.items.len());

    for (i, item) in list.items.iter().enumerate() {
        let text = render_inlines(&item.inlines);
        let line = if list.ordered {
            format!("{indent}{}. {text}", i + 1)
        } else {
            format!("{indent}{}{text}", style.bullet)
        };
        lines.push(line.trim_end().to_string());

        for child in &item.children {
            let nested = render_list(child, depth + 1, style, render_inlines);
            if !nested.is_empty() {
                lines.push(nested);
            }
        }
    }

    lines.join("\n")
}
