//! Conversion with non-default render options.

use chatdown::{to_markdown_with_options, to_text_with_options, MarkdownOptions, TextOptions};

const DOCUMENT: &str = concat!(
    "<h2>Title</h2>",
    "<ul><li>a<ul><li>b</li></ul></li></ul>",
    "<hr>",
    r#"<pre><code class="language-rust">let x = 1;</code></pre>"#,
    "<table><tr><td>x</td><td>y</td></tr></table>",
);

#[test]
fn markdown_column_prefix() {
    let options = MarkdownOptions {
        column_prefix: "Col".to_string(),
        ..MarkdownOptions::default()
    };
    assert_eq!(
        to_markdown_with_options("<table><tr><td>x</td></tr></table>", &options),
        "| Col1 |\n| --- |\n| x |"
    );
}

#[test]
fn markdown_heading_shift_and_levels() {
    let options = MarkdownOptions {
        heading_shift: 0,
        heading_levels: 1..=2,
        ..MarkdownOptions::default()
    };
    assert_eq!(to_markdown_with_options("<h1>a</h1>", &options), "# a");
    assert_eq!(to_markdown_with_options("<h5>b</h5>", &options), "## b");
}

#[test]
fn markdown_all_layout_options() {
    let options = MarkdownOptions {
        heading_shift: 1,
        heading_levels: 1..=6,
        list_indent: "    ".to_string(),
        bullet_marker: "* ".to_string(),
        fence: "~~~".to_string(),
        hr: "***".to_string(),
        column_prefix: "C".to_string(),
    };
    assert_eq!(
        to_markdown_with_options(DOCUMENT, &options),
        concat!(
            "### Title\n\n",
            "* a\n    * b\n\n",
            "***\n\n",
            "~~~rust\nlet x = 1;\n~~~\n\n",
            "| C1 | C2 |\n| --- | --- |\n| x | y |",
        )
    );
}

#[test]
fn text_all_layout_options() {
    let options = TextOptions {
        heading_levels: 1..=1,
        list_indent: "\t".to_string(),
        bullet_marker: "+ ".to_string(),
        fence: "~~~".to_string(),
        hr: "=".repeat(10),
        cell_separator: " ; ".to_string(),
    };
    assert_eq!(
        to_text_with_options(DOCUMENT, &options),
        concat!(
            "# Title\n\n",
            "+ a\n\t+ b\n\n",
            "==========\n\n",
            "~~~\nlet x = 1;\n~~~\n\n",
            "x ; y",
        )
    );
}

#[test]
fn text_ordered_list_ignores_bullet_marker() {
    let options = TextOptions {
        bullet_marker: "* ".to_string(),
        list_indent: "    ".to_string(),
        ..TextOptions::default()
    };
    assert_eq!(
        to_text_with_options("<ol><li>one<ol><li>two</li></ol></li></ol>", &options),
        "1. one\n    1. two"
    );
}

#[test]
fn blank_input_ignores_options() {
    let options = MarkdownOptions {
        hr: "***".to_string(),
        ..MarkdownOptions::default()
    };
    assert_eq!(to_markdown_with_options("  ", &options), "");
    assert_eq!(to_text_with_options("", &TextOptions::default()), "");
}
