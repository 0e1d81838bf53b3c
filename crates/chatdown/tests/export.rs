//! Message rendering as used by export.

use chatdown::{render_message, Format};

#[test]
fn highlighted_html_is_cleaned_before_conversion() {
    let html = r#"<p>The <span class="search-highlight">answer</span> is <mark>42</mark>.</p>"#;
    assert_eq!(render_message(Some(html), "", Format::Markdown), "The answer is 42.");
}

#[test]
fn plain_text_message_without_html() {
    let text = "<script> is escaped\nsecond line\n\nnew paragraph";
    assert_eq!(
        render_message(None, text, Format::Markdown),
        "<script> is escaped\nsecond line\n\nnew paragraph"
    );
}

#[test]
fn blank_message_renders_empty() {
    assert_eq!(render_message(None, "", Format::Text), "");
    assert_eq!(render_message(Some(" "), "  ", Format::Markdown), "");
}

#[test]
fn format_names_parse() {
    let format: Format = "txt".parse().expect("txt is a known format");
    assert_eq!(
        render_message(Some("<h1>Hi</h1>"), "", format),
        "## Hi"
    );
}
