//! Preparing message content before conversion.
//!
//! Search and bookmark highlighting leave `<mark>` and tinted `<span>` wrappers
//! in captured message HTML, and some messages arrive with no HTML at all.
//! These helpers normalize both cases into a fragment the converter can read.

use once_cell::sync::Lazy;
use regex::Regex;

static MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<mark[^>]*>([\s\S]*?)</mark>").expect("valid regex"));

static HIGHLIGHT_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<span[^>]*class="[^"]*highlight[^"]*"[^>]*>([\s\S]*?)</span>"#)
        .expect("valid regex")
});

static BACKGROUND_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<span[^>]*style="[^"]*background[^"]*"[^>]*>([\s\S]*?)</span>"#)
        .expect("valid regex")
});

static EMPTY_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<span[^>]*>\s*</span>").expect("valid regex"));

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Remove highlight wrappers from message HTML, keeping their inner markup.
///
/// Unwraps `<mark>`, spans whose class mentions `highlight` and spans with a
/// background style, then drops spans left holding only whitespace.
pub fn strip_highlight_markup(html: &str) -> String {
    let cleaned = MARK.replace_all(html, "$1");
    let cleaned = HIGHLIGHT_SPAN.replace_all(&cleaned, "$1");
    let cleaned = BACKGROUND_SPAN.replace_all(&cleaned, "$1");
    EMPTY_SPAN.replace_all(&cleaned, "").into_owned()
}

/// Wrap plain message text as HTML paragraphs.
///
/// Blank lines separate paragraphs; single newlines become `<br>`.
///
/// # Example
///
/// ```rust
/// use chatdown::wrap_plain_text_as_html;
///
/// let html = wrap_plain_text_as_html("a < b\nc\n\nd");
/// assert_eq!(html, "<p>a &lt; b<br>c</p><p>d</p>");
/// ```
pub fn wrap_plain_text_as_html(text: &str) -> String {
    let escaped = escape_html(&text.replace("\r\n", "\n"));
    PARAGRAPH_BREAK
        .split(&escaped)
        .map(|part| format!("<p>{}</p>", part.replace('\n', "<br>")))
        .collect()
}

/// Escape text for safe inclusion in HTML content or attributes
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
