//! HTML parsing support.
//!
//! Parses HTML fragment strings with scraper and converts the result into the
//! owned [`Node`] tree the block parser walks.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a fragment-rooted Node tree.
///
/// Malformed markup is repaired by the HTML5 tree builder rather than
/// rejected; comments, doctypes and processing instructions are dropped.
///
/// # Example
///
/// ```rust
/// use chatdown::parse_html;
///
/// let root = parse_html("<p>Hello <em>World</em></p>");
/// assert_eq!(root.children().count(), 1);
/// assert_eq!(root.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);

    // Fragment parsing wraps the content in a synthetic <html> element.
    // The tree is built with an explicit stack so nesting depth is bounded
    // by memory, not by the call stack.
    let mut stack = vec![(Node::fragment(), pending_children(document.root_element()))];
    loop {
        let next = match stack.last_mut() {
            Some((_, children)) => children.next(),
            None => return Node::fragment(),
        };
        match next {
            Some(Pending::Text(text)) => {
                if let Some((node, _)) = stack.last_mut() {
                    node.add_child(Node::text(text));
                }
            }
            Some(Pending::Element(element)) => {
                stack.push((element_node(element), pending_children(element)));
            }
            None => {
                let Some((done, _)) = stack.pop() else {
                    return Node::fragment();
                };
                match stack.last_mut() {
                    Some((parent, _)) => parent.add_child(done),
                    None => return done,
                }
            }
        }
    }
}

/// Child of a scraper element still waiting to be converted
enum Pending<'a> {
    Text(&'a str),
    Element(ElementRef<'a>),
}

fn pending_children(element: ElementRef<'_>) -> std::vec::IntoIter<Pending<'_>> {
    element
        .children()
        .filter_map(|child| match child.value() {
            ScraperNode::Text(text) => Some(Pending::Text(&text.text)),
            ScraperNode::Element(_) => ElementRef::wrap(child).map(Pending::Element),
            _ => None,
        })
        .collect::<Vec<_>>()
        .into_iter()
}

/// Convert a scraper element to a childless Node
fn element_node(element: ElementRef) -> Node {
    let value = element.value();
    let attrs: Vec<(&str, &str)> = value.attrs().collect();

    if attrs.is_empty() {
        Node::element(value.name())
    } else {
        Node::element_with_attrs(value.name(), attrs)
    }
}
