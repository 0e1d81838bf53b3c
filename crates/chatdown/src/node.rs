//! Owned DOM node tree for chat message conversion.
//!
//! HTML fragments are parsed once into this structure and the block parser
//! walks it read-only. Any parser (scraper, html5ever, a browser bridge) can
//! produce a `Node` tree and hand it to [`crate::parse_node`].

/// Node types the converter distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node
    Element,
    /// Text node
    Text,
    /// Fragment root holding the top-level nodes of a parsed fragment
    Fragment,
}

/// A node in an owned HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub node_type: NodeType,

    /// Lowercase tag name for elements, empty otherwise
    pub tag: String,

    /// Text content for text nodes
    pub value: Option<String>,

    /// Attributes in source order, names lowercased
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: tag_name.to_lowercase(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            tag: String::new(),
            value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty fragment root
    pub fn fragment() -> Self {
        Self {
            node_type: NodeType::Fragment,
            tag: String::new(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Tag name (lowercase); empty for non-elements
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Whether this is an element with one of the given tags
    pub fn is_any_of(&self, tags: &[&str]) -> bool {
        self.is_element() && tags.contains(&self.tag.as_str())
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.node_type {
                NodeType::Text => out.push_str(node.value.as_deref().unwrap_or("")),
                _ => stack.extend(node.children.iter().rev()),
            }
        }
        out
    }

    /// First descendant element (depth-first, document order) with the given tag
    pub fn find_descendant(&self, tag: &str) -> Option<&Node> {
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.is_element() && node.tag == tag {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// All descendant elements with the given tag, in document order
    pub fn descendants_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.is_element() && node.tag == tag {
                found.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        found
    }
}

// Children are torn down from a flat list so dropping a deep tree never recurses.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
