//! Document tree.
//!
//! Nodes are immutable and reference counted, so a rewritten tree shares
//! every unchanged subtree with its input and callers can check whether a
//! node was touched with [`Arc::ptr_eq`].

use std::fmt::Write as _;
use std::sync::Arc;

pub type NodeRef = Arc<Node>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            namespace: None,
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Foreign content (`svg`, `math`) carries a namespace.
    pub namespace: Option<String>,
    pub attrs: Vec<Attribute>,
    pub children: Vec<NodeRef>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            namespace: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push(Attribute::new(key, value));
        self
    }

    pub fn with_child(mut self, child: NodeRef) -> Self {
        self.children.push(child);
        self
    }

    pub fn append_child(&mut self, child: NodeRef) {
        self.children.push(child);
    }

    /// Value of a non-namespaced attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.namespace.is_none() && a.key == key)
            .map(|a| a.value.as_str())
    }

    /// True if the `class` attribute lists `class` as one of its tokens.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Same tag, namespace and attributes; no children.
    pub fn shallow_clone(&self) -> Element {
        Element {
            tag: self.tag.clone(),
            namespace: self.namespace.clone(),
            attrs: self.attrs.clone(),
            children: Vec::new(),
        }
    }

    pub fn into_node(self) -> NodeRef {
        Arc::new(Node::Element(self))
    }
}

pub fn text(data: &str) -> NodeRef {
    Arc::new(Node::Text(data.to_string()))
}

pub fn comment(data: &str) -> NodeRef {
    Arc::new(Node::Comment(data.to_string()))
}

pub fn doctype(data: &str) -> NodeRef {
    Arc::new(Node::Doctype(data.to_string()))
}

/// Element with attributes and children in one call.
pub fn element(tag: &str, attrs: &[(&str, &str)], children: Vec<NodeRef>) -> NodeRef {
    Element {
        tag: tag.to_string(),
        namespace: None,
        attrs: attrs.iter().map(|(k, v)| Attribute::new(k, v)).collect(),
        children,
    }
    .into_node()
}

// =============================================================================
// HTML serialization
// =============================================================================

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Node {
    /// Serialize this subtree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self, false);
        out
    }
}

/// Serialize a node sequence as HTML.
pub fn render(nodes: &[NodeRef]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, false);
    }
    out
}

fn write_node(out: &mut String, node: &Node, raw_text: bool) {
    match node {
        Node::Text(data) if raw_text => out.push_str(data),
        Node::Text(data) => escape_into(out, data, false),
        Node::Comment(data) => {
            let _ = write!(out, "<!--{data}-->");
        }
        Node::Doctype(data) => {
            let _ = write!(out, "<!DOCTYPE {data}>");
        }
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for attr in &el.attrs {
                out.push(' ');
                if let Some(ns) = &attr.namespace {
                    out.push_str(ns);
                    out.push(':');
                }
                out.push_str(&attr.key);
                out.push_str("=\"");
                escape_into(out, &attr.value, true);
                out.push('"');
            }
            if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            let raw = RAW_TEXT_ELEMENTS.contains(&el.tag.as_str());
            for child in &el.children {
                write_node(out, child, raw);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
    }
}

fn escape_into(out: &mut String, data: &str, attribute: bool) {
    for c in data.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let tree = element(
            "p",
            &[("class", "intro")],
            vec![
                text("a < b & "),
                element("img", &[("src", "/x.png"), ("alt", "say \"hi\"")], vec![]),
                comment(" note "),
            ],
        );

        assert_eq!(
            tree.to_html(),
            r#"<p class="intro">a &lt; b &amp; <img src="/x.png" alt="say &quot;hi&quot;"/><!-- note --></p>"#
        );
    }

    #[test]
    fn test_render_raw_text() {
        let script = element("script", &[], vec![text("if (a < b) {}")]);
        assert_eq!(script.to_html(), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_has_class() {
        let el = Element::new("abbr").with_attr("class", "big emoji");
        assert!(el.has_class("emoji"));
        assert!(!el.has_class("emo"));
    }

    #[test]
    fn test_namespaced_attribute_is_not_plain_attribute() {
        let mut el = Element::new("svg").with_namespace("svg");
        el.attrs.push(Attribute {
            namespace: Some("xlink".into()),
            key: "title".into(),
            value: "x".into(),
        });

        assert_eq!(el.attr("title"), None);
        assert_eq!(el.shallow_clone().attrs.len(), 1);
        assert!(el.shallow_clone().children.is_empty());
    }

    #[test]
    fn test_render_sequence() {
        assert_eq!(render(&[text("a"), doctype("html"), text("b")]), "a<!DOCTYPE html>b");
    }
}
