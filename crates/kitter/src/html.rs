//! A minimal HTML element tree and writer.
//!
//! Components render into [`Node`]s; [`Node::to_html`] serializes the
//! tree compactly with text and attribute values escaped. This is the
//! library's whole render target; there is no reconciliation and no
//! layout, just markup out.

use std::fmt::Write;

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on write.
    Text(String),
    /// A sequence of sibling nodes with no wrapper element.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Serializes the node to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write(out);
                }
            }
        }
    }
}

/// An HTML element: tag, attributes in insertion order, children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    self_closing: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// An element written as `<tag/>`, for SVG leaves like `path`.
    pub fn self_closing(tag: impl Into<String>) -> Self {
        Self {
            self_closing: true,
            ..Self::new(tag)
        }
    }

    /// Appends an attribute. Attributes are written in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Sets the `class` attribute; an empty class list writes nothing.
    pub fn class(self, classes: &str) -> Self {
        if classes.trim().is_empty() {
            self
        } else {
            self.attr("class", classes.trim())
        }
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Appends a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if self.self_closing && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_element() {
        let node = Element::new("div").class("page").text("hello").into_node();
        assert_eq!(node.to_html(), r#"<div class="page">hello</div>"#);
    }

    #[test]
    fn test_empty_class_writes_no_attribute() {
        let node = Element::new("div").class("").into_node();
        assert_eq!(node.to_html(), "<div></div>");
    }

    #[test]
    fn test_attribute_order_preserved() {
        let node = Element::new("a")
            .attr("href", "#toc")
            .class("link")
            .attr("role", "button")
            .into_node();
        assert_eq!(
            node.to_html(),
            r##"<a href="#toc" class="link" role="button"></a>"##
        );
    }

    #[test]
    fn test_text_escaping() {
        let node = Node::text("a < b & c > d");
        assert_eq!(node.to_html(), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_attr_escaping() {
        let node = Element::new("span").attr("title", r#"say "hi""#).into_node();
        assert_eq!(node.to_html(), r#"<span title="say &quot;hi&quot;"></span>"#);
    }

    #[test]
    fn test_fragment_concatenates() {
        let node = Node::Fragment(vec![
            Element::new("a").attr("id", "top").into_node(),
            Element::new("div").text("body").into_node(),
        ]);
        assert_eq!(node.to_html(), r#"<a id="top"></a><div>body</div>"#);
    }

    #[test]
    fn test_self_closing() {
        let node = Element::self_closing("path").attr("d", "m18 15-6-6-6 6").into_node();
        assert_eq!(node.to_html(), r#"<path d="m18 15-6-6-6 6"/>"#);
    }
}
