// crates/geoview-core/src/dom.rs

//! # Output model
//!
//! A small, owned element tree standing in for the browser DOM. Renderers
//! build [`Element`] values; a [`Surface`](crate::surface::Surface) decides
//! where they end up (an in-memory page, or real DOM nodes in the wasm host).

use html_escaper::HtmlEscaper;
use std::fmt::{self, Write};

/// Text or attribute value, escaped on display.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(HtmlEscaper(f), "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Concatenated text of this node and all descendants (like `textContent`).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                for c in &e.children {
                    c.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        match self {
            Node::Text(t) => write!(out, "{}", Escaped(t)),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

/// An element: tag name, attributes in insertion order, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /* ----------------------------------------------------------------------
       Builders
    ---------------------------------------------------------------------- */

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_style(self, style: impl Into<String>) -> Self {
        self.with_attr("style", style)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /* ----------------------------------------------------------------------
       Accessors / mutation
    ---------------------------------------------------------------------- */

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Sets (or replaces) an attribute, keeping its original position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn text_content(&self) -> String {
        Node::Element(self.clone()).text_content()
    }

    /// Depth-first search for a descendant (or self) carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            Node::Element(e) => e.find_by_id(id),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            Node::Element(e) => e.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// All descendants (and self) with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        if self.tag == tag {
            out.push(self);
        }
        for c in &self.children {
            if let Node::Element(e) = c {
                e.find_all(tag, out);
            }
        }
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.find_all(tag, &mut out);
        out
    }

    /* ----------------------------------------------------------------------
       Serialisation
    ---------------------------------------------------------------------- */

    /// Serialises the subtree to HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (k, v) in &self.attrs {
            write!(out, " {}=\"{}\"", k, Escaped(v))?;
        }
        out.push('>');
        for c in &self.children {
            c.write_html(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_attributes_in_order_and_escapes_text() {
        let el = Element::new("td")
            .with_style("padding:6px")
            .with_attr("colspan", "5")
            .with_text("<b>Tom & Jerry</b>");
        let html = el.to_html();
        assert!(html.starts_with("<td style=\"padding:6px\" colspan=\"5\">"));
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(html.ends_with("</td>"));
    }

    #[test]
    fn escapes_attribute_values() {
        let html = Element::new("div").with_attr("title", "a \"b\" <c>").to_html();
        assert_eq!(html, "<div title=\"a &quot;b&quot; &lt;c&gt;\"></div>");
    }

    #[test]
    fn find_by_id_reaches_nested_elements() {
        let mut root = Element::new("div").with_id("mydiv").with_child(
            Element::new("section")
                .with_id("geojson-section")
                .with_child(Element::new("div").with_id("geojson-content")),
        );
        assert!(root.find_by_id("geojson-content").is_some());
        root.find_by_id_mut("geojson-content")
            .unwrap()
            .append(Node::text("hello"));
        assert_eq!(root.text_content(), "hello");
        assert!(root.find_by_id("nope").is_none());
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("div").with_id("a").with_style("x");
        el.set_attr("id", "b");
        assert_eq!(el.attrs()[0], ("id".to_string(), "b".to_string()));
        assert_eq!(el.attrs().len(), 2);
    }
}
