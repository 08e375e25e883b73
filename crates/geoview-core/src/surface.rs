// crates/geoview-core/src/surface.rs

use crate::dom::{Element, Node};
use crate::error::{GeoViewError, Result};

/// Where rendered output goes.
///
/// Both components only ever append subtrees under an element looked up by
/// id, or swap the children of such an element (the status line). That is
/// the whole contract a host has to provide.
pub trait Surface {
    /// Appends `node` as the last child of the element with `parent_id`.
    fn append_child(&mut self, parent_id: &str, node: Node) -> Result<()>;

    /// Replaces every child of the element with `id`.
    fn replace_children(&mut self, id: &str, nodes: Vec<Node>) -> Result<()>;
}

/// In-memory surface: a single root container element.
#[derive(Debug, Clone)]
pub struct Page {
    root: Element,
}

impl Page {
    /// A page whose root is `<div id="{container_id}">`.
    pub fn new(container_id: &str) -> Self {
        Self {
            root: Element::new("div").with_id(container_id),
        }
    }

    /// A page with no container at all; every lookup fails. Useful to
    /// exercise the missing-container precondition.
    pub fn empty() -> Self {
        Self {
            root: Element::new("body"),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.root
            .find_by_id_mut(id)
            .ok_or_else(|| GeoViewError::MissingContainer(id.to_string()))
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Wraps the container in a minimal standalone HTML document.
    pub fn to_document(&self, title: &str) -> String {
        let head = Element::new("head")
            .with_child(Element::new("meta").with_attr("charset", "utf-8"))
            .with_child(Element::new("title").with_text(title));
        let body = Element::new("body").with_child(self.root.clone());
        let html = Element::new("html")
            .with_attr("lang", "en")
            .with_child(head)
            .with_child(body);
        format!("<!DOCTYPE html>\n{}\n", html.to_html())
    }
}

impl Surface for Page {
    fn append_child(&mut self, parent_id: &str, node: Node) -> Result<()> {
        self.get_mut(parent_id)?.append(node);
        Ok(())
    }

    fn replace_children(&mut self, id: &str, nodes: Vec<Node>) -> Result<()> {
        self.get_mut(id)?.replace_children(nodes);
        Ok(())
    }
}
