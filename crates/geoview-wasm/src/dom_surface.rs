// crates/geoview-wasm/src/dom_surface.rs

use geoview_core::{GeoViewError, Node, Result, Surface};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// [`Surface`] backed by the live document. Ids are resolved on every call,
/// so nodes appended earlier can be targeted later (status, content).
pub struct DomSurface {
    document: Document,
}

fn js_err(value: JsValue) -> GeoViewError {
    GeoViewError::Surface(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn lookup(&self, id: &str) -> Result<web_sys::Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| GeoViewError::MissingContainer(id.to_string()))
    }

    /// Materialises a model node as real DOM nodes. Text always goes through
    /// text nodes, never `innerHTML`.
    fn build(&self, node: &Node) -> Result<web_sys::Node> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(model) => {
                let el = self.document.create_element(model.tag()).map_err(js_err)?;
                for (name, value) in model.attrs() {
                    el.set_attribute(name, value).map_err(js_err)?;
                }
                for child in model.children() {
                    el.append_child(&self.build(child)?).map_err(js_err)?;
                }
                Ok(el.into())
            }
        }
    }
}

impl Surface for DomSurface {
    fn append_child(&mut self, parent_id: &str, node: Node) -> Result<()> {
        let parent = self.lookup(parent_id)?;
        parent.append_child(&self.build(&node)?).map_err(js_err)?;
        Ok(())
    }

    fn replace_children(&mut self, id: &str, nodes: Vec<Node>) -> Result<()> {
        let el = self.lookup(id)?;
        el.set_text_content(None);
        for node in &nodes {
            el.append_child(&self.build(node)?).map_err(js_err)?;
        }
        Ok(())
    }
}
