//! Live-DOM implementation of the tree capability trait
//!
//! Wraps `web_sys::Element`. All reads go through the computed style and
//! the element APIs the page itself sees; failures (detached nodes,
//! missing styles) degrade to empty defaults rather than erroring.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use super::{Rect, TreeNode};

/// Handle to a live DOM element. Equality is JS object identity.
#[derive(Clone, Debug, PartialEq)]
pub struct WebNode(Element);

impl WebNode {
    pub fn new(element: Element) -> Self {
        WebNode(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    /// The document's root element, when a window and document exist.
    pub fn document_root() -> Option<Self> {
        web_sys::window()?
            .document()?
            .document_element()
            .map(WebNode)
    }

    /// Wrap an event target, when it is an element.
    pub fn from_event_target(target: web_sys::EventTarget) -> Option<Self> {
        target.dyn_into::<Element>().ok().map(WebNode)
    }
}

impl TreeNode for WebNode {
    fn tag(&self) -> String {
        self.0.tag_name().to_lowercase()
    }

    fn children(&self) -> Vec<Self> {
        let collection = self.0.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(WebNode)
            .collect()
    }

    fn child_count(&self) -> usize {
        self.0.child_element_count() as usize
    }

    fn children_all_elements(&self) -> bool {
        let nodes = self.0.child_nodes();
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            match node.node_type() {
                Node::ELEMENT_NODE => {}
                Node::TEXT_NODE => {
                    let text = node.text_content().unwrap_or_default();
                    if !text.trim().is_empty() {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        true
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(WebNode)
    }

    fn prev_sibling(&self) -> Option<Self> {
        self.0.previous_element_sibling().map(WebNode)
    }

    fn style(&self, prop: &str) -> String {
        web_sys::window()
            .and_then(|window| window.get_computed_style(&self.0).ok().flatten())
            .and_then(|style| style.get_property_value(prop).ok())
            .unwrap_or_default()
    }

    fn text(&self) -> String {
        // Rendered text first: it reflects what the user actually sees
        // (hidden content excluded, CSS-generated line breaks included).
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            let text = html.inner_text();
            if !text.is_empty() {
                return text;
            }
        }
        self.0.text_content().unwrap_or_default()
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            x: rect.left(),
            y: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}
