//! Synthetic tree fixture for native tests
//!
//! A small `Rc`-backed element tree implementing [`TreeNode`], so the
//! detection core can be driven without a rendering engine. Tests build
//! documents with the chainable constructors and mutate styles where a
//! scenario needs them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::{Rect, TreeNode};

struct NodeData {
    tag: String,
    styles: RefCell<HashMap<String, String>>,
    // Direct text content of this node, not including descendants.
    own_text: RefCell<String>,
    rect: RefCell<Rect>,
    parent: RefCell<Weak<NodeData>>,
    children: RefCell<Vec<FixtureNode>>,
}

/// Handle to a fixture element. Clones share the node; equality is
/// node identity.
#[derive(Clone)]
pub struct FixtureNode(Rc<NodeData>);

impl PartialEq for FixtureNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FixtureNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureNode")
            .field("tag", &self.0.tag)
            .field("children", &self.0.children.borrow().len())
            .finish()
    }
}

impl FixtureNode {
    pub fn new(tag: &str) -> Self {
        FixtureNode(Rc::new(NodeData {
            tag: tag.to_string(),
            styles: RefCell::new(HashMap::new()),
            own_text: RefCell::new(String::new()),
            rect: RefCell::new(Rect::default()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    /// Chainable: set a computed style property.
    pub fn with_style(self, prop: &str, value: &str) -> Self {
        self.set_style(prop, value);
        self
    }

    /// Chainable: set this node's direct text content.
    pub fn with_text(self, text: &str) -> Self {
        *self.0.own_text.borrow_mut() = text.to_string();
        self
    }

    /// Chainable: set the bounding rectangle.
    pub fn with_rect(self, rect: Rect) -> Self {
        *self.0.rect.borrow_mut() = rect;
        self
    }

    /// Chainable: append a child element.
    pub fn with_child(self, child: FixtureNode) -> Self {
        self.append(child);
        self
    }

    pub fn set_style(&self, prop: &str, value: &str) {
        self.0
            .styles
            .borrow_mut()
            .insert(prop.to_string(), value.to_string());
    }

    pub fn append(&self, child: FixtureNode) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child);
    }

    /// Child at `index`; panics when out of range (test convenience).
    pub fn child(&self, index: usize) -> FixtureNode {
        self.0.children.borrow()[index].clone()
    }
}

impl TreeNode for FixtureNode {
    fn tag(&self) -> String {
        self.0.tag.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn child_count(&self) -> usize {
        self.0.children.borrow().len()
    }

    fn children_all_elements(&self) -> bool {
        self.0.own_text.borrow().trim().is_empty()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(FixtureNode)
    }

    fn prev_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let siblings = parent.0.children.borrow();
        let index = siblings.iter().position(|s| s == self)?;
        if index == 0 {
            None
        } else {
            Some(siblings[index - 1].clone())
        }
    }

    fn style(&self, prop: &str) -> String {
        self.0
            .styles
            .borrow()
            .get(prop)
            .cloned()
            .unwrap_or_default()
    }

    fn text(&self) -> String {
        let mut out = self.0.own_text.borrow().clone();
        for child in self.0.children.borrow().iter() {
            out.push_str(&child.text());
        }
        out
    }

    fn bounding_rect(&self) -> Rect {
        *self.0.rect.borrow()
    }
}
