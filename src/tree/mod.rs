//! Abstract render-tree access
//!
//! The scanner, detector and selection machine never touch the DOM
//! directly; they read the document through the [`TreeNode`] capability
//! trait. That keeps the whole detection core unit-testable against the
//! synthetic [`fixture`] tree while the [`web`] implementation wires the
//! same code to live `web_sys` elements.

pub mod fixture;
pub mod web;

use serde::{Deserialize, Serialize};

/// Bounding rectangle of a node, in viewport coordinates (CSS pixels).
/// Callers that need document coordinates add the current scroll offsets.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Read access to one element of the document's render tree.
///
/// Implementations are cheap handles (JS object references or `Rc`s);
/// cloning never copies the underlying node. Equality is node identity,
/// not structural equality. Missing data degrades to empty defaults —
/// a malformed tree must never make the detection core fail.
pub trait TreeNode: Clone + PartialEq {
    /// Lower-case tag name ("div", "table", ...).
    fn tag(&self) -> String;

    /// Element children, in document order.
    fn children(&self) -> Vec<Self>;

    /// Number of element children.
    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// True when every child node is an element — no text or comment
    /// content between the children. Whitespace-only text nodes are
    /// formatting artifacts and do not count as content.
    fn children_all_elements(&self) -> bool;

    /// Parent element, if any.
    fn parent(&self) -> Option<Self>;

    /// Previous element sibling, if any.
    fn prev_sibling(&self) -> Option<Self>;

    /// Computed style property (e.g. "display", "font-weight");
    /// empty string when unavailable.
    fn style(&self, prop: &str) -> String;

    /// Rendered text of the subtree, falling back to raw text content;
    /// empty string when unavailable.
    fn text(&self) -> String;

    /// Bounding rectangle in viewport coordinates.
    fn bounding_rect(&self) -> Rect;
}
