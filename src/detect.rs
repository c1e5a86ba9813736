//! Structural grid detection
//!
//! Decides whether a node and its siblings constitute a logical
//! row/column grid. Markup for grid-like UI (card lists, flex and CSS
//! grid layouts, custom components) rarely carries table semantics, but
//! visually tabular UIs are almost without exception built from
//! structurally repeated sibling nodes — so row equivalence is tested
//! with a cheap structural signature instead of any layout math.

use crate::tree::TreeNode;

/// Composite key for row-to-row structural equivalence: the node's own
/// tag, its children's tags in order, and its computed display.
pub fn signature<N: TreeNode>(node: &N) -> String {
    let child_tags: Vec<String> = node.children().iter().map(TreeNode::tag).collect();
    format!(
        "{}:{}:{}",
        node.tag(),
        child_tags.join(","),
        node.style("display")
    )
}

/// Infer the full row set around `candidate`.
///
/// Returns the structurally matching sibling rows in document order,
/// with an inferred header row first when one is found, or an empty
/// vector when the candidate does not look like a repeating row.
pub fn detect_grid<N: TreeNode>(candidate: &N) -> Vec<N> {
    let Some(parent) = candidate.parent() else {
        return Vec::new();
    };
    let target_children = candidate.child_count();
    let target_sig = signature(candidate);

    let mut rows: Vec<N> = parent
        .children()
        .into_iter()
        .filter(|sibling| {
            sibling.child_count() == target_children && signature(sibling) == target_sig
        })
        .collect();

    // A lone match is indistinguishable from incidental markup reuse;
    // two repeats is the minimum evidence of a row pattern.
    if rows.len() < 2 {
        return Vec::new();
    }

    if let Some(header) = infer_header(&rows[0], &target_sig, target_children) {
        if !rows.contains(&header) {
            rows.insert(0, header);
        }
    }

    rows
}

/// At most one header row is prepended. Two heuristics, in order:
/// the immediate previous sibling of the first matched row, then a
/// separately-laid-out header inside the parent's previous sibling
/// (e.g. a fixed header strip above a scrolling row list).
fn infer_header<N: TreeNode>(first_row: &N, target_sig: &str, target_children: usize) -> Option<N> {
    if let Some(prev) = first_row.prev_sibling() {
        if prev.child_count() == target_children
            && (signature(&prev) == target_sig
                || is_bold(&prev)
                || prev.style("background-color") != first_row.style("background-color"))
        {
            return Some(prev);
        }
    }

    let container = first_row.parent()?.prev_sibling()?;
    container
        .children()
        .into_iter()
        .find(|child| child.child_count() == target_children && signature(child) == target_sig)
}

/// Computed font-weight resolves to a number in real engines; 600 is
/// the conventional semibold cutoff. Keyword values are accepted for
/// trees that report them unresolved.
fn is_bold<N: TreeNode>(node: &N) -> bool {
    let weight = node.style("font-weight");
    match weight.as_str() {
        "bold" | "bolder" => true,
        value => value.parse::<f32>().map(|n| n >= 600.0).unwrap_or(false),
    }
}
