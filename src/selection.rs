//! Pointer-driven selection state machine
//!
//! The pure state core: Disabled -> Enabled -> Disabled, with a commit
//! running the structural grid detector on click. One session per loaded
//! document. The API layer owns the listeners, overlay and outlines and
//! drives this record from its event closures; nothing here touches
//! presentation, which keeps the whole lifecycle testable against the
//! fixture tree.

use crate::detect::detect_grid;
use crate::models::{preview_of, StructureKind, TableMeta};
use crate::tree::TreeNode;

/// Ancestor levels examined when resolving the row candidate under the
/// pointer; bounds the walk on degenerate trees.
pub const MAX_CANDIDATE_WALK: usize = 10;

/// Result of a click while selection mode is enabled.
#[derive(Clone, Debug, PartialEq)]
pub enum CommitOutcome<N> {
    /// Detection succeeded: the session stored the rows and left
    /// selection mode.
    Committed { rows: Vec<N>, grid: TableMeta },
    /// No candidate, or fewer than two structurally matching rows.
    /// The session stays enabled; the caller shows the rejection cue.
    Rejected,
}

/// Per-document selection state. Lifecycle equals the document's:
/// discarded on navigation, never persisted.
pub struct SelectionSession<N: TreeNode> {
    enabled: bool,
    committed: Vec<N>,
    grid: Option<TableMeta>,
}

impl<N: TreeNode> SelectionSession<N> {
    pub fn new() -> Self {
        SelectionSession {
            enabled: false,
            committed: Vec::new(),
            grid: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Rows of the committed ad hoc grid, header first if one was
    /// inferred. Empty until a commit, and cleared by re-enabling.
    pub fn committed_rows(&self) -> &[N] {
        &self.committed
    }

    /// Metadata of the committed ad hoc grid, if any.
    pub fn grid_meta(&self) -> Option<&TableMeta> {
        self.grid.as_ref()
    }

    /// Disabled -> Enabled. Discards any previously committed selection.
    /// Returns false (and changes nothing) when already enabled, so the
    /// caller never double-registers listeners.
    pub fn enable(&mut self) -> bool {
        if self.enabled {
            return false;
        }
        self.enabled = true;
        self.committed.clear();
        self.grid = None;
        true
    }

    /// Enabled -> Disabled, from explicit cancellation or a commit.
    /// Committed data survives; tearing presentation down is the
    /// caller's job. Returns false when already disabled (idempotent).
    pub fn disable(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.enabled = false;
        true
    }

    /// Click handling: resolve the row candidate under `target`, run
    /// grid detection, and commit on success. `id` is the ad hoc token
    /// the caller derived at commit time (`grid-<millis>` in the live
    /// engine; fixed strings in tests).
    pub fn commit(&mut self, target: &N, id: String) -> CommitOutcome<N> {
        if !self.enabled {
            return CommitOutcome::Rejected;
        }
        let Some(candidate) = row_candidate(target) else {
            log::debug!("selection rejected: no row candidate above target");
            return CommitOutcome::Rejected;
        };
        let rows = detect_grid(&candidate);
        if rows.len() < 2 {
            log::debug!("selection rejected: {} matching row(s)", rows.len());
            return CommitOutcome::Rejected;
        }

        let cells = grid_text(&rows);
        let grid = TableMeta {
            id,
            rows: rows.len(),
            cols: rows[0].child_count(),
            preview: preview_of(&cells),
            kind: StructureKind::AdHoc,
        };
        log::info!("grid committed: {} rows x {} cols", grid.rows, grid.cols);

        self.committed = rows.clone();
        self.grid = Some(grid.clone());
        self.enabled = false;
        CommitOutcome::Committed { rows, grid }
    }
}

impl<N: TreeNode> Default for SelectionSession<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk upward from the event target looking for the first node that
/// could be a grid row: more than one child, all of them elements.
pub fn row_candidate<N: TreeNode>(target: &N) -> Option<N> {
    let mut node = target.clone();
    for _ in 0..MAX_CANDIDATE_WALK {
        if node.child_count() > 1 && node.children_all_elements() {
            return Some(node);
        }
        node = node.parent()?;
    }
    None
}

/// Cell text of an ad hoc grid: one row per node, one cell per direct
/// child.
pub fn grid_text<N: TreeNode>(rows: &[N]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.children().iter().map(TreeNode::text).collect())
        .collect()
}
