// Test the selection state machine lifecycle: enable/disable
// transitions, the bounded row-candidate walk, and commit semantics.

use table_exporter_wasm::selection::{
    grid_text, row_candidate, SelectionSession, MAX_CANDIDATE_WALK,
};
use table_exporter_wasm::tree::fixture::FixtureNode;
use table_exporter_wasm::{CommitOutcome, StructureKind};

/// A row whose cells each hold one `<span>` leaf, so the candidate walk
/// has to climb from the leaf to the row.
fn row(cells: &[&str]) -> FixtureNode {
    let row = FixtureNode::new("div").with_style("display", "flex");
    for cell in cells {
        row.append(
            FixtureNode::new("div").with_child(FixtureNode::new("span").with_text(cell)),
        );
    }
    row
}

fn grid_of(rows: &[&[&str]]) -> FixtureNode {
    let parent = FixtureNode::new("div");
    for r in rows {
        parent.append(row(r));
    }
    parent
}

/// Innermost span of a given row/cell.
fn leaf(parent: &FixtureNode, row: usize, cell: usize) -> FixtureNode {
    parent.child(row).child(cell).child(0)
}

#[test]
fn test_enable_then_disable_round_trip() {
    let mut session: SelectionSession<FixtureNode> = SelectionSession::new();
    assert!(!session.is_enabled());
    assert!(session.enable());
    assert!(session.is_enabled());
    assert!(session.disable());
    assert!(!session.is_enabled());
}

#[test]
fn test_double_enable_and_double_disable_are_noops() {
    let mut session: SelectionSession<FixtureNode> = SelectionSession::new();
    assert!(session.enable());
    assert!(!session.enable(), "second enable must not re-register");
    assert!(session.disable());
    assert!(!session.disable(), "second disable must not re-detach");
}

#[test]
fn test_successful_commit_stores_rows_and_auto_disables() {
    let parent = grid_of(&[&["a", "1"], &["b", "2"], &["c", "3"]]);
    let mut session = SelectionSession::new();
    session.enable();

    let outcome = session.commit(&leaf(&parent, 1, 0), "grid-42".to_string());
    let CommitOutcome::Committed { rows, grid } = outcome else {
        panic!("expected a commit");
    };

    assert_eq!(rows.len(), 3);
    assert!(!session.is_enabled(), "commit must auto-disable");
    assert_eq!(session.committed_rows(), &rows[..]);

    assert_eq!(grid.id, "grid-42");
    assert_eq!(grid.rows, 3);
    assert_eq!(grid.cols, 2);
    assert_eq!(grid.kind, StructureKind::AdHoc);
    assert_eq!(grid.preview, "a | 1 | b | 2");
    assert_eq!(session.grid_meta(), Some(&grid));
}

#[test]
fn test_failed_commit_keeps_the_session_enabled() {
    // One row only: detection cannot find a repeating pattern.
    let parent = grid_of(&[&["lonely", "row"]]);
    parent.append(FixtureNode::new("p").with_text("prose"));
    let mut session = SelectionSession::new();
    session.enable();

    let outcome = session.commit(&leaf(&parent, 0, 0), "grid-1".to_string());
    assert_eq!(outcome, CommitOutcome::Rejected);
    assert!(session.is_enabled(), "rejection must not leave selection mode");
    assert!(session.committed_rows().is_empty());
    assert!(session.grid_meta().is_none());
}

#[test]
fn test_commit_while_disabled_is_rejected() {
    let parent = grid_of(&[&["a", "1"], &["b", "2"]]);
    let mut session = SelectionSession::new();

    let outcome = session.commit(&leaf(&parent, 0, 0), "grid-1".to_string());
    assert_eq!(outcome, CommitOutcome::Rejected);
}

#[test]
fn test_reenable_clears_the_previous_commit() {
    let parent = grid_of(&[&["a", "1"], &["b", "2"]]);
    let mut session = SelectionSession::new();
    session.enable();
    let outcome = session.commit(&leaf(&parent, 0, 0), "grid-1".to_string());
    assert!(matches!(outcome, CommitOutcome::Committed { .. }));

    session.enable();
    assert!(session.committed_rows().is_empty());
    assert!(session.grid_meta().is_none());
}

#[test]
fn test_row_candidate_climbs_to_the_first_multi_child_node() {
    let parent = grid_of(&[&["a", "1"], &["b", "2"]]);
    let target = leaf(&parent, 0, 0);

    // span -> cell (one child) -> row (two element children).
    assert_eq!(row_candidate(&target), Some(parent.child(0)));
}

#[test]
fn test_row_candidate_skips_mixed_content_nodes() {
    // The two-child node has direct text between its children, so the
    // walk passes it by and settles on its parent.
    let mixed = FixtureNode::new("div")
        .with_text("inline text")
        .with_child(FixtureNode::new("span"))
        .with_child(FixtureNode::new("span"));
    let clean = FixtureNode::new("div")
        .with_child(mixed.clone())
        .with_child(FixtureNode::new("aside"));

    assert_eq!(row_candidate(&mixed.child(0)), Some(clean));
}

#[test]
fn test_row_candidate_walk_is_bounded() {
    // A chain deeper than the walk limit, with the only viable row
    // candidate sitting above it.
    let top = FixtureNode::new("div")
        .with_child(FixtureNode::new("span"))
        .with_child(FixtureNode::new("span"));
    let mut cursor = top.child(0);
    for _ in 0..MAX_CANDIDATE_WALK {
        let next = FixtureNode::new("div");
        cursor.append(next.clone());
        cursor = next;
    }

    assert_eq!(row_candidate(&cursor), None);
}

#[test]
fn test_grid_text_reads_direct_children() {
    let parent = grid_of(&[&["a", "1"], &["b", "2"]]);
    let rows = vec![parent.child(0), parent.child(1)];

    assert_eq!(
        grid_text(&rows),
        vec![vec!["a", "1"], vec!["b", "2"]]
    );
}
