// Test the export pipeline: id re-resolution against the live visible
// list, CSV content, file naming and the typed failures.

use table_exporter_wasm::export::{
    export_grid, export_table, hostname_file_stem, sanitize_file_stem,
};
use table_exporter_wasm::selection::SelectionSession;
use table_exporter_wasm::tree::fixture::FixtureNode;
use table_exporter_wasm::{CommitOutcome, Error};

fn table(rows: &[&[&str]]) -> FixtureNode {
    let table = FixtureNode::new("table");
    for row in rows {
        let tr = FixtureNode::new("tr");
        for cell in *row {
            tr.append(FixtureNode::new("td").with_text(cell));
        }
        table.append(tr);
    }
    table
}

fn body_with(children: Vec<FixtureNode>) -> FixtureNode {
    let body = FixtureNode::new("body");
    for child in children {
        body.append(child);
    }
    FixtureNode::new("html").with_child(body)
}

#[test]
fn test_export_table_resolves_and_names_by_position() {
    let root = body_with(vec![
        table(&[&["first"]]),
        table(&[&["A", "B"], &["1", "2"]]),
    ]);

    let file = export_table(&root, "table-1").expect("second table resolves");
    assert_eq!(file.name, "table-2.csv");
    assert_eq!(file.content, "\u{feff}A,B\r\n1,2");
}

#[test]
fn test_export_table_escapes_cell_content() {
    let root = body_with(vec![table(&[
        &["Name", "Quote"],
        &["John, Jr.", "He said \"Hello\""],
    ])]);

    let file = export_table(&root, "table-0").unwrap();
    assert_eq!(
        file.content,
        "\u{feff}Name,Quote\r\n\"John, Jr.\",\"He said \"\"Hello\"\"\""
    );
}

#[test]
fn test_export_table_skips_hidden_tables_when_resolving() {
    let root = body_with(vec![
        table(&[&["hidden"]]).with_style("display", "none"),
        table(&[&["visible"]]),
    ]);

    // Index 0 of the *visible* list is the second DOM table.
    let file = export_table(&root, "table-0").unwrap();
    assert_eq!(file.content, "\u{feff}visible");
}

#[test]
fn test_export_table_out_of_range_is_a_typed_failure() {
    let root = body_with(vec![table(&[&["only"]])]);

    let err = export_table(&root, "table-9").unwrap_err();
    assert_eq!(err, Error::StructureNotFound("table-9".to_string()));
    assert_eq!(err.to_string(), "Table not found: table-9");
}

#[test]
fn test_export_table_rejects_malformed_ids() {
    let root = body_with(vec![table(&[&["only"]])]);

    for id in ["table-x", "table--1", "grid-0", ""] {
        assert!(
            matches!(export_table(&root, id), Err(Error::StructureNotFound(_))),
            "id {id:?} must not resolve"
        );
    }
}

#[test]
fn test_export_grid_without_selection_fails() {
    let session: SelectionSession<FixtureNode> = SelectionSession::new();

    let err = export_grid(&session, "grid-1").unwrap_err();
    assert_eq!(err, Error::NoSelection);
    assert_eq!(err.to_string(), "No grid selected");
}

#[test]
fn test_export_grid_serializes_the_committed_rows() {
    // Two matching rows of two cells each.
    let parent = FixtureNode::new("div");
    for cells in [["a", "1"], ["b", "2"]] {
        let row = FixtureNode::new("div").with_style("display", "flex");
        for cell in cells {
            row.append(FixtureNode::new("span").with_text(cell));
        }
        parent.append(row);
    }

    let mut session = SelectionSession::new();
    session.enable();
    let outcome = session.commit(&parent.child(0).child(0), "grid-1700000000000".to_string());
    assert!(matches!(outcome, CommitOutcome::Committed { .. }));

    let file = export_grid(&session, "grid-1700000000000").unwrap();
    assert_eq!(file.name, "grid-1700000000000.csv");
    assert_eq!(file.content, "\u{feff}a,1\r\nb,2");
}

#[test]
fn test_sanitize_replaces_every_unsafe_character() {
    assert_eq!(
        sanitize_file_stem("a<b>c:d\"e/f\\g|h?i*j"),
        "a_b_c_d_e_f_g_h_i_j"
    );
    assert_eq!(sanitize_file_stem("already-safe_stem.1"), "already-safe_stem.1");
}

#[test]
fn test_hostname_stem_carries_the_timestamp() {
    assert_eq!(
        hostname_file_stem("data.example.com", 1700000000000),
        "data.example.com-1700000000000"
    );
    // A hostile hostname cannot smuggle path separators into the name.
    assert_eq!(
        hostname_file_stem("evil/host", 7),
        "evil_host-7"
    );
}
