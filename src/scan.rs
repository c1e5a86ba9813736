//! Native table discovery
//!
//! Enumerates genuine `<table>` elements in document order, filters the
//! ones the page actually renders, and extracts their cell grids in the
//! form the CSV serializer expects.

use crate::models::{preview_of, StructureKind, TableMeta};
use crate::tree::TreeNode;

/// Visibility predicate shared by scan and export-time id resolution.
/// Only the table's own computed style is consulted: a table inside a
/// hidden ancestor still counts as visible. Known limitation, kept so
/// scan and export agree on the same list.
pub fn is_visible<N: TreeNode>(node: &N) -> bool {
    node.style("display") != "none" && node.style("visibility") != "hidden"
}

/// All visible tables under `root`, in document order.
///
/// Native structure ids are positions in this list, so it must be
/// rebuilt with the same predicate at export time; if the document
/// mutated in between, an id may resolve to a different table or fall
/// out of range. Preserved behavior, not content-addressed.
pub fn visible_tables<N: TreeNode>(root: &N) -> Vec<N> {
    let mut tables = Vec::new();
    collect_tables(root, &mut tables);
    tables.retain(is_visible);
    tables
}

fn collect_tables<N: TreeNode>(node: &N, out: &mut Vec<N>) {
    if node.tag() == "table" {
        out.push(node.clone());
    }
    for child in node.children() {
        collect_tables(&child, out);
    }
}

/// Parse a native id (`table-<index>`) back to its position in the
/// visible-table list.
pub fn parse_table_id(id: &str) -> Option<usize> {
    id.strip_prefix("table-").and_then(|s| s.parse().ok())
}

/// Re-resolve a native id against the current document.
pub fn table_by_id<N: TreeNode>(root: &N, id: &str) -> Option<N> {
    let index = parse_table_id(id)?;
    visible_tables(root).into_iter().nth(index)
}

/// Rows of a table: every `tr` descendant in document order, covering
/// `thead`/`tbody`/`tfoot` sections the way the platform's `rows`
/// collection does. Rows of nested tables are not included.
pub fn table_rows<N: TreeNode>(table: &N) -> Vec<N> {
    let mut rows = Vec::new();
    collect_rows(table, &mut rows);
    rows
}

fn collect_rows<N: TreeNode>(node: &N, out: &mut Vec<N>) {
    for child in node.children() {
        match child.tag().as_str() {
            "tr" => out.push(child),
            "table" => {}
            _ => collect_rows(&child, out),
        }
    }
}

/// Cell text of one table, row-major. Cells are `td`/`th` children;
/// irregular row lengths are preserved as-is.
pub fn table_grid<N: TreeNode>(table: &N) -> Vec<Vec<String>> {
    table_rows(table)
        .iter()
        .map(|row| {
            row.children()
                .iter()
                .filter(|cell| matches!(cell.tag().as_str(), "td" | "th"))
                .map(|cell| cell.text())
                .collect()
        })
        .collect()
}

/// Scan the document for visible native tables and describe each one.
pub fn scan_tables<N: TreeNode>(root: &N) -> Vec<TableMeta> {
    visible_tables(root)
        .iter()
        .enumerate()
        .map(|(index, table)| {
            let grid = table_grid(table);
            TableMeta {
                id: format!("table-{index}"),
                rows: grid.len(),
                cols: grid.first().map(Vec::len).unwrap_or(0),
                preview: preview_of(&grid),
                kind: StructureKind::Native,
            }
        })
        .collect()
}
