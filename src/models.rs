//! Detection result metadata
//!
//! The structures the host UI consumes when it lists what was found on
//! the page. Wire shapes match the popup contract: `kind` serializes as
//! the `type` field, with ad hoc grids tagged `"non-table"`.

use serde::{Deserialize, Serialize};

/// How a detected structure was found.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructureKind {
    /// A genuine `<table>` element found by the scanner.
    #[serde(rename = "table")]
    Native,
    /// A repeated-sibling grid designated through selection mode.
    #[serde(rename = "non-table")]
    AdHoc,
}

/// Metadata describing one detected tabular structure.
///
/// `cols` is the cell count of the structure's first row (0 when there
/// are no rows); later rows of irregular structures are not normalized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableMeta {
    pub id: String,
    pub rows: usize,
    pub cols: usize,
    pub preview: String,
    #[serde(rename = "type")]
    pub kind: StructureKind,
}

/// Preview sampling bounds: first 2 rows x 3 columns, 20 characters per cell.
const PREVIEW_ROWS: usize = 2;
const PREVIEW_COLS: usize = 3;
const PREVIEW_CELL_CHARS: usize = 20;

/// Sentinel shown when the sampled cells are all empty.
pub const EMPTY_PREVIEW: &str = "Empty table";

/// Build the short human-readable sample shown in the structure list.
/// Blank cells are skipped; each sampled cell is trimmed, then truncated
/// to 20 characters.
pub fn preview_of(grid: &[Vec<String>]) -> String {
    let mut cells: Vec<String> = Vec::new();
    for row in grid.iter().take(PREVIEW_ROWS) {
        for cell in row.iter().take(PREVIEW_COLS) {
            let trimmed = cell.trim();
            if !trimmed.is_empty() {
                cells.push(trimmed.chars().take(PREVIEW_CELL_CHARS).collect());
            }
        }
    }
    if cells.is_empty() {
        EMPTY_PREVIEW.to_string()
    } else {
        cells.join(" | ")
    }
}
