//! Export pipeline
//!
//! Resolves a structure id to its current cell grid and produces the
//! CSV artifact plus a download-safe filename. Actual file emission is
//! the API layer's job; everything here is pure and fixture-testable.

use crate::csv::grid_to_csv;
use crate::error::{Error, Result};
use crate::scan::{parse_table_id, table_grid, visible_tables};
use crate::selection::{grid_text, SelectionSession};
use crate::tree::TreeNode;

/// A ready-to-emit CSV artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvFile {
    pub name: String,
    pub content: String,
}

/// Characters Windows and the downloads API refuse in filenames.
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace filesystem-unsafe characters so every naming scheme produces
/// portable filenames.
pub fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Alternate naming scheme: the document's hostname plus a creation
/// timestamp, for deployments that export the same page repeatedly.
pub fn hostname_file_stem(hostname: &str, timestamp_millis: u64) -> String {
    sanitize_file_stem(&format!("{hostname}-{timestamp_millis}"))
}

/// Resolve a native table id against the *current* visible-table list
/// and build its CSV, named `table-<position>.csv` with the table's
/// 1-based position. Ids are positional (see [`visible_tables`]); a
/// stale or malformed id surfaces as [`Error::StructureNotFound`].
pub fn export_table<N: TreeNode>(root: &N, id: &str) -> Result<CsvFile> {
    let index = parse_table_id(id).ok_or_else(|| Error::StructureNotFound(id.to_string()))?;
    let tables = visible_tables(root);
    let table = tables
        .get(index)
        .ok_or_else(|| Error::StructureNotFound(id.to_string()))?;
    Ok(CsvFile {
        name: format!("table-{}.csv", index + 1),
        content: grid_to_csv(&table_grid(table)),
    })
}

/// Export the committed ad hoc grid, named after its id. Fails with
/// [`Error::NoSelection`] when the session holds no committed rows
/// (nothing selected yet, or selection mode was re-entered).
pub fn export_grid<N: TreeNode>(session: &SelectionSession<N>, id: &str) -> Result<CsvFile> {
    if session.committed_rows().is_empty() {
        return Err(Error::NoSelection);
    }
    Ok(CsvFile {
        name: format!("{}.csv", sanitize_file_stem(id)),
        content: grid_to_csv(&grid_text(session.committed_rows())),
    })
}
