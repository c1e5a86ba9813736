//! Table Exporter WASM Module
//!
//! Per-tab content engine that locates tabular data in the rendered
//! document — genuine `<table>` markup or visually-tabular structures built
//! from repeated sibling containers — and exports it as CSV.
//!
//! The detection core (`scan`, `detect`, `selection`, `export`, `csv`) is
//! generic over the [`tree::TreeNode`] capability trait and is exercised
//! natively against a synthetic fixture tree; the [`api`] module is the
//! JavaScript-facing surface wired to the live DOM.

pub mod api;
pub mod csv;
pub mod detect;
pub mod error;
pub mod export;
pub mod models;
pub mod scan;
pub mod selection;
pub mod tree;

// Re-export commonly used types
pub use error::Error;
pub use models::{StructureKind, TableMeta};
pub use selection::{CommitOutcome, SelectionSession};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Table exporter engine initialized");
}
