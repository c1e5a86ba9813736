//! Typed engine failures
//!
//! Every failure here is recovered at the bus boundary: handlers answer
//! `{success: false, error}` instead of letting a fault cross into the
//! requesting UI. Display strings are the user-facing messages.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The id does not resolve in the current scan of the document —
    /// malformed, or the visible-table set changed since the scan.
    #[error("Table not found: {0}")]
    StructureNotFound(String),

    /// A grid export was requested before any selection was committed.
    #[error("No grid selected")]
    NoSelection,

    /// The file emission path failed in the hosting page.
    #[error("Download failed: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, Error>;
