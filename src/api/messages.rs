//! Bus payload shapes
//!
//! Request/response pairs for the popup channel and the unsolicited
//! notifications pushed to the popup and the badge collaborator. All
//! payloads are `{ type: string, ...fields }` on the wire.

use serde::{Deserialize, Serialize};

use crate::models::TableMeta;

/// Requests the host UI sends to the engine.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// List the current detections: native tables first, then the
    /// pending ad hoc grid when one was committed.
    GetTables,
    /// Export a native table as CSV.
    ExportTable { id: String },
    /// Export the committed ad hoc grid as CSV.
    ExportGrid { id: String },
    /// Scroll a native table into view and flash a temporary tint.
    HighlightTable { id: String },
    /// Enter pointer-driven selection mode.
    EnableSelectionMode,
    /// Leave selection mode (explicit cancellation).
    DisableSelectionMode,
}

/// `{success, error?}` acknowledgement for action requests.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Ack {
            success: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Ack {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Unsolicited engine → UI/background notifications. `grid_selected`
/// doubles as the popup push and the badge event; the rest drive the
/// per-tab badge indicator only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    GridSelected { grid: TableMeta },
    SelectionModeEnabled,
    SelectionModeDisabled,
    ClearBadge,
}
