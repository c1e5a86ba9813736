//! Message dispatch and per-document engine state
//!
//! One engine instance lives in each loaded document. The content
//! script forwards every bus message into [`handle_message`]; handlers
//! answer with the serde shapes from [`super::messages`], and every
//! failure is folded into `{success: false, error}` rather than thrown
//! across the boundary.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::api::channel;
use crate::api::download;
use crate::api::events::{self, Presentation};
use crate::api::helpers::{deserialize, serialize};
use crate::api::messages::{Ack, Notification, Request};
use crate::export;
use crate::models::TableMeta;
use crate::scan;
use crate::selection::SelectionSession;
use crate::tree::web::WebNode;
use crate::{wasm_info, wasm_warn};

thread_local! {
    // Engine state for this document. WASM runs on the document's single
    // event queue, so interior mutability is all the locking needed; the
    // state dies with the document on navigation.
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::new());
}

pub(crate) struct Engine {
    pub session: SelectionSession<WebNode>,
    pub presentation: Presentation,
}

impl Engine {
    fn new() -> Self {
        Engine {
            session: SelectionSession::new(),
            presentation: Presentation::new(),
        }
    }
}

/// Run `f` with the engine borrowed mutably. Handlers and event
/// closures all come through here; none of them nest.
pub(crate) fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// Entry point the content script forwards every bus message into.
///
/// A payload that does not parse as a known request is the only hard
/// error; everything downstream answers through its response shape.
#[wasm_bindgen(js_name = handleMessage)]
pub fn handle_message(message: JsValue) -> Result<JsValue, JsValue> {
    let request: Request = deserialize(message, "Malformed bus message")?;
    match request {
        Request::GetTables => serialize(&get_tables(), "get_tables response"),
        Request::ExportTable { id } => serialize(&export_table(&id), "export_table response"),
        Request::ExportGrid { id } => serialize(&export_grid(&id), "export_grid response"),
        Request::HighlightTable { id } => {
            serialize(&highlight_table(&id), "highlight_table response")
        }
        Request::EnableSelectionMode => {
            serialize(&enable_selection_mode(), "enable_selection_mode response")
        }
        Request::DisableSelectionMode => {
            serialize(&disable_selection_mode(), "disable_selection_mode response")
        }
    }
}

fn get_tables() -> Vec<TableMeta> {
    let mut structures = match WebNode::document_root() {
        Some(root) => scan::scan_tables(&root),
        None => Vec::new(),
    };
    with_engine(|engine| {
        if let Some(grid) = engine.session.grid_meta() {
            structures.push(grid.clone());
        }
    });
    wasm_info!("get_tables: {} structure(s)", structures.len());
    structures
}

fn export_table(id: &str) -> Ack {
    let Some(root) = WebNode::document_root() else {
        return Ack::fail("Document unavailable");
    };
    match export::export_table(&root, id).and_then(|file| download::emit(&file)) {
        Ok(()) => {
            wasm_info!("exported {}", id);
            Ack::ok()
        }
        Err(err) => {
            wasm_warn!("export_table {} failed: {}", id, err);
            Ack::fail(err.to_string())
        }
    }
}

fn export_grid(id: &str) -> Ack {
    let result = with_engine(|engine| export::export_grid(&engine.session, id));
    match result.and_then(|file| download::emit(&file)) {
        Ok(()) => {
            wasm_info!("exported {}", id);
            Ack::ok()
        }
        Err(err) => {
            wasm_warn!("export_grid {} failed: {}", id, err);
            Ack::fail(err.to_string())
        }
    }
}

fn highlight_table(id: &str) -> Ack {
    let Some(root) = WebNode::document_root() else {
        return Ack::fail("Document unavailable");
    };
    match scan::table_by_id(&root, id) {
        Some(table) => {
            events::highlight(table.element());
            Ack::ok()
        }
        None => {
            wasm_warn!("highlight_table: {} does not resolve", id);
            Ack::fail(format!("Table not found: {id}"))
        }
    }
}

fn enable_selection_mode() -> Ack {
    let result = with_engine(events::enable);
    match result {
        Ok(()) => {
            channel::publish(&Notification::SelectionModeEnabled);
            Ack::ok()
        }
        Err(err) => Ack::fail(
            err.as_string()
                .unwrap_or_else(|| "Failed to enable selection mode".to_string()),
        ),
    }
}

fn disable_selection_mode() -> Ack {
    with_engine(events::disable);
    channel::publish(&Notification::SelectionModeDisabled);
    Ack::ok()
}
