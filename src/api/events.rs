//! Selection-mode presentation and event wiring
//!
//! Owns everything the user sees while selection mode is active: the
//! pointer listeners, the shared preview overlay, the crosshair cursor
//! hint, committed-row outlines and the highlight tint. State
//! transitions themselves live in [`crate::selection`]; this module
//! only drives them from the document's event queue.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::api::channel;
use crate::api::core::{with_engine, Engine};
use crate::api::messages::Notification;
use crate::selection::{row_candidate, CommitOutcome};
use crate::tree::web::WebNode;
use crate::tree::TreeNode;
use crate::wasm_log;

const ACCEPT_BORDER: &str = "2px solid #2196f3";
const ACCEPT_FILL: &str = "rgba(33, 150, 243, 0.15)";
const REJECT_BORDER: &str = "2px solid #f44336";
const REJECT_FILL: &str = "rgba(244, 67, 54, 0.15)";
const COMMIT_OUTLINE: &str = "2px solid #4caf50";
const HIGHLIGHT_TINT: &str = "#fff9c4";

/// How long the overlay shows the rejection colors after a failed click.
const REJECT_FLASH_MS: i32 = 800;
/// How long a highlighted table keeps its tint.
const HIGHLIGHT_MS: i32 = 1500;

struct Listeners {
    pointer_move: Closure<dyn FnMut(MouseEvent)>,
    click: Closure<dyn FnMut(MouseEvent)>,
}

/// Presentation resources tied to the selection session. Created and
/// destroyed strictly with the Enabled state, except committed-row
/// outlines, which survive a commit until an explicit disable.
pub struct Presentation {
    overlay: Option<HtmlElement>,
    listeners: Option<Listeners>,
    // Detached closures parked until the next enable(): the click
    // closure tears itself down on commit, and a Closure must not be
    // dropped while its own invocation is on the stack.
    retired: Vec<Listeners>,
    outlined: Vec<WebNode>,
}

impl Presentation {
    pub fn new() -> Self {
        Presentation {
            overlay: None,
            listeners: None,
            retired: Vec::new(),
            outlined: Vec::new(),
        }
    }

    fn show_overlay(&mut self, document: &Document, candidate: &WebNode) -> Result<(), JsValue> {
        let overlay = match &self.overlay {
            Some(overlay) => overlay.clone(),
            None => {
                let overlay = create_overlay(document)?;
                self.overlay = Some(overlay.clone());
                overlay
            }
        };

        let rect = candidate.bounding_rect();
        let (scroll_x, scroll_y) = scroll_offsets();
        let style = overlay.style();
        style.set_property("left", &format!("{}px", rect.x + scroll_x))?;
        style.set_property("top", &format!("{}px", rect.y + scroll_y))?;
        style.set_property("width", &format!("{}px", rect.width))?;
        style.set_property("height", &format!("{}px", rect.height))?;
        Ok(())
    }

    /// Flash the rejection colors on the overlay, reverting after a
    /// fixed short delay. No overlay yet (click before any pointer
    /// move) means nothing to flash.
    fn flash_rejection(&mut self) {
        let Some(overlay) = &self.overlay else { return };
        let style = overlay.style();
        let _ = style.set_property("border", REJECT_BORDER);
        let _ = style.set_property("background", REJECT_FILL);

        let overlay = overlay.clone();
        let revert = Closure::once_into_js(move || {
            let style = overlay.style();
            let _ = style.set_property("border", ACCEPT_BORDER);
            let _ = style.set_property("background", ACCEPT_FILL);
        });
        set_timeout(&revert, REJECT_FLASH_MS);
    }

    fn remove_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
    }

    fn outline_rows(&mut self, rows: &[WebNode]) {
        for row in rows {
            if let Some(html) = row.element().dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("outline", COMMIT_OUTLINE);
            }
        }
        self.outlined = rows.to_vec();
    }

    fn strip_outlines(&mut self) {
        for row in self.outlined.drain(..) {
            if let Some(html) = row.element().dyn_ref::<HtmlElement>() {
                let _ = html.style().remove_property("outline");
            }
        }
    }
}

/// Enter selection mode: register the pointer listeners (click in the
/// capturing phase), set the cursor hint, and discard the previous
/// committed selection's outlines. A second enable while already
/// enabled is a no-op — one enable, one registration.
pub fn enable(engine: &mut Engine) -> Result<(), JsValue> {
    if engine.session.is_enabled() {
        return Ok(());
    }
    let document = document()?;
    let presentation = &mut engine.presentation;
    // Safe point to drop parked closures: no selection closure of ours
    // is on the stack during a bus message.
    presentation.retired.clear();
    presentation.strip_outlines();

    let pointer_move = Closure::<dyn FnMut(MouseEvent)>::new(on_pointer_move);
    let click = Closure::<dyn FnMut(MouseEvent)>::new(on_click);
    document
        .add_event_listener_with_callback("mousemove", pointer_move.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback_and_bool(
        "click",
        click.as_ref().unchecked_ref(),
        true,
    )?;
    presentation.listeners = Some(Listeners {
        pointer_move,
        click,
    });
    set_body_cursor(&document, Some("crosshair"));
    engine.session.enable();
    wasm_log!("selection mode enabled");
    Ok(())
}

/// Leave selection mode from explicit cancellation: listeners, cursor
/// and overlay go away, and committed-row outlines are stripped (the
/// committed data itself survives). Idempotent — a second disable has
/// nothing registered and detaches nothing.
pub fn disable(engine: &mut Engine) {
    let was_enabled = engine.session.disable();
    teardown(&mut engine.presentation);
    engine.presentation.strip_outlines();
    if was_enabled {
        wasm_log!("selection mode disabled");
    }
}

/// Remove listeners, cursor hint and overlay. Shared by explicit
/// disable and the auto-disable after a commit (which keeps outlines).
fn teardown(presentation: &mut Presentation) {
    if let Ok(document) = document() {
        if let Some(listeners) = presentation.listeners.take() {
            let _ = document.remove_event_listener_with_callback(
                "mousemove",
                listeners.pointer_move.as_ref().unchecked_ref(),
            );
            let _ = document.remove_event_listener_with_callback_and_bool(
                "click",
                listeners.click.as_ref().unchecked_ref(),
                true,
            );
            presentation.retired.push(listeners);
        }
        set_body_cursor(&document, None);
    }
    presentation.remove_overlay();
}

/// Preview only: find the row candidate under the pointer and move the
/// shared overlay over it. No detection runs here — the walk is bounded
/// and the rest is rectangle math, cheap enough for every mousemove.
fn on_pointer_move(event: MouseEvent) {
    with_engine(|engine| {
        if !engine.session.is_enabled() {
            return;
        }
        let Some(target) = event.target().and_then(WebNode::from_event_target) else {
            return;
        };
        let Some(candidate) = row_candidate(&target) else {
            return;
        };
        if let Ok(document) = document() {
            if let Err(err) = engine.presentation.show_overlay(&document, &candidate) {
                wasm_log!("overlay update failed: {:?}", err);
            }
        }
    });
}

/// Commit attempt. The default action is suppressed either way; on
/// success the session auto-disables (outlines stay), on rejection the
/// overlay flashes and the mode stays enabled.
fn on_click(event: MouseEvent) {
    event.prevent_default();
    event.stop_propagation();
    let id = format!("grid-{}", js_sys::Date::now() as u64);
    with_engine(|engine| {
        let Some(target) = event.target().and_then(WebNode::from_event_target) else {
            return;
        };
        match engine.session.commit(&target, id) {
            CommitOutcome::Committed { rows, grid } => {
                engine.presentation.outline_rows(&rows);
                teardown(&mut engine.presentation);
                channel::publish(&Notification::GridSelected { grid });
            }
            CommitOutcome::Rejected => {
                engine.presentation.flash_rejection();
            }
        }
    });
}

/// Scroll a table into view and tint it for a moment so the user can
/// see which list entry it is.
pub fn highlight(element: &Element) {
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let previous = style
        .get_property_value("background-color")
        .unwrap_or_default();
    let _ = style.set_property("background-color", HIGHLIGHT_TINT);

    let html = html.clone();
    let revert = Closure::once_into_js(move || {
        let style = html.style();
        if previous.is_empty() {
            let _ = style.remove_property("background-color");
        } else {
            let _ = style.set_property("background-color", &previous);
        }
    });
    set_timeout(&revert, HIGHLIGHT_MS);
}

fn create_overlay(document: &Document) -> Result<HtmlElement, JsValue> {
    let overlay: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("overlay is not an HtmlElement"))?;
    let style = overlay.style();
    style.set_property("position", "absolute")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "2147483647")?;
    style.set_property("border", ACCEPT_BORDER)?;
    style.set_property("background", ACCEPT_FILL)?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&overlay)?;
    Ok(overlay)
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn scroll_offsets() -> (f64, f64) {
    web_sys::window()
        .map(|window| {
            (
                window.page_x_offset().unwrap_or(0.0),
                window.page_y_offset().unwrap_or(0.0),
            )
        })
        .unwrap_or((0.0, 0.0))
}

fn set_body_cursor(document: &Document, cursor: Option<&str>) {
    if let Some(body) = document.body() {
        let style = body.style();
        match cursor {
            Some(value) => {
                let _ = style.set_property("cursor", value);
            }
            None => {
                let _ = style.remove_property("cursor");
            }
        }
    }
}

fn set_timeout(callback: &JsValue, millis: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis,
        );
    }
}
