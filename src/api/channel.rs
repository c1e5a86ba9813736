//! Fire-and-forget push channel
//!
//! Unsolicited engine → UI/background notifications go out through
//! `runtime.sendMessage`. Delivery is best-effort: no popup listening
//! is the normal case, so rejections are swallowed after a debug log
//! and `get_tables` remains the source of truth for detections.

use wasm_bindgen::prelude::*;

use crate::api::helpers::log_error;
use crate::api::messages::Notification;
use crate::wasm_log;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime"], js_name = sendMessage)]
    fn runtime_send_message(message: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

thread_local! {
    // One long-lived rejection handler; sendMessage rejects whenever no
    // listener is present, which is not an error for us.
    static SWALLOW: Closure<dyn FnMut(JsValue)> = Closure::new(|reason: JsValue| {
        crate::wasm_log!("push dropped: {:?}", reason);
    });
}

/// Publish a notification without a delivery guarantee.
pub fn publish(note: &Notification) {
    let value = match serde_wasm_bindgen::to_value(note) {
        Ok(value) => value,
        Err(err) => {
            log_error(&format!("Failed to serialize notification: {}", err));
            return;
        }
    };
    match runtime_send_message(&value) {
        Ok(promise) => SWALLOW.with(|handler| {
            let _ = promise.catch(handler);
        }),
        // No extension runtime at all (plain page, test harness): same
        // as no listener.
        Err(err) => wasm_log!("push channel unreachable: {:?}", err),
    }
}
