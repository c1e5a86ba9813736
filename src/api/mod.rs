//! JavaScript-facing WASM API
//!
//! The hosting content script registers this module at document load and
//! forwards every bus message into [`core::handle_message`]. Everything
//! presentational — selection listeners, the preview overlay, committed
//! outlines, highlight tints, file downloads — and the push/badge channel
//! lives here, layered over the pure detection core.
//!
//! # Module Structure
//!
//! - `helpers`: shared serialization and console-logging utilities
//! - `messages`: bus request/response/notification payload shapes
//! - `core`: message dispatch and the per-document engine state
//! - `events`: selection-mode listeners, overlay and outline presentation
//! - `channel`: fire-and-forget push channel to the popup and badge
//! - `download`: CSV file emission via the Blob/anchor idiom

pub mod channel;
pub mod core;
pub mod download;
pub mod events;
pub mod helpers;
pub mod messages;

// Re-export the public surface the content script binds to
pub use self::core::handle_message;
pub use messages::{Ack, Notification, Request};
