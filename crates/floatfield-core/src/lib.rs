//! Core plumbing for Floatfield.
//!
//! This crate provides the small set of foundations the floating-label field
//! widget is built on:
//!
//! - **Signal/Slot System**: Type-safe notifications for widget state changes
//! - **UI Task Queue**: Cross-thread posting of work that must run on the UI thread
//! - **Errors**: The construction-time error taxonomy
//! - **Logging**: `tracing` target names for filtering widget logs
//!
//! # Signal/Slot Example
//!
//! ```
//! use floatfield_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("hello".to_string());
//! text_changed.disconnect(conn_id);
//! ```
//!
//! # UI Queue Example
//!
//! ```
//! use floatfield_core::UiQueue;
//!
//! let queue = UiQueue::<&'static str>::new();
//! let sender = queue.sender();
//!
//! std::thread::spawn(move || {
//!     sender.post("from a worker");
//! })
//! .join()
//! .unwrap();
//!
//! let drained = queue.drain();
//! assert_eq!(drained, vec!["from a worker"]);
//! ```

pub mod dispatch;
mod error;
pub mod logging;
pub mod signal;

pub use dispatch::{UiQueue, UiSender};
pub use error::{FieldError, Result};
pub use signal::{ConnectionId, Signal};
