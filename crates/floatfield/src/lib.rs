//! Floatfield - a text field with an animated floating label.
//!
//! The field is headless: it owns the state of its input, label, error label
//! and visibility toggle, and exposes the geometry and styling a host needs
//! to draw them. Hosts forward input events, call
//! [`tick`](widget::FloatingLabelField::tick) once per frame and render.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Instant;
//! use floatfield::prelude::*;
//!
//! fn main() -> floatfield::Result<()> {
//!     let mut field = FloatingLabelField::new(LayoutConfig::default())?;
//!     field.set_placeholder("Password*");
//!     field.set_secure_input(true);
//!
//!     field.handle_event(FieldEvent::FocusIn);
//!     while field.tick(Instant::now()) {}
//!     Ok(())
//! }
//! ```

pub use floatfield_core::*;

pub mod animation;
pub mod color;
pub mod geometry;
pub mod resource;
pub mod style;
pub mod text;
pub mod widget;

/// Commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::resource::{DeviceClass, LayoutConfig};
    pub use crate::style::FieldStyle;
    pub use crate::widget::{
        ContentHint, DelegateRef, EditingState, FieldDelegate, FieldEvent, FieldHandle,
        FloatingLabelField, KeyboardType, LabelPosition,
    };
    pub use floatfield_core::{Result, Signal};
}
