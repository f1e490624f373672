//! Animation and transition support for the floating-label field.
//!
//! This module provides the easing curve and clock-driven transitions. The
//! field uses them for two independent concerns: the label's move between
//! its resting and floated positions, and the fade of the placeholder text.
//!
//! # Example
//!
//! ```ignore
//! use std::time::{Duration, Instant};
//! use floatfield::animation::{Transition, TransitionKind};
//!
//! let mut size = Transition::new(12.0_f32, 10.0, TransitionKind::FlipFromRight, Duration::from_millis(300));
//! let state = size.update(Instant::now());
//! ```

mod easing;
mod transition;

pub use easing::ease_in_out;
pub use transition::{Animatable, Transition, TransitionKind, TransitionState};
