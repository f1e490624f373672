//! The floating-label field and its parts.
//!
//! - [`FloatingLabelField`]: the composite field and its editing state machine
//! - [`TextInput`]: the editable text, masking and input hints
//! - [`FloatingLabel`] / [`ErrorLabel`]: the animated placeholder and the inline error
//! - [`VisibilityToggle`]: the trailing eye button of secure fields
//! - [`FieldDelegate`]: the controller contract, held weakly via [`DelegateRef`]

mod delegate;
mod events;
mod field;
mod input;
mod label;
mod toggle;

pub use delegate::{DelegateRef, FieldDelegate};
pub use events::{EditingState, FieldEvent, LabelCommand};
pub use field::{FieldHandle, FloatingLabelField};
pub use input::{ContentHint, KeyboardType, TextInput};
pub use label::{
    ErrorLabel, FloatingLabel, LabelAppearance, LabelPosition, PLACEHOLDER_FADE_IN,
    PLACEHOLDER_FADE_OUT,
};
pub use toggle::{IconName, VisibilityToggle};
