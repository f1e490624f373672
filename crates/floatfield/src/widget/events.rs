//! Input lifecycle events forwarded to a field by its host.

use std::ops::Range;

/// An input event delivered to [`FloatingLabelField::handle_event`].
///
/// [`FloatingLabelField::handle_event`]: super::FloatingLabelField::handle_event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The input became the focused element.
    FocusIn,
    /// The input stopped being the focused element.
    FocusOut,
    /// The user typed, deleted or pasted over a grapheme range.
    ReplaceCharacters {
        range: Range<usize>,
        replacement: String,
    },
    /// The confirm/return key was pressed.
    ReturnPressed,
    /// The trailing visibility toggle was tapped.
    VisibilityToggleTapped,
}

/// Editing state, derived from focus and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditingState {
    /// Unfocused and empty; the label rests as the placeholder.
    Idle,
    /// Focused.
    Editing,
    /// Unfocused with content; the label stays floated.
    Filled,
}

/// Label commands posted to the UI queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCommand {
    /// Animate to the floated position.
    Float,
    /// Animate back to the resting position.
    Rest,
}
