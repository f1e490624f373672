//! The text input inside the field.
//!
//! `TextInput` holds the editable string and the presentation hints a
//! platform keyboard would use. It knows nothing about the floating label;
//! the owning field decides when edits are allowed.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::{Rect, Transform};
use crate::text::grapheme_byte_range;

/// Keyboard layout hint for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardType {
    #[default]
    Default,
    Email,
    Number,
    Decimal,
    Phone,
    Url,
}

/// Semantic content hint, used for autofill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentHint {
    #[default]
    None,
    Name,
    Username,
    Email,
    Password,
    NewPassword,
    OneTimeCode,
    Telephone,
}

/// A single-line text input.
#[derive(Debug, Clone)]
pub struct TextInput {
    text: String,
    secure: bool,
    mask_char: char,
    focused: bool,
    keyboard_type: KeyboardType,
    content_hint: ContentHint,
    frame: Rect,
    transform: Transform,
}

impl TextInput {
    /// Create an empty input laid out at `frame`.
    pub fn new(frame: Rect) -> Self {
        Self {
            text: String::new(),
            secure: false,
            mask_char: '•',
            focused: false,
            keyboard_type: KeyboardType::default(),
            content_hint: ContentHint::default(),
            frame,
            transform: Transform::IDENTITY,
        }
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text. Returns `true` if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text length in grapheme clusters.
    pub fn text_length(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Replace the graphemes in `range` with `replacement`.
    ///
    /// The range is clamped to the text. Returns `true` if the text changed.
    pub fn replace_range(&mut self, range: Range<usize>, replacement: &str) -> bool {
        let bytes = grapheme_byte_range(&self.text, range);
        if bytes.is_empty() && replacement.is_empty() {
            return false;
        }
        if self.text[bytes.clone()] == *replacement {
            return false;
        }
        self.text.replace_range(bytes, replacement);
        true
    }

    /// The text as it should be drawn: masked when secure.
    pub fn display_text(&self) -> String {
        if self.secure {
            std::iter::repeat_n(self.mask_char, self.text_length()).collect()
        } else {
            self.text.clone()
        }
    }

    // =========================================================================
    // Secure Entry
    // =========================================================================

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Set masking. Returns `true` if it changed.
    pub fn set_secure(&mut self, secure: bool) -> bool {
        let changed = self.secure != secure;
        self.secure = secure;
        changed
    }

    /// Flip masking and return the new state.
    pub fn toggle_secure(&mut self) -> bool {
        self.secure = !self.secure;
        self.secure
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    // =========================================================================
    // Focus and Hints
    // =========================================================================

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    pub fn content_hint(&self) -> ContentHint {
        self.content_hint
    }

    pub(crate) fn set_hints(&mut self, keyboard_type: KeyboardType, content_hint: ContentHint) {
        self.keyboard_type = keyboard_type;
        self.content_hint = content_hint;
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The laid-out frame, before any transform.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub(crate) fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// The frame with the current transform applied.
    pub fn visual_frame(&self) -> Rect {
        self.transform.apply(self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> TextInput {
        TextInput::new(Rect::new(0.0, 24.0, 320.0, 40.0))
    }

    #[test]
    fn test_input_creation() {
        let input = input();
        assert_eq!(input.text(), "");
        assert!(!input.is_secure());
        assert!(!input.is_focused());
        assert_eq!(input.keyboard_type(), KeyboardType::Default);
        assert!(input.transform().is_identity());
    }

    #[test]
    fn test_replace_range() {
        let mut input = input();
        assert!(input.replace_range(0..0, "helo"));
        assert!(input.replace_range(3..3, "l"));
        assert_eq!(input.text(), "hello");

        assert!(input.replace_range(0..1, "J"));
        assert_eq!(input.text(), "Jello");

        assert!(input.replace_range(1..99, ""));
        assert_eq!(input.text(), "J");

        assert!(!input.replace_range(0..1, "J"));
        assert!(!input.replace_range(5..5, ""));
    }

    #[test]
    fn test_replace_appends_past_end() {
        let mut input = input();
        input.set_text("ab");
        assert!(input.replace_range(10..12, "c"));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_display_text_masks_graphemes() {
        let mut input = input();
        input.set_text("pässwörd");
        assert_eq!(input.display_text(), "pässwörd");

        input.set_secure(true);
        assert_eq!(input.display_text(), "••••••••");
    }

    #[test]
    fn test_toggle_secure() {
        let mut input = input();
        assert!(input.toggle_secure());
        assert!(!input.toggle_secure());
        assert!(!input.set_secure(false));
        assert!(input.set_secure(true));
    }
}
