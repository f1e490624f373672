//! Style parameters of the floating-label field.

use std::time::Duration;

use crate::color::Color;

/// Everything that controls how the label looks at rest and when floated.
///
/// "Before" values describe the resting placeholder, "after" values the
/// floated label. Defaults come from the layout resource for the configured
/// device class; every field can be overridden on the live widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    /// Label color while resting.
    pub before_color: Color,
    /// Label color while floated.
    pub after_color: Color,
    /// Color of a trailing required marker in the placeholder.
    pub required_color: Color,
    /// Color of the error label text.
    pub error_color: Color,
    /// Label font size while resting.
    pub before_font_size: f32,
    /// Label font size while floated.
    pub after_font_size: f32,
    /// Duration of the float/rest transition.
    pub animation_duration: Duration,
    /// Horizontal shift applied to the label and input when floated.
    pub horizontal_offset: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            before_color: Color::BLACK,
            after_color: Color::BLACK,
            required_color: Color::RED,
            error_color: Color::RED,
            before_font_size: 12.0,
            after_font_size: 10.0,
            animation_duration: Duration::from_millis(300),
            horizontal_offset: 0.0,
        }
    }
}
