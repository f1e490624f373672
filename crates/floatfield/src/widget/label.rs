//! The floating label and the error label.

use std::time::Duration;

use crate::animation::{Animatable, Transition, TransitionKind, TransitionState};
use crate::color::Color;
use crate::geometry::{Rect, Transform};
use crate::text::StyledText;

/// Fixed duration of the placeholder fade-out.
pub const PLACEHOLDER_FADE_OUT: Duration = Duration::from_millis(1000);

/// Fixed duration of the placeholder fade-in.
pub const PLACEHOLDER_FADE_IN: Duration = Duration::from_millis(700);

/// Where the floating label sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelPosition {
    /// Inside the input, acting as the placeholder.
    #[default]
    Resting,
    /// Shrunk and moved above the input.
    Floated,
}

/// Everything the float/rest transition animates.
///
/// The input moves together with the label, so its transform is part of the
/// same appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAppearance {
    pub font_size: f32,
    pub color: Color,
    pub alpha: f32,
    pub label_transform: Transform,
    pub input_transform: Transform,
}

impl Animatable for LabelAppearance {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        Self {
            font_size: self.font_size.interpolate(&target.font_size, t),
            color: self.color.lerp(target.color, t),
            alpha: self.alpha.interpolate(&target.alpha, t),
            label_transform: self.label_transform.lerp(target.label_transform, t),
            input_transform: self.input_transform.lerp(target.input_transform, t),
        }
    }
}

/// An in-flight fade of the placeholder text.
#[derive(Debug, Clone)]
pub(crate) struct PlaceholderFade {
    transition: Transition<f32>,
    clears_text: bool,
}

impl PlaceholderFade {
    pub(crate) fn out_from(opacity: f32) -> Self {
        Self {
            transition: Transition::new(
                opacity,
                0.0,
                TransitionKind::CurveEaseInOut,
                PLACEHOLDER_FADE_OUT,
            ),
            clears_text: true,
        }
    }

    pub(crate) fn in_from(opacity: f32) -> Self {
        Self {
            transition: Transition::new(
                opacity,
                1.0,
                TransitionKind::CurveEaseInOut,
                PLACEHOLDER_FADE_IN,
            ),
            clears_text: false,
        }
    }

    pub(crate) fn duration(&self) -> Duration {
        self.transition.duration()
    }
}

/// The floating label.
#[derive(Debug, Clone)]
pub struct FloatingLabel {
    text: Option<StyledText>,
    appearance: LabelAppearance,
    text_opacity: f32,
    frame: Rect,
}

impl FloatingLabel {
    pub(crate) fn new(frame: Rect, appearance: LabelAppearance) -> Self {
        Self {
            text: None,
            appearance,
            text_opacity: 1.0,
            frame,
        }
    }

    /// The displayed text, or `None` once the placeholder has faded out.
    pub fn text(&self) -> Option<&StyledText> {
        self.text.as_ref()
    }

    pub(crate) fn set_text(&mut self, text: Option<StyledText>) {
        self.text = text;
    }

    /// The currently applied appearance (interpolated mid-transition).
    pub fn appearance(&self) -> &LabelAppearance {
        &self.appearance
    }

    pub(crate) fn set_appearance(&mut self, appearance: LabelAppearance) {
        self.appearance = appearance;
    }

    pub fn font_size(&self) -> f32 {
        self.appearance.font_size
    }

    pub fn color(&self) -> Color {
        self.appearance.color
    }

    pub fn transform(&self) -> Transform {
        self.appearance.label_transform
    }

    /// Opacity of the text itself, driven by the placeholder fades.
    pub fn text_opacity(&self) -> f32 {
        self.text_opacity
    }

    pub(crate) fn set_text_opacity(&mut self, opacity: f32) {
        self.text_opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The frame with the current transform applied.
    pub fn visual_frame(&self) -> Rect {
        self.appearance.label_transform.apply(self.frame)
    }

    /// Advance a placeholder fade. Returns `true` while it is still running.
    pub(crate) fn advance_fade(&mut self, fade: &mut PlaceholderFade, now: std::time::Instant) -> bool {
        match fade.transition.update(now) {
            TransitionState::Running { value, .. } => {
                self.text_opacity = value;
                true
            }
            TransitionState::Finished(value) => {
                self.text_opacity = value;
                if fade.clears_text {
                    self.text = None;
                }
                false
            }
        }
    }
}

/// The inline error label under the input. Hidden until a message is shown.
#[derive(Debug, Clone)]
pub struct ErrorLabel {
    message: Option<String>,
    color: Color,
    frame: Rect,
}

impl ErrorLabel {
    pub(crate) fn new(frame: Rect, color: Color) -> Self {
        Self {
            message: None,
            color,
            frame,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.message.is_none()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub(crate) fn hide(&mut self) {
        self.message = None;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn resting() -> LabelAppearance {
        LabelAppearance {
            font_size: 15.0,
            color: Color::BLACK,
            alpha: 1.0,
            label_transform: Transform::IDENTITY,
            input_transform: Transform::IDENTITY,
        }
    }

    #[test]
    fn test_appearance_interpolation() {
        let floated = LabelAppearance {
            font_size: 10.0,
            color: Color::WHITE,
            alpha: 1.0,
            label_transform: Transform::translate(0.0, -20.0),
            input_transform: Transform::translate(0.0, 20.0),
        };

        let mid = resting().interpolate(&floated, 0.5);
        assert_eq!(mid.font_size, 12.5);
        assert_eq!(mid.label_transform, Transform::translate(0.0, -10.0));
        assert_eq!(mid.input_transform, Transform::translate(0.0, 10.0));
        assert_eq!(mid.color.g, 0.5);
    }

    #[test]
    fn test_fade_out_clears_text_when_done() {
        let t0 = Instant::now();
        let mut label = FloatingLabel::new(Rect::default(), resting());
        label.set_text(Some(StyledText::plain("Email")));

        let mut fade = PlaceholderFade::out_from(1.0);
        assert_eq!(fade.duration(), PLACEHOLDER_FADE_OUT);
        assert!(label.advance_fade(&mut fade, t0));
        assert!(label.advance_fade(&mut fade, t0 + Duration::from_millis(500)));
        assert!(label.text().is_some());

        assert!(!label.advance_fade(&mut fade, t0 + Duration::from_millis(1000)));
        assert!(label.text().is_none());
        assert_eq!(label.text_opacity(), 0.0);
    }

    #[test]
    fn test_fade_in_keeps_text() {
        let t0 = Instant::now();
        let mut label = FloatingLabel::new(Rect::default(), resting());
        label.set_text(Some(StyledText::plain("Email")));

        let mut fade = PlaceholderFade::in_from(0.0);
        assert_eq!(fade.duration(), PLACEHOLDER_FADE_IN);
        label.advance_fade(&mut fade, t0);
        assert!(!label.advance_fade(&mut fade, t0 + PLACEHOLDER_FADE_IN));
        assert_eq!(label.text_opacity(), 1.0);
        assert!(label.text().is_some());
    }

    #[test]
    fn test_error_label_visibility() {
        let mut error = ErrorLabel::new(Rect::default(), Color::RED);
        assert!(error.is_hidden());

        error.show("Required");
        assert_eq!(error.message(), Some("Required"));
        assert!(!error.is_hidden());

        error.hide();
        assert!(error.is_hidden());
        assert_eq!(error.message(), None);
    }
}
