//! Text field with an animated floating label.
//!
//! The FloatingLabelField combines a text input, a label that doubles as the
//! placeholder, an inline error label and a password-visibility toggle.
//! When the empty field gains focus the label shrinks and floats above the
//! input; when it loses focus while still empty the label returns.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use std::time::Instant;
//! use floatfield::prelude::*;
//!
//! let mut field = FloatingLabelField::new(LayoutConfig::default())?;
//! field.set_placeholder("Email*");
//! field.configure(KeyboardType::Email, ContentHint::Email, Some(DelegateRef::new(&controller)));
//!
//! field.editing_finished.connect(|_| println!("done editing"));
//!
//! // In the host's input handling:
//! field.handle_event(FieldEvent::FocusIn);
//!
//! // Once per frame:
//! field.tick(Instant::now());
//! ```
//!
//! # Threading
//!
//! The field is UI-thread-affine. Label animations are posted to a UI queue
//! and only take effect when the owning thread calls
//! [`process_pending`](FloatingLabelField::process_pending) or
//! [`tick`](FloatingLabelField::tick). A [`FieldHandle`] can post the same
//! animations from any thread.

use std::ops::Range;
use std::rc::Rc;
use std::time::{Duration, Instant};

use floatfield_core::logging::targets;
use floatfield_core::{Result, Signal, UiQueue, UiSender};

use crate::animation::{Transition, TransitionKind, TransitionState};
use crate::color::Color;
use crate::geometry::Transform;
use crate::resource::{LayoutBundle, LayoutConfig, LayoutResource};
use crate::style::FieldStyle;
use crate::text::decorate_required_marker;

use super::delegate::{DelegateRef, FieldDelegate};
use super::events::{EditingState, FieldEvent, LabelCommand};
use super::input::{ContentHint, KeyboardType, TextInput};
use super::label::{
    ErrorLabel, FloatingLabel, LabelAppearance, LabelPosition, PlaceholderFade,
};
use super::toggle::VisibilityToggle;

/// Placeholder shown until one is set.
const DEFAULT_PLACEHOLDER: &str = "label";

/// A thread-safe handle for requesting label animations.
///
/// Posting returns immediately; the request takes effect when the field's
/// owner next drains its UI queue.
#[derive(Clone)]
pub struct FieldHandle {
    sender: UiSender<LabelCommand>,
}

impl FieldHandle {
    /// Request the floated label.
    pub fn show_label(&self) {
        self.sender.post(LabelCommand::Float);
    }

    /// Request the resting label.
    pub fn hide_label(&self) {
        self.sender.post(LabelCommand::Rest);
    }
}

static_assertions::assert_impl_all!(FieldHandle: Send, Sync);

/// A text input with an animated floating placeholder label.
///
/// # Signals
///
/// - `editing_started`: Emitted when editing begins (focus gained or synthesized)
/// - `editing_finished`: Emitted when editing ends (focus lost or synthesized)
/// - `text_changed`: Emitted when the input text changes
/// - `secure_input_changed`: Emitted when masking is switched on or off
/// - `label_position_changed`: Emitted when the label's target position changes
pub struct FloatingLabelField {
    layout: LayoutResource,
    config: LayoutConfig,
    style: FieldStyle,

    placeholder: String,
    input: TextInput,
    label: FloatingLabel,
    error_label: ErrorLabel,
    toggle: VisibilityToggle,

    delegate: Option<DelegateRef>,

    position: LabelPosition,
    label_transition: Option<Transition<LabelAppearance>>,
    placeholder_fade: Option<PlaceholderFade>,

    queue: UiQueue<LabelCommand>,
    sender: UiSender<LabelCommand>,

    // Signals
    /// Signal emitted when editing begins.
    pub editing_started: Signal<()>,

    /// Signal emitted when editing ends.
    pub editing_finished: Signal<()>,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,

    /// Signal emitted when masking changes.
    pub secure_input_changed: Signal<bool>,

    /// Signal emitted when the label's target position changes.
    pub label_position_changed: Signal<LabelPosition>,
}

impl FloatingLabelField {
    /// Create a field from the bundled layout named in `config`.
    ///
    /// Fails if the layout resource is missing or incomplete; the field
    /// cannot work without its visual elements.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        let layout = LayoutBundle::embedded().load(&config.resource)?;
        Ok(Self::from_layout(layout, config))
    }

    /// Create a field from an already loaded layout.
    pub fn from_layout(layout: LayoutResource, config: LayoutConfig) -> Self {
        let style = layout.style_for(config.device_class);
        let input = TextInput::new(layout.input_frame());
        let resting = resting_appearance(&style);
        let mut label = FloatingLabel::new(layout.label_frame(), resting);
        label.set_text(Some(decorate_required_marker(
            DEFAULT_PLACEHOLDER,
            style.required_color,
        )));
        let error_label = ErrorLabel::new(layout.error_frame(), style.error_color);
        let toggle = VisibilityToggle::new(
            layout.field_size(),
            layout.toggle_metrics(config.device_class),
        );
        let queue = UiQueue::new();
        let sender = queue.sender();

        tracing::debug!(
            target: targets::FIELD,
            layout = layout.name(),
            device_class = ?config.device_class,
            "floating label field created"
        );

        Self {
            layout,
            config,
            style,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            input,
            label,
            error_label,
            toggle,
            delegate: None,
            position: LabelPosition::Resting,
            label_transition: None,
            placeholder_fade: None,
            queue,
            sender,
            editing_started: Signal::new(),
            editing_finished: Signal::new(),
            text_changed: Signal::new(),
            secure_input_changed: Signal::new(),
            label_position_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the input hints and install a delegate.
    ///
    /// Subsequent input events are forwarded to the delegate.
    pub fn configure(
        &mut self,
        keyboard_type: KeyboardType,
        content_hint: ContentHint,
        delegate: Option<DelegateRef>,
    ) {
        self.input.set_hints(keyboard_type, content_hint);
        self.delegate = delegate;
    }

    /// Replace the delegate.
    pub fn set_delegate(&mut self, delegate: Option<DelegateRef>) {
        self.delegate = delegate;
    }

    /// Check whether a live delegate is installed.
    pub fn has_delegate(&self) -> bool {
        self.delegate.as_ref().is_some_and(DelegateRef::is_alive)
    }

    fn live_delegate(&self) -> Option<Rc<dyn FieldDelegate>> {
        self.delegate.as_ref().and_then(DelegateRef::upgrade)
    }

    /// The layout the field was built from.
    pub fn layout(&self) -> &LayoutResource {
        &self.layout
    }

    /// The injected layout configuration.
    pub fn layout_config(&self) -> &LayoutConfig {
        &self.config
    }

    /// A handle for requesting label animations from any thread.
    pub fn handle(&self) -> FieldHandle {
        FieldHandle {
            sender: self.sender.clone(),
        }
    }

    // =========================================================================
    // Text and Placeholder
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Set the text. No validation is performed and the label is not moved.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.input.set_text(text) {
            self.text_changed.emit(self.input.text().to_string());
        }
    }

    /// Get the placeholder string.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder, coloring a trailing `*` as a required marker.
    ///
    /// The new text is shown at full opacity; a running placeholder fade is
    /// cancelled.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.placeholder_fade = None;
        self.label.set_text(Some(self.decorated_placeholder()));
        self.label.set_text_opacity(1.0);
    }

    fn decorated_placeholder(&self) -> crate::text::StyledText {
        decorate_required_marker(&self.placeholder, self.style.required_color)
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The current style parameters.
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Label color while resting.
    pub fn set_before_color(&mut self, color: Color) {
        self.style.before_color = color;
        self.restyle(LabelPosition::Resting);
    }

    /// Label color while floated.
    pub fn set_after_color(&mut self, color: Color) {
        self.style.after_color = color;
        self.restyle(LabelPosition::Floated);
    }

    /// Label font size while resting.
    pub fn set_before_font_size(&mut self, size: f32) {
        self.style.before_font_size = size;
        self.restyle(LabelPosition::Resting);
    }

    /// Label font size while floated.
    pub fn set_after_font_size(&mut self, size: f32) {
        self.style.after_font_size = size;
        self.restyle(LabelPosition::Floated);
    }

    /// Duration of the next float/rest transitions.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.style.animation_duration = duration;
    }

    /// Horizontal shift of the floated label and input.
    pub fn set_horizontal_offset(&mut self, offset: f32) {
        self.style.horizontal_offset = offset;
        self.restyle(LabelPosition::Floated);
    }

    /// Color of a trailing required marker.
    pub fn set_required_color(&mut self, color: Color) {
        self.style.required_color = color;
        if self.label.text().is_some() {
            self.label.set_text(Some(self.decorated_placeholder()));
        }
    }

    /// Whether the input is masked.
    pub fn is_secure_input(&self) -> bool {
        self.input.is_secure()
    }

    /// Switch masking. Turning it on also shows the visibility toggle.
    pub fn set_secure_input(&mut self, secure: bool) {
        if secure {
            self.toggle.set_visible(true);
        }
        let changed = self.input.set_secure(secure);
        self.toggle.sync_icon(secure);
        if changed {
            self.secure_input_changed.emit(secure);
        }
    }

    /// Re-apply the style for `position` if the label is there.
    ///
    /// A settled label is updated in place; one still moving towards
    /// `position` is retargeted from wherever it is now.
    fn restyle(&mut self, position: LabelPosition) {
        if self.position != position {
            return;
        }
        let target = self.appearance_for(position);
        match self.label_transition.take() {
            Some(transition) => {
                self.label_transition = Some(Transition::new(
                    *self.label.appearance(),
                    target,
                    transition.kind(),
                    self.style.animation_duration,
                ));
            }
            None => self.apply_appearance(target),
        }
    }

    // =========================================================================
    // Error Message
    // =========================================================================

    /// Reveal the error label with `message`. It stays until hidden.
    pub fn show_error_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: targets::FIELD, %message, "showing error message");
        self.error_label.show(message);
    }

    /// Hide the error label.
    pub fn hide_error_message(&mut self) {
        self.error_label.hide();
    }

    /// The visible error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_label.message()
    }

    // =========================================================================
    // Elements
    // =========================================================================

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn label(&self) -> &FloatingLabel {
        &self.label
    }

    pub fn error_label(&self) -> &ErrorLabel {
        &self.error_label
    }

    pub fn visibility_toggle(&self) -> &VisibilityToggle {
        &self.toggle
    }

    /// Mutable access to the toggle, for connecting to `icon_changed`.
    pub fn visibility_toggle_mut(&mut self) -> &mut VisibilityToggle {
        &mut self.toggle
    }

    // =========================================================================
    // Label Animation
    // =========================================================================

    /// The position the label is at or moving towards.
    pub fn label_position(&self) -> LabelPosition {
        self.position
    }

    /// Editing state derived from focus and content.
    pub fn editing_state(&self) -> EditingState {
        if self.input.is_focused() {
            EditingState::Editing
        } else if self.input.is_empty() {
            EditingState::Idle
        } else {
            EditingState::Filled
        }
    }

    /// Check if a label transition or placeholder fade is in flight.
    pub fn is_animating(&self) -> bool {
        self.label_transition.is_some() || self.placeholder_fade.is_some()
    }

    /// Horizontal flip scale of the in-flight label transition (1.0 when idle).
    pub fn label_flip_scale(&self) -> f32 {
        self.label_transition
            .as_ref()
            .map_or(1.0, Transition::flip_scale)
    }

    /// Float the label above the input.
    ///
    /// Posted to the UI queue; takes effect on the next drain.
    pub fn show_label(&self) {
        self.sender.post(LabelCommand::Float);
    }

    /// Return the label to its resting position.
    ///
    /// Posted to the UI queue; takes effect on the next drain.
    pub fn hide_label(&self) {
        self.sender.post(LabelCommand::Rest);
    }

    /// Fade the label text out over a fixed second, then clear it.
    pub fn hide_placeholder(&mut self) {
        self.placeholder_fade = Some(PlaceholderFade::out_from(self.label.text_opacity()));
    }

    /// Restore the placeholder text and fade it in over a fixed 0.7 seconds.
    pub fn show_placeholder(&mut self) {
        self.label.set_text(Some(self.decorated_placeholder()));
        self.placeholder_fade = Some(PlaceholderFade::in_from(self.label.text_opacity()));
    }

    /// Drain the UI queue, starting any requested label transitions.
    ///
    /// Returns the number of commands processed.
    pub fn process_pending(&mut self) -> usize {
        let commands = self.queue.drain();
        let count = commands.len();
        for command in commands {
            self.apply_label_command(command);
        }
        count
    }

    /// Drain the UI queue and advance all animations to `now`.
    ///
    /// Call once per frame. Returns `true` while anything is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.process_pending();

        if let Some(transition) = self.label_transition.as_mut() {
            match transition.update(now) {
                TransitionState::Running { value, .. } => self.apply_appearance(value),
                TransitionState::Finished(value) => {
                    self.apply_appearance(value);
                    self.label_transition = None;
                    tracing::trace!(target: targets::ANIMATION, position = ?self.position, "label transition finished");
                }
            }
        }

        if let Some(mut fade) = self.placeholder_fade.take()
            && self.label.advance_fade(&mut fade, now)
        {
            self.placeholder_fade = Some(fade);
        }

        self.is_animating()
    }

    /// Jump every in-flight animation to its end state.
    pub fn finish_animations(&mut self) {
        self.process_pending();
        if let Some(transition) = self.label_transition.take() {
            self.apply_appearance(*transition.target());
        }
        if let Some(mut fade) = self.placeholder_fade.take() {
            let now = Instant::now();
            let end = now + fade.duration();
            self.label.advance_fade(&mut fade, now);
            self.label.advance_fade(&mut fade, end);
        }
    }

    fn apply_label_command(&mut self, command: LabelCommand) {
        let (position, kind) = match command {
            LabelCommand::Float => (LabelPosition::Floated, TransitionKind::FlipFromRight),
            LabelCommand::Rest => (LabelPosition::Resting, TransitionKind::CurveEaseInOut),
        };

        tracing::debug!(target: targets::ANIMATION, ?position, duration = ?self.style.animation_duration, "starting label transition");

        let changed = self.position != position;
        self.position = position;
        self.label_transition = Some(Transition::new(
            *self.label.appearance(),
            self.appearance_for(position),
            kind,
            self.style.animation_duration,
        ));

        if changed {
            self.label_position_changed.emit(position);
        }
    }

    fn appearance_for(&self, position: LabelPosition) -> LabelAppearance {
        match position {
            LabelPosition::Resting => resting_appearance(&self.style),
            LabelPosition::Floated => {
                let shift = self.input.frame().height / 2.0;
                let dx = self.style.horizontal_offset;
                LabelAppearance {
                    font_size: self.style.after_font_size,
                    color: self.style.after_color,
                    alpha: 1.0,
                    label_transform: Transform::translate(dx, -shift),
                    input_transform: Transform::translate(dx, shift),
                }
            }
        }
    }

    fn apply_appearance(&mut self, appearance: LabelAppearance) {
        self.input.set_transform(appearance.input_transform);
        self.label.set_appearance(appearance);
    }

    // =========================================================================
    // Input Lifecycle
    // =========================================================================

    /// Dispatch a host input event. Returns whether it was accepted/handled.
    pub fn handle_event(&mut self, event: FieldEvent) -> bool {
        match event {
            FieldEvent::FocusIn => {
                self.focus();
                true
            }
            FieldEvent::FocusOut => {
                self.blur();
                true
            }
            FieldEvent::ReplaceCharacters { range, replacement } => {
                self.replace_characters(range, &replacement)
            }
            FieldEvent::ReturnPressed => self.press_return(),
            FieldEvent::VisibilityToggleTapped => {
                self.tap_visibility_toggle();
                true
            }
        }
    }

    /// The input gained focus. Ignored if it already has it.
    pub fn focus(&mut self) {
        if self.input.is_focused() {
            return;
        }
        self.input.set_focused(true);
        self.begin_editing();
    }

    /// The input lost focus. Ignored if it did not have it.
    pub fn blur(&mut self) {
        if !self.input.is_focused() {
            return;
        }
        self.input.set_focused(false);
        self.end_editing();
    }

    /// The return key was pressed: always resigns focus and reports handled.
    pub fn press_return(&mut self) -> bool {
        self.blur();
        true
    }

    /// Offer a keystroke to the delegate and apply it if accepted.
    ///
    /// Without a live delegate every change is accepted.
    pub fn replace_characters(&mut self, range: Range<usize>, replacement: &str) -> bool {
        let accepted = match self.live_delegate() {
            Some(delegate) => delegate.should_change_characters(self, range.clone(), replacement),
            None => true,
        };

        if !accepted {
            tracing::trace!(target: targets::FIELD, ?range, "change rejected by delegate");
            return false;
        }

        if self.input.replace_range(range, replacement) {
            self.text_changed.emit(self.input.text().to_string());
        }
        true
    }

    /// The visibility toggle was tapped: flip masking and swap the icon.
    pub fn tap_visibility_toggle(&mut self) {
        let secure = self.input.toggle_secure();
        self.toggle.sync_icon(secure);
        self.secure_input_changed.emit(secure);
    }

    /// Synthesize a begin/end editing pair against the current input.
    ///
    /// Used to re-sync the label without user interaction: an empty field
    /// ends up resting and unfocused.
    pub fn material_text_field_end_editing(&mut self) {
        self.begin_editing();
        self.end_editing();
    }

    fn begin_editing(&mut self) {
        if self.input.is_empty() {
            self.show_label();
        }
        tracing::debug!(target: targets::FIELD, state = ?self.editing_state(), "editing began");

        if let Some(delegate) = self.live_delegate() {
            delegate.did_begin_editing(self);
        }
        self.editing_started.emit(());
    }

    fn end_editing(&mut self) {
        if self.input.is_empty() {
            self.reset();
        }
        tracing::debug!(target: targets::FIELD, state = ?self.editing_state(), "editing ended");

        if let Some(delegate) = self.live_delegate() {
            delegate.did_end_editing(self);
        }
        self.editing_finished.emit(());
    }

    /// Return the label and drop focus, without another end-editing round.
    fn reset(&mut self) {
        self.hide_label();
        self.input.set_focused(false);
    }
}

fn resting_appearance(style: &FieldStyle) -> LabelAppearance {
    LabelAppearance {
        font_size: style.before_font_size,
        color: style.before_color,
        alpha: 1.0,
        label_transform: Transform::IDENTITY,
        input_transform: Transform::IDENTITY,
    }
}
