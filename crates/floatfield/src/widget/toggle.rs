//! Trailing password-visibility toggle.

use floatfield_core::Signal;

use crate::color::Color;
use crate::geometry::{EdgeInsets, Rect, Size};
use crate::resource::ToggleMetrics;

/// Name of an icon asset, resolved by the host's asset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconName(&'static str);

impl IconName {
    /// Shown while the text is masked.
    pub const CLOSED_EYE: Self = Self("Closed Eye Icon");
    /// Shown while the text is visible.
    pub const OPEN_EYE: Self = Self("Open Eye Icon");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The icon matching a masking state.
    pub fn for_secure(secure: bool) -> Self {
        if secure { Self::CLOSED_EYE } else { Self::OPEN_EYE }
    }
}

/// The eye button shown at the trailing edge of secure fields.
///
/// Sizing comes from [`ToggleMetrics`] and only affects the frame and icon
/// inset, never behavior.
pub struct VisibilityToggle {
    icon: IconName,
    visible: bool,
    frame: Rect,
    image_insets: EdgeInsets,
    tint: Color,

    /// Signal emitted when the displayed icon changes.
    pub icon_changed: Signal<IconName>,
}

impl VisibilityToggle {
    /// Lay out a hidden toggle for a field of `field_size`.
    pub(crate) fn new(field_size: Size, metrics: ToggleMetrics) -> Self {
        let size = metrics.size;
        Self {
            icon: IconName::for_secure(false),
            visible: false,
            frame: Rect::new(
                field_size.width - size - metrics.trailing_margin,
                0.0,
                size,
                size,
            ),
            image_insets: EdgeInsets::leading(-(size / 2.0)),
            tint: Color::BLACK,
            icon_changed: Signal::new(),
        }
    }

    pub fn icon(&self) -> IconName {
        self.icon
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn image_insets(&self) -> EdgeInsets {
        self.image_insets
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Show the icon for a masking state, emitting `icon_changed` on change.
    pub(crate) fn sync_icon(&mut self, secure: bool) {
        let icon = IconName::for_secure(secure);
        if self.icon != icon {
            self.icon = icon;
            self.icon_changed.emit(icon);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const COMPACT: ToggleMetrics = ToggleMetrics {
        size: 25.0,
        trailing_margin: 10.0,
    };

    #[test]
    fn test_compact_layout() {
        let toggle = VisibilityToggle::new(Size::new(320.0, 64.0), COMPACT);
        assert_eq!(toggle.frame(), Rect::new(285.0, 0.0, 25.0, 25.0));
        assert_eq!(toggle.image_insets().left, -12.5);
        assert!(!toggle.is_visible());
        assert_eq!(toggle.icon(), IconName::OPEN_EYE);
    }

    #[test]
    fn test_large_layout() {
        let metrics = ToggleMetrics {
            size: 90.0,
            trailing_margin: 10.0,
        };
        let toggle = VisibilityToggle::new(Size::new(600.0, 120.0), metrics);
        assert_eq!(toggle.frame(), Rect::new(500.0, 0.0, 90.0, 90.0));
        assert_eq!(toggle.image_insets().left, -45.0);
    }

    #[test]
    fn test_sync_icon_emits_on_change_only() {
        let mut toggle = VisibilityToggle::new(Size::new(320.0, 64.0), COMPACT);
        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = changes.clone();
        toggle.icon_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        toggle.sync_icon(false);
        assert_eq!(changes.load(Ordering::SeqCst), 0);

        toggle.sync_icon(true);
        assert_eq!(toggle.icon(), IconName::CLOSED_EYE);
        toggle.sync_icon(true);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(IconName::CLOSED_EYE.as_str(), "Closed Eye Icon");
        assert_eq!(IconName::OPEN_EYE.as_str(), "Open Eye Icon");
    }
}
