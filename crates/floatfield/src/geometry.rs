//! Geometry primitives used by the field's layout and transforms.

use serde::Deserialize;

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }
}

/// Insets applied to the content of a rectangle (an icon within a button).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// Insets with only a leading (left) component.
    #[inline]
    pub const fn leading(left: f32) -> Self {
        Self {
            top: 0.0,
            left,
            bottom: 0.0,
            right: 0.0,
        }
    }
}

/// A translation applied on top of an element's laid-out frame.
///
/// The field only ever translates its label and input, so this is the
/// translation part of an affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self { tx: 0.0, ty: 0.0 };

    /// A pure translation.
    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self { tx, ty }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Linear interpolation between two transforms.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            tx: self.tx + (other.tx - self.tx) * t,
            ty: self.ty + (other.ty - self.ty) * t,
        }
    }

    /// Apply this transform to a frame.
    #[inline]
    pub fn apply(&self, frame: Rect) -> Rect {
        Rect::new(frame.x + self.tx, frame.y + self.ty, frame.width, frame.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_max_x() {
        let rect = Rect::new(8.0, 10.0, 100.0, 40.0);
        assert_eq!(rect.max_x(), 108.0);
    }

    #[test]
    fn test_transform_lerp() {
        let from = Transform::IDENTITY;
        let to = Transform::translate(10.0, -20.0);
        assert_eq!(from.lerp(to, 0.5), Transform::translate(5.0, -10.0));
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn test_transform_apply() {
        let frame = Rect::new(0.0, 20.0, 200.0, 40.0);
        let moved = Transform::translate(4.0, -10.0).apply(frame);
        assert_eq!(moved, Rect::new(4.0, 10.0, 200.0, 40.0));
        assert!(Transform::IDENTITY.is_identity());
    }
}
