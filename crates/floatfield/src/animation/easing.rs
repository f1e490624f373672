//! Easing curve for the field's transitions.
//!
//! Maps linear progress (0.0 to 1.0) onto the quadratic ease-in-out curve
//! used by both the label move and the placeholder fades.

/// Quadratic ease-in-out: slow start, fast middle, slow end.
///
/// Input outside `0.0..=1.0` is clamped.
///
/// ```
/// use floatfield::animation::ease_in_out;
///
/// assert_eq!(ease_in_out(0.5), 0.5);
/// assert!(ease_in_out(0.25) < 0.25);
/// assert!(ease_in_out(0.75) > 0.75);
/// ```
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_points() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn test_symmetric() {
        let a = ease_in_out(0.2);
        let b = ease_in_out(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(ease_in_out(-0.5), 0.0);
        assert_eq!(ease_in_out(1.5), 1.0);
    }
}
