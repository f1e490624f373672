//! Clock-driven transitions between two values.
//!
//! A [`Transition`] is created when an animation is requested and stamped
//! with a start time on the first [`Transition::update`] call. This mirrors
//! how a render loop works: a request made between frames starts animating on
//! the next frame, not at the instant it was made.

use std::time::{Duration, Instant};

use super::easing::ease_in_out;

/// A value that can be interpolated by a transition.
pub trait Animatable: Clone {
    /// Interpolate from `self` towards `target`. `t` is already eased.
    fn interpolate(&self, target: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

/// Visual style of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionKind {
    /// Plain ease-in-out curve.
    #[default]
    CurveEaseInOut,
    /// A horizontal flip that starts from the trailing edge.
    ///
    /// Property values follow the ease-in-out curve; renderers may
    /// additionally squash the element horizontally using
    /// [`Transition::flip_scale`].
    FlipFromRight,
}

/// Current state of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionState<T> {
    /// The transition is still running.
    Running {
        /// The interpolated value.
        value: T,
        /// Raw (uneased) progress from 0.0 to 1.0.
        progress: f32,
    },
    /// The transition has reached its target.
    Finished(T),
}

impl<T> TransitionState<T> {
    /// Check if the transition is still in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// The current value, whether running or finished.
    pub fn value(&self) -> &T {
        match self {
            Self::Running { value, .. } | Self::Finished(value) => value,
        }
    }
}

/// A transition animation from one value to another.
#[derive(Debug, Clone)]
pub struct Transition<T> {
    from: T,
    to: T,
    kind: TransitionKind,
    duration: Duration,
    start_time: Option<Instant>,
    progress: f32,
}

impl<T: Animatable> Transition<T> {
    /// Create a transition that has not started yet.
    pub fn new(from: T, to: T, kind: TransitionKind, duration: Duration) -> Self {
        Self {
            from,
            to,
            kind,
            duration,
            start_time: None,
            progress: 0.0,
        }
    }

    #[inline]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The value being animated towards.
    #[inline]
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Whether the transition has been stamped with a start time.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Raw progress as of the last update.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// The value as of the last update.
    pub fn current(&self) -> T {
        self.from
            .interpolate(&self.to, ease_in_out(self.progress))
    }

    /// Horizontal scale factor for flip transitions.
    ///
    /// Goes from 1.0 down to 0.0 at the midpoint and back to 1.0. Always 1.0
    /// for non-flip transitions.
    pub fn flip_scale(&self) -> f32 {
        match self.kind {
            TransitionKind::FlipFromRight => (std::f32::consts::PI * self.progress).cos().abs(),
            TransitionKind::CurveEaseInOut => 1.0,
        }
    }

    /// Advance the transition to `now`.
    ///
    /// The first call starts the clock. A zero duration finishes immediately.
    pub fn update(&mut self, now: Instant) -> TransitionState<T> {
        let start_time = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start_time);

        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if self.progress >= 1.0 {
            TransitionState::Finished(self.to.clone())
        } else {
            TransitionState::Running {
                value: self.current(),
                progress: self.progress,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_clock_starts_on_first_update() {
        let t0 = Instant::now();
        let mut transition = Transition::new(0.0_f32, 10.0, TransitionKind::default(), ms(300));
        assert!(!transition.has_started());

        let state = transition.update(t0 + ms(1000));
        assert!(state.is_running());
        assert_eq!(*state.value(), 0.0);
        assert!(transition.has_started());
    }

    #[test]
    fn test_midpoint_and_finish() {
        let t0 = Instant::now();
        let mut transition = Transition::new(0.0_f32, 10.0, TransitionKind::CurveEaseInOut, ms(300));
        transition.update(t0);

        let mid = transition.update(t0 + ms(150));
        assert!(mid.is_running());
        assert!((*mid.value() - 5.0).abs() < 0.01);

        assert_eq!(transition.update(t0 + ms(300)), TransitionState::Finished(10.0));
        assert_eq!(transition.update(t0 + ms(900)), TransitionState::Finished(10.0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut transition = Transition::new(1.0_f32, 2.0, TransitionKind::default(), Duration::ZERO);
        assert_eq!(transition.update(Instant::now()), TransitionState::Finished(2.0));
    }

    #[test]
    fn test_flip_scale() {
        let t0 = Instant::now();
        let mut flip = Transition::new(0.0_f32, 1.0, TransitionKind::FlipFromRight, ms(200));
        flip.update(t0);
        assert!((flip.flip_scale() - 1.0).abs() < 1e-6);
        flip.update(t0 + ms(100));
        assert!(flip.flip_scale() < 1e-3);

        let mut plain = Transition::new(0.0_f32, 1.0, TransitionKind::CurveEaseInOut, ms(200));
        plain.update(t0);
        plain.update(t0 + ms(100));
        assert_eq!(plain.flip_scale(), 1.0);
    }
}
