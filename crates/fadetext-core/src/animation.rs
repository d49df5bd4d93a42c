#![forbid(unsafe_code)]

//! Eased fades on a host-advanced clock.
//!
//! A [`Fade`] turns accumulated time into an eased progress value in
//! [0.0, 1.0]. It never reads the wall clock; the host feeds it frame deltas
//! through [`Fade::tick`]. The tick that carries a fade past its end reports
//! how much of that delta was left over, so a caller can hand the remainder
//! to whatever runs next instead of losing part of a frame.

use std::time::Duration;

/// Maps linear progress in [0, 1] to eased progress in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Constant-rate progress.
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic in-out: slow near both ends, symmetric around the midpoint.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 2.0 - 2.0 * t;
        1.0 - u * u / 2.0
    }
}

/// One pass from 0.0 to 1.0 over a fixed duration.
///
/// A zero duration is stored as one nanosecond so the fade finishes on the
/// first non-empty tick.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
    finished: bool,
}

impl Fade {
    /// A linear fade lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: duration.max(Duration::from_nanos(1)),
            easing: linear,
            finished: false,
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advances the fade by `dt`.
    ///
    /// Returns `Some(leftover)` on the one tick that reaches the end, where
    /// `leftover` is the part of `dt` past the end. Every other tick, before
    /// or after, returns `None`.
    pub fn tick(&mut self, dt: Duration) -> Option<Duration> {
        if self.finished {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.duration {
            return None;
        }
        self.finished = true;
        Some(self.elapsed - self.duration)
    }

    /// Whether the end has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished
    }

    /// Eased progress in [0.0, 1.0].
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.easing)(t as f32)
    }
}
