#![forbid(unsafe_code)]

//! Single-slot hold timer.
//!
//! [`HoldTimer`] keeps at most one pending deadline on a logical clock that
//! the host advances with [`HoldTimer::tick`]. Arming replaces whatever was
//! pending, so a stale deadline never fires against newer state, and
//! cancelling an empty slot does nothing.
//!
//! # Example
//!
//! ```rust
//! use fadetext_core::timer::HoldTimer;
//! use std::time::Duration;
//!
//! let mut hold = HoldTimer::new();
//! hold.arm(Duration::from_millis(300));
//! assert_eq!(hold.tick(Duration::from_millis(200)), None);
//! assert_eq!(hold.remaining(), Some(Duration::from_millis(100)));
//! assert_eq!(hold.tick(Duration::from_millis(160)), Some(Duration::from_millis(60)));
//! assert!(!hold.is_pending());
//! ```

use std::time::Duration;

/// A one-shot countdown with room for exactly one pending deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldTimer {
    remaining: Option<Duration>,
}

impl HoldTimer {
    /// Creates an empty timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { remaining: None }
    }

    /// Schedules the slot to fire after `delay`, replacing any pending deadline.
    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Empties the slot. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left on the pending deadline, if any.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advances the clock by `dt`.
    ///
    /// On the tick that reaches the deadline the slot empties and the part
    /// of `dt` past the deadline is returned. Otherwise returns `None`.
    pub fn tick(&mut self, dt: Duration) -> Option<Duration> {
        let left = self.remaining?;
        match dt.checked_sub(left) {
            Some(excess) => {
                self.remaining = None;
                Some(excess)
            }
            None => {
                self.remaining = Some(left - dt);
                None
            }
        }
    }
}
