#![forbid(unsafe_code)]

//! Opacity animator for a fading text surface.
//!
//! [`FadeAnimator`] plays at most one fade at a time and reports the
//! surface opacity for the current frame. Hosts that have no animation
//! system of their own can drive it from the same clock as the controller.

use std::time::Duration;

use fadetext_core::animation::{EasingFn, Fade, ease_in_out};

use crate::config::LONG_ANIMATION_TIME;
use crate::host::FadePhase;

/// Durations and easing for the two fades.
#[derive(Debug, Clone, Copy)]
pub struct FadeAnimatorConfig {
    /// Length of the fade-in.
    pub fade_in: Duration,
    /// Length of the fade-out.
    pub fade_out: Duration,
    /// Easing applied to both fades.
    pub easing: EasingFn,
}

impl Default for FadeAnimatorConfig {
    fn default() -> Self {
        Self {
            fade_in: LONG_ANIMATION_TIME,
            fade_out: LONG_ANIMATION_TIME,
            easing: ease_in_out,
        }
    }
}

/// Plays fade-ins and fade-outs and reports when they finish.
#[derive(Debug)]
pub struct FadeAnimator {
    config: FadeAnimatorConfig,
    active: Option<(FadePhase, Fade)>,
}

impl Default for FadeAnimator {
    fn default() -> Self {
        Self::new(FadeAnimatorConfig::default())
    }
}

impl FadeAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new(config: FadeAnimatorConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// The configured durations and easing.
    #[must_use]
    pub fn config(&self) -> &FadeAnimatorConfig {
        &self.config
    }

    /// Starts `phase` from the beginning, replacing any running fade.
    pub fn play(&mut self, phase: FadePhase) {
        let duration = match phase {
            FadePhase::In => self.config.fade_in,
            FadePhase::Out => self.config.fade_out,
        };
        self.active = Some((phase, Fade::new(duration).easing(self.config.easing)));
    }

    /// Drops the running fade. Opacity returns to fully visible.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// The phase currently playing, if any.
    #[must_use]
    pub fn playing(&self) -> Option<FadePhase> {
        self.active.as_ref().map(|(phase, _)| *phase)
    }

    /// Advances the running fade by `dt`.
    ///
    /// Returns the phase that finished during this tick together with the
    /// part of `dt` left over after it. A finished fade-out keeps the surface
    /// transparent until something else is played.
    pub fn tick(&mut self, dt: Duration) -> Option<(FadePhase, Duration)> {
        let (phase, fade) = self.active.as_mut()?;
        let phase = *phase;
        let leftover = fade.tick(dt)?;
        if phase == FadePhase::In {
            self.active = None;
        }
        Some((phase, leftover))
    }

    /// Surface opacity in [0.0, 1.0].
    #[must_use]
    pub fn opacity(&self) -> f32 {
        match &self.active {
            None => 1.0,
            Some((FadePhase::In, fade)) => fade.progress(),
            Some((FadePhase::Out, fade)) => 1.0 - fade.progress(),
        }
    }
}
