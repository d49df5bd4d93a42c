#![forbid(unsafe_code)]

//! Ready-made cycling fade text.
//!
//! [`FadingText`] pairs a [`FadeController`] with a built-in surface that
//! stores the shown string and animates its opacity with a [`FadeAnimator`].
//! A UI layer only has to forward lifecycle calls, advance the clock with
//! [`FadingText::tick`], and paint [`text`](FadingText::text) at
//! [`opacity`](FadingText::opacity).
//!
//! # Example
//!
//! ```rust
//! use fadetext_widgets::config::FadingTextConfig;
//! use fadetext_widgets::fading_text::FadingText;
//! use std::time::Duration;
//!
//! let config = FadingTextConfig::new(["hello", "world"]).timeout(Duration::from_secs(2));
//! let mut widget = FadingText::new(config).unwrap();
//! widget.attach();
//! assert_eq!(widget.text(), "hello");
//!
//! // Hold for 2s, then a 500ms fade-out.
//! for _ in 0..25 {
//!     widget.tick(Duration::from_millis(100));
//! }
//! assert_eq!(widget.text(), "world");
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use crate::animator::{FadeAnimator, FadeAnimatorConfig};
use crate::config::{FadingTextAttrs, FadingTextConfig, TimeUnit};
use crate::controller::{CycleState, FadeController};
use crate::error::Result;
use crate::host::{FadeHost, FadePhase, TextArrayId};

/// Built-in host: the string on screen plus its fade.
#[derive(Debug, Default)]
struct Surface {
    text: String,
    animator: FadeAnimator,
    edit_mode: bool,
    resources: BTreeMap<TextArrayId, Vec<String>>,
    needs_repaint: bool,
}

impl FadeHost for Surface {
    fn render(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.needs_repaint = true;
    }

    fn play(&mut self, phase: FadePhase) {
        self.animator.play(phase);
    }

    fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    fn invalidate(&mut self) {
        self.needs_repaint = true;
    }

    fn is_in_edit_mode(&self) -> bool {
        self.edit_mode
    }

    fn resolve_texts(&self, id: TextArrayId) -> Option<Vec<String>> {
        self.resources.get(&id).cloned()
    }
}

/// A text that cycles through its entries with fades.
#[derive(Debug)]
pub struct FadingText {
    controller: FadeController,
    surface: Surface,
}

impl FadingText {
    /// Builds a widget from an effective config.
    pub fn new(config: FadingTextConfig) -> Result<Self> {
        Ok(Self {
            controller: FadeController::new(config)?,
            surface: Surface::default(),
        })
    }

    /// Builds a widget from layout attributes.
    pub fn from_attrs(attrs: FadingTextAttrs) -> Result<Self> {
        Self::new(attrs.into_config())
    }

    /// Wraps an existing controller.
    #[must_use]
    pub fn from_controller(controller: FadeController) -> Self {
        Self {
            controller,
            surface: Surface::default(),
        }
    }

    /// Replaces the fade durations and easing.
    #[must_use]
    pub fn animator(mut self, config: FadeAnimatorConfig) -> Self {
        self.surface.animator = FadeAnimator::new(config);
        self
    }

    /// Registers text arrays resolvable by [`set_texts_from`](Self::set_texts_from).
    #[must_use]
    pub fn with_resources<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = (TextArrayId, Vec<String>)>,
    {
        self.surface.resources.extend(resources);
        self
    }

    /// Marks the widget as a design-time preview; previews never cycle.
    #[must_use]
    pub fn edit_mode(mut self, edit_mode: bool) -> Self {
        self.surface.edit_mode = edit_mode;
        self
    }

    // --- Painting ----------------------------------------------------------

    /// The string currently on screen. Empty until the first render.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.surface.text
    }

    /// Opacity to paint the text with, in [0.0, 1.0].
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.surface.animator.opacity()
    }

    /// The fade currently playing, if any.
    #[must_use]
    pub fn playing(&self) -> Option<FadePhase> {
        self.surface.animator.playing()
    }

    /// Returns and clears the repaint request raised by renders and restarts.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.surface.needs_repaint)
    }

    /// The underlying controller.
    #[must_use]
    pub fn controller(&self) -> &FadeController {
        &self.controller
    }

    /// Shorthand for `controller().state()`.
    #[must_use]
    pub fn state(&self) -> CycleState {
        self.controller.state()
    }

    // --- Clock -------------------------------------------------------------

    /// Advances the fade and the hold timer by `dt`.
    ///
    /// No part of `dt` is dropped at a phase boundary: time past the end of a
    /// hold runs the fade-out, and time past the end of a fade-out runs the
    /// next entry's fade-in and hold, so cycle timing does not depend on the
    /// frame length.
    pub fn tick(&mut self, dt: Duration) {
        let mut budget = dt;
        loop {
            if let Some((FadePhase::Out, leftover)) = self.surface.animator.tick(budget) {
                self.controller.fade_out_finished(&mut self.surface);
                budget = leftover;
                continue;
            }
            match self.controller.tick(budget, &mut self.surface) {
                Some(excess) => budget = excess,
                None => break,
            }
        }
    }

    // --- Lifecycle ---------------------------------------------------------

    /// See [`FadeController::attach`].
    pub fn attach(&mut self) {
        self.controller.attach(&mut self.surface);
    }

    /// See [`FadeController::detach`].
    pub fn detach(&mut self) {
        self.controller.detach(&mut self.surface);
    }

    /// See [`FadeController::resume`].
    pub fn resume(&mut self) {
        self.controller.resume(&mut self.surface);
    }

    /// See [`FadeController::pause`].
    pub fn pause(&mut self) {
        self.controller.pause(&mut self.surface);
    }

    /// See [`FadeController::stop`].
    pub fn stop(&mut self) {
        self.controller.stop(&mut self.surface);
    }

    /// See [`FadeController::restart`].
    pub fn restart(&mut self) {
        self.controller.restart(&mut self.surface);
    }

    // --- Configuration -----------------------------------------------------

    /// See [`FadeController::set_texts`].
    pub fn set_texts<I, S>(&mut self, texts: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controller.set_texts(texts, &mut self.surface)
    }

    /// See [`FadeController::set_texts_from`].
    pub fn set_texts_from(&mut self, id: TextArrayId) -> Result<()> {
        self.controller.set_texts_from(id, &mut self.surface)
    }

    /// See [`FadeController::force_refresh`].
    pub fn force_refresh(&mut self) {
        self.controller.force_refresh(&mut self.surface);
    }

    /// See [`FadeController::fade_to`].
    pub fn fade_to(&mut self, index: usize) -> Result<()> {
        self.controller.fade_to(index, &mut self.surface)
    }

    /// See [`FadeController::shuffle`].
    pub fn shuffle(&mut self) -> Result<()> {
        self.controller.shuffle()
    }

    /// See [`FadeController::set_timeout`].
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.controller.set_timeout(timeout)
    }

    /// See [`FadeController::set_timeout_millis`].
    pub fn set_timeout_millis(&mut self, millis: i64) -> Result<()> {
        self.controller.set_timeout_millis(millis)
    }

    /// See [`FadeController::set_timeout_in`].
    pub fn set_timeout_in(&mut self, value: f64, unit: TimeUnit) -> Result<()> {
        self.controller.set_timeout_in(value, unit)
    }
}
