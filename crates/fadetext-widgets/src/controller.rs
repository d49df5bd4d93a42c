#![forbid(unsafe_code)]

//! Cycling fade controller.
//!
//! [`FadeController`] decides which text is shown and when it fades. One
//! cycle for the entry at `position` is:
//!
//! 1. render the text and request a fade-in,
//! 2. hold it for `timeout`,
//! 3. request a fade-out and wait for the host to report it finished,
//! 4. advance to `(position + 1) % len` and start again.
//!
//! Two guards keep paused or stopped widgets quiet. Every animation request
//! is dropped unless the controller is visible and not stopped, and
//! `pause`/`stop`/`detach` also cancel the hold timer, the fade-out
//! completion hook, and the host's in-flight fade. A fade-out that was
//! already on screen therefore never advances `position` after a pause.
//!
//! # Example
//!
//! ```rust
//! use fadetext_widgets::config::FadingTextConfig;
//! use fadetext_widgets::controller::FadeController;
//! use fadetext_widgets::host::{FadeHost, FadePhase};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl FadeHost for Log {
//!     fn render(&mut self, text: &str) { self.0.push(format!("render {text}")); }
//!     fn play(&mut self, phase: FadePhase) { self.0.push(format!("{phase:?}")); }
//!     fn cancel_animation(&mut self) {}
//! }
//!
//! let config = FadingTextConfig::new(["hello", "world"]).timeout(Duration::from_secs(2));
//! let mut controller = FadeController::new(config).unwrap();
//! let mut host = Log::default();
//!
//! controller.attach(&mut host);
//! controller.tick(Duration::from_secs(2), &mut host);
//! controller.fade_out_finished(&mut host);
//! assert_eq!(host.0, ["render hello", "In", "Out", "render world", "In"]);
//! ```

use std::time::Duration;

use fadetext_core::timer::HoldTimer;
use fadetext_core::{debug, trace, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{FadingTextConfig, TimeUnit};
use crate::error::{FadeTextError, Result};
use crate::host::{FadeHost, FadePhase, TextArrayId};

/// Coarse lifecycle state, derived from the controller's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// No texts to show.
    Idle,
    /// Advancing automatically.
    Cycling,
    /// Suspended until `resume` or `restart`.
    Paused,
    /// Suspended until `restart`; `resume` alone has no effect.
    Stopped,
}

/// Timing state machine behind a cycling fade text.
#[derive(Debug, Clone)]
pub struct FadeController {
    texts: Vec<String>,
    position: usize,
    timeout: Duration,
    visible: bool,
    stopped: bool,
    hold: HoldTimer,
    fade_out_hook: bool,
}

impl FadeController {
    /// Builds a controller from `config`, shuffling with the thread RNG if asked.
    ///
    /// The controller starts visible but does not render until it is
    /// attached, resumed, or given texts.
    pub fn new(config: FadingTextConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Like [`new`](Self::new), shuffling with `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: FadingTextConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut controller = Self {
            texts: config.texts,
            position: 0,
            timeout: config.timeout,
            visible: true,
            stopped: false,
            hold: HoldTimer::new(),
            fade_out_hook: false,
        };
        if config.shuffle {
            controller.shuffle_with(rng)?;
        }
        debug!(
            texts = controller.texts.len(),
            timeout_ms = controller.timeout.as_millis() as u64,
            "fade controller created"
        );
        Ok(controller)
    }

    // --- Accessors -------------------------------------------------------

    /// The texts being cycled.
    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Index of the entry currently shown.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The entry currently shown, if any.
    #[must_use]
    pub fn current_text(&self) -> Option<&str> {
        self.texts.get(self.position).map(String::as_str)
    }

    /// Hold time before each fade-out.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the cycle is allowed to run.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the sticky stop is in effect.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Time left before the pending fade-out, if a hold is pending.
    #[must_use]
    pub fn hold_remaining(&self) -> Option<Duration> {
        self.hold.remaining()
    }

    /// Whether a fade-out was played and its completion is still awaited.
    #[must_use]
    pub fn awaiting_fade_out(&self) -> bool {
        self.fade_out_hook
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CycleState {
        if self.texts.is_empty() {
            CycleState::Idle
        } else if self.stopped {
            CycleState::Stopped
        } else if !self.visible {
            CycleState::Paused
        } else {
            CycleState::Cycling
        }
    }

    fn is_running(&self) -> bool {
        self.visible && !self.stopped
    }

    // --- Lifecycle -------------------------------------------------------

    /// Lets the cycle run again and restarts it at the current position.
    ///
    /// Has no visible effect while stopped; use [`restart`](Self::restart).
    pub fn resume<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.visible = true;
        debug!(stopped = self.stopped, "fade controller resumed");
        if !self.stopped {
            self.start_cycle(host);
        }
    }

    /// Suspends the cycle and cancels all pending work.
    pub fn pause<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.visible = false;
        debug!(position = self.position, "fade controller paused");
        self.cancel_pending(host);
    }

    /// Suspends the cycle until [`restart`](Self::restart).
    pub fn stop<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.visible = false;
        self.stopped = true;
        debug!(position = self.position, "fade controller stopped");
        self.cancel_pending(host);
    }

    /// Clears a stop or pause, restarts the cycle, and asks for a repaint.
    pub fn restart<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.visible = true;
        self.stopped = false;
        debug!(position = self.position, "fade controller restarted");
        self.start_cycle(host);
        host.invalidate();
    }

    /// Host attached the widget to a visible surface.
    pub fn attach<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.resume(host);
    }

    /// Host detached the widget; nothing fires after this until re-attached.
    pub fn detach<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.pause(host);
    }

    // --- Configuration ---------------------------------------------------

    /// Replaces the texts and shows the first one immediately.
    pub fn set_texts<I, S, H>(&mut self, texts: I, host: &mut H) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        H: FadeHost + ?Sized,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.is_empty() {
            warn!("rejected empty text list");
            return Err(FadeTextError::EmptyTexts);
        }
        debug!(count = texts.len(), "texts replaced");
        self.texts = texts;
        self.cancel_pending(host);
        self.position = 0;
        self.start_cycle(host);
        Ok(())
    }

    /// Resolves a text array through the host, then behaves as [`set_texts`](Self::set_texts).
    pub fn set_texts_from<H: FadeHost + ?Sized>(
        &mut self,
        id: TextArrayId,
        host: &mut H,
    ) -> Result<()> {
        let Some(texts) = host.resolve_texts(id) else {
            warn!(resource = %id, "text array resource not found");
            return Err(FadeTextError::UnknownResource(id));
        };
        self.set_texts(texts, host)
    }

    /// Restarts the cycle at the current position, discarding the running hold.
    ///
    /// Use after [`set_timeout`](Self::set_timeout) to apply the new value now.
    pub fn force_refresh<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.cancel_pending(host);
        self.start_cycle(host);
    }

    /// Shows the entry at `index` once and leaves the controller paused.
    pub fn fade_to<H: FadeHost + ?Sized>(&mut self, index: usize, host: &mut H) -> Result<()> {
        let len = self.texts.len();
        if index >= len {
            warn!(index, len, "fade_to index out of range");
            return Err(FadeTextError::IndexOutOfRange { index, len });
        }
        self.position = index;
        self.visible = true;
        self.start_cycle(host);
        self.pause(host);
        Ok(())
    }

    /// Shuffles the texts in place with the thread RNG.
    ///
    /// `position` is left alone, so the entry at it may change; the display
    /// is not refreshed until the next cycle step.
    pub fn shuffle(&mut self) -> Result<()> {
        self.shuffle_with(&mut rand::rng())
    }

    /// Shuffles the texts in place with `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.texts.is_empty() {
            warn!("rejected shuffle of empty text list");
            return Err(FadeTextError::EmptyTexts);
        }
        self.texts.shuffle(rng);
        trace!(count = self.texts.len(), "texts shuffled");
        Ok(())
    }

    /// Sets the hold time used from the next cycle step on.
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        if timeout.is_zero() {
            warn!("rejected zero timeout");
            return Err(FadeTextError::NonPositiveTimeout);
        }
        self.timeout = timeout;
        debug!(timeout_ms = timeout.as_millis() as u64, "timeout changed");
        Ok(())
    }

    /// Sets the hold time in whole milliseconds. Values below 1 are rejected.
    pub fn set_timeout_millis(&mut self, millis: i64) -> Result<()> {
        let millis = u64::try_from(millis).map_err(|_| FadeTextError::NonPositiveTimeout)?;
        self.set_timeout(Duration::from_millis(millis))
    }

    /// Sets the hold time as `value` of `unit`, truncated to milliseconds.
    pub fn set_timeout_in(&mut self, value: f64, unit: TimeUnit) -> Result<()> {
        let timeout = unit
            .to_duration(value)
            .ok_or(FadeTextError::NonPositiveTimeout)?;
        self.set_timeout(timeout)
    }

    // --- Clock and host reports ------------------------------------------

    /// Advances the hold timer by `dt`; starts the fade-out when it elapses.
    ///
    /// Returns the part of `dt` past the end of the hold when this tick
    /// requested the fade-out, so the host can advance that fade by it.
    pub fn tick<H: FadeHost + ?Sized>(&mut self, dt: Duration, host: &mut H) -> Option<Duration> {
        let excess = self.hold.tick(dt)?;
        trace!(position = self.position, ?excess, "hold elapsed");
        if !self.request(FadePhase::Out, host) {
            return None;
        }
        self.fade_out_hook = true;
        Some(excess)
    }

    /// The host finished playing the fade-out it was asked for.
    ///
    /// Advances to the next entry and starts its cycle immediately. Ignored
    /// when no fade-out is awaited, which covers reports that arrive after a
    /// pause, stop, or texts change.
    pub fn fade_out_finished<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        if !std::mem::take(&mut self.fade_out_hook) {
            trace!("stale fade-out completion ignored");
            return;
        }
        if !self.visible || self.texts.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.texts.len();
        self.start_cycle(host);
    }

    // --- Internals -------------------------------------------------------

    fn start_cycle<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        if host.is_in_edit_mode() || self.texts.is_empty() {
            return;
        }
        let span = fadetext_core::trace_span!("fadetext.cycle", position = self.position);
        let _guard = span.enter();

        self.fade_out_hook = false;
        host.render(&self.texts[self.position]);
        self.request(FadePhase::In, host);
        if self.is_running() {
            self.hold.arm(self.timeout);
        }
    }

    fn request<H: FadeHost + ?Sized>(&self, phase: FadePhase, host: &mut H) -> bool {
        if !self.is_running() {
            trace!(?phase, "animation suppressed");
            return false;
        }
        host.play(phase);
        true
    }

    fn cancel_pending<H: FadeHost + ?Sized>(&mut self, host: &mut H) {
        self.hold.cancel();
        self.fade_out_hook = false;
        host.cancel_animation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SEC_2: Duration = Duration::from_secs(2);

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Render(String),
        Play(FadePhase),
        Cancel,
        Invalidate,
    }

    #[derive(Debug, Default)]
    struct RecordingHost {
        calls: Vec<Call>,
        edit_mode: bool,
    }

    impl RecordingHost {
        fn take(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }

        fn renders(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Render(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl FadeHost for RecordingHost {
        fn render(&mut self, text: &str) {
            self.calls.push(Call::Render(text.to_string()));
        }

        fn play(&mut self, phase: FadePhase) {
            self.calls.push(Call::Play(phase));
        }

        fn cancel_animation(&mut self) {
            self.calls.push(Call::Cancel);
        }

        fn invalidate(&mut self) {
            self.calls.push(Call::Invalidate);
        }

        fn is_in_edit_mode(&self) -> bool {
            self.edit_mode
        }

        fn resolve_texts(&self, id: TextArrayId) -> Option<Vec<String>> {
            (id == TextArrayId(1)).then(|| vec!["one".to_string(), "two".to_string()])
        }
    }

    fn render(text: &str) -> Call {
        Call::Render(text.to_string())
    }

    fn controller(texts: &[&str]) -> FadeController {
        FadeController::new(FadingTextConfig::new(texts.iter().copied()).timeout(SEC_2)).unwrap()
    }

    /// Drive one full hold + fade-out on a running controller.
    fn complete_cycle(c: &mut FadeController, host: &mut RecordingHost) {
        c.tick(c.timeout(), host);
        c.fade_out_finished(host);
    }

    #[test]
    fn new_does_not_render() {
        let c = controller(&["a"]);
        assert_eq!(c.state(), CycleState::Cycling);
        assert_eq!(c.hold_remaining(), None);
        assert!(c.is_visible());
        assert!(!c.is_stopped());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let zero = FadingTextConfig::new(["a"]).timeout(Duration::ZERO);
        assert_eq!(
            FadeController::new(zero).unwrap_err(),
            FadeTextError::NonPositiveTimeout
        );
        let empty_shuffle = FadingTextConfig::default().shuffle(true);
        assert_eq!(
            FadeController::new(empty_shuffle).unwrap_err(),
            FadeTextError::EmptyTexts
        );
    }

    #[test]
    fn empty_controller_is_idle_and_silent() {
        let mut c = FadeController::new(FadingTextConfig::default()).unwrap();
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.tick(Duration::from_secs(60), &mut host);
        assert_eq!(c.state(), CycleState::Idle);
        assert!(host.calls.is_empty());
        assert_eq!(c.current_text(), None);
    }

    #[test]
    fn attach_renders_and_fades_in_then_holds() {
        let mut c = controller(&["hello", "world"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        assert_eq!(host.take(), vec![render("hello"), Call::Play(FadePhase::In)]);
        assert_eq!(c.hold_remaining(), Some(SEC_2));

        c.tick(Duration::from_millis(1_999), &mut host);
        assert!(host.calls.is_empty());
        c.tick(Duration::from_millis(1), &mut host);
        assert_eq!(host.take(), vec![Call::Play(FadePhase::Out)]);
        assert!(c.awaiting_fade_out());

        c.fade_out_finished(&mut host);
        assert_eq!(c.position(), 1);
        assert_eq!(host.take(), vec![render("world"), Call::Play(FadePhase::In)]);
        assert_eq!(c.hold_remaining(), Some(SEC_2));
    }

    #[test]
    fn cycle_wraps_to_start() {
        let mut c = controller(&["a", "b", "c"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        let mut seen = Vec::new();
        for _ in 0..3 {
            complete_cycle(&mut c, &mut host);
            seen.push(c.position());
        }
        assert_eq!(seen, vec![1, 2, 0]);
        assert_eq!(host.renders(), vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn single_text_pulses() {
        let mut c = controller(&["solo"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        complete_cycle(&mut c, &mut host);
        complete_cycle(&mut c, &mut host);
        assert_eq!(c.position(), 0);
        assert_eq!(host.renders(), vec!["solo", "solo", "solo"]);
    }

    #[test]
    fn set_texts_restarts_at_first_entry() {
        let mut c = controller(&["a", "b", "c"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        complete_cycle(&mut c, &mut host);
        host.take();

        c.set_texts(["x", "y"], &mut host).unwrap();
        assert_eq!(c.position(), 0);
        assert_eq!(
            host.take(),
            vec![Call::Cancel, render("x"), Call::Play(FadePhase::In)]
        );
        assert_eq!(c.hold_remaining(), Some(SEC_2));
    }

    #[test]
    fn set_texts_empty_leaves_state_unchanged() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        complete_cycle(&mut c, &mut host);
        host.take();

        let err = c.set_texts(Vec::<String>::new(), &mut host).unwrap_err();
        assert_eq!(err, FadeTextError::EmptyTexts);
        assert!(err.is_invalid_argument());
        assert_eq!(c.texts(), ["a", "b"]);
        assert_eq!(c.position(), 1);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn set_texts_from_resource() {
        let mut c = controller(&["a"]);
        let mut host = RecordingHost::default();
        c.set_texts_from(TextArrayId(1), &mut host).unwrap();
        assert_eq!(c.texts(), ["one", "two"]);
        assert_eq!(host.renders(), vec!["one"]);

        assert_eq!(
            c.set_texts_from(TextArrayId(9), &mut host),
            Err(FadeTextError::UnknownResource(TextArrayId(9)))
        );
        assert_eq!(c.texts(), ["one", "two"]);
    }

    #[test]
    fn stale_fade_out_report_is_ignored() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        host.take();
        c.fade_out_finished(&mut host);
        assert_eq!(c.position(), 0);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn pause_cancels_hold_and_hook() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.tick(SEC_2, &mut host);
        assert!(c.awaiting_fade_out());
        host.take();

        c.pause(&mut host);
        assert_eq!(c.state(), CycleState::Paused);
        assert_eq!(host.take(), vec![Call::Cancel]);
        assert!(!c.awaiting_fade_out());

        // The fade-out that was on screen reports late; nothing advances.
        c.fade_out_finished(&mut host);
        c.tick(Duration::from_secs(60), &mut host);
        assert_eq!(c.position(), 0);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn resume_restarts_at_current_position() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        complete_cycle(&mut c, &mut host);
        c.pause(&mut host);
        host.take();

        c.resume(&mut host);
        assert_eq!(host.take(), vec![render("b"), Call::Play(FadePhase::In)]);
        assert_eq!(c.state(), CycleState::Cycling);
    }

    #[test]
    fn stop_is_sticky_until_restart() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.stop(&mut host);
        host.take();
        assert_eq!(c.state(), CycleState::Stopped);

        c.resume(&mut host);
        c.tick(Duration::from_secs(60), &mut host);
        assert!(host.calls.is_empty());
        assert!(c.is_visible());
        assert_eq!(c.state(), CycleState::Stopped);

        c.restart(&mut host);
        assert_eq!(
            host.take(),
            vec![render("a"), Call::Play(FadePhase::In), Call::Invalidate]
        );
        assert_eq!(c.state(), CycleState::Cycling);
    }

    #[test]
    fn animation_requests_are_gated_when_hidden() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.pause(&mut host);
        host.take();

        // Explicit texts change still renders but plays nothing and arms nothing.
        c.set_texts(["x"], &mut host).unwrap();
        assert_eq!(host.take(), vec![Call::Cancel, render("x")]);
        assert_eq!(c.hold_remaining(), None);
    }

    #[test]
    fn drives_a_type_erased_host() {
        let mut c = controller(&["a", "b"]);
        let mut recording = RecordingHost::default();
        let host: &mut dyn FadeHost = &mut recording;
        c.attach(host);
        complete_cycle_dyn(&mut c, host);
        assert_eq!(recording.renders(), ["a", "b"]);
    }

    fn complete_cycle_dyn(c: &mut FadeController, host: &mut dyn FadeHost) {
        c.tick(c.timeout(), host);
        c.fade_out_finished(host);
    }

    #[test]
    fn tick_reports_time_past_the_hold() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        host.take();

        assert_eq!(c.tick(Duration::from_millis(1_900), &mut host), None);
        assert_eq!(
            c.tick(Duration::from_millis(300), &mut host),
            Some(Duration::from_millis(200))
        );
        assert_eq!(host.take(), vec![Call::Play(FadePhase::Out)]);
        assert_eq!(c.tick(SEC_2, &mut host), None);
    }

    #[test]
    fn detach_with_pending_hold_goes_quiet() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.tick(Duration::from_millis(500), &mut host);
        c.detach(&mut host);
        host.take();

        for _ in 0..10 {
            c.tick(SEC_2, &mut host);
            c.fade_out_finished(&mut host);
        }
        assert!(host.calls.is_empty());
    }

    #[test]
    fn force_refresh_restarts_hold() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.tick(Duration::from_millis(1_500), &mut host);
        assert_eq!(c.hold_remaining(), Some(Duration::from_millis(500)));
        host.take();

        c.force_refresh(&mut host);
        assert_eq!(
            host.take(),
            vec![Call::Cancel, render("a"), Call::Play(FadePhase::In)]
        );
        assert_eq!(c.hold_remaining(), Some(SEC_2));
    }

    #[test]
    fn set_timeout_applies_on_next_hold() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.set_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(c.hold_remaining(), Some(SEC_2));

        complete_cycle(&mut c, &mut host);
        assert_eq!(c.hold_remaining(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn set_timeout_then_force_refresh_applies_now() {
        let mut c = controller(&["a"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.set_timeout(Duration::from_millis(300)).unwrap();
        c.force_refresh(&mut host);
        assert_eq!(c.hold_remaining(), Some(Duration::from_millis(300)));
    }

    #[test]
    fn set_timeout_rejects_non_positive() {
        let mut c = controller(&["a"]);
        assert_eq!(
            c.set_timeout(Duration::ZERO),
            Err(FadeTextError::NonPositiveTimeout)
        );
        assert_eq!(
            c.set_timeout_millis(0),
            Err(FadeTextError::NonPositiveTimeout)
        );
        assert_eq!(
            c.set_timeout_millis(-5),
            Err(FadeTextError::NonPositiveTimeout)
        );
        assert_eq!(
            c.set_timeout_in(-1.0, TimeUnit::Seconds),
            Err(FadeTextError::NonPositiveTimeout)
        );
        assert_eq!(c.timeout(), SEC_2);
    }

    #[test]
    fn set_timeout_units() {
        let mut c = controller(&["a"]);
        c.set_timeout_millis(750).unwrap();
        assert_eq!(c.timeout(), Duration::from_millis(750));
        c.set_timeout_in(1.5, TimeUnit::Seconds).unwrap();
        assert_eq!(c.timeout(), Duration::from_millis(1_500));
        c.set_timeout_in(2.0, TimeUnit::Minutes).unwrap();
        assert_eq!(c.timeout(), Duration::from_secs(120));
        c.set_timeout_in(f64::MAX, TimeUnit::Minutes).unwrap();
        assert_eq!(c.timeout(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn fade_to_shows_once_then_pauses() {
        let mut c = controller(&["a", "b", "c"]);
        let mut host = RecordingHost::default();
        c.pause(&mut host);
        host.take();

        c.fade_to(2, &mut host).unwrap();
        assert_eq!(c.position(), 2);
        assert_eq!(
            host.take(),
            vec![render("c"), Call::Play(FadePhase::In), Call::Cancel]
        );
        assert_eq!(c.state(), CycleState::Paused);
        assert_eq!(c.hold_remaining(), None);

        c.tick(Duration::from_secs(60), &mut host);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn fade_to_rejects_out_of_range() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        assert_eq!(
            c.fade_to(2, &mut host),
            Err(FadeTextError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(c.position(), 0);
        assert!(c.is_visible());
        assert!(host.calls.is_empty());

        let mut empty = FadeController::new(FadingTextConfig::default()).unwrap();
        assert_eq!(
            empty.fade_to(0, &mut host),
            Err(FadeTextError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn shuffle_keeps_multiset_and_position() {
        let mut c = controller(&["a", "b", "c", "d"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        complete_cycle(&mut c, &mut host);

        c.shuffle_with(&mut StdRng::seed_from_u64(7)).unwrap();
        let mut sorted = c.texts().to_vec();
        sorted.sort();
        assert_eq!(sorted, ["a", "b", "c", "d"]);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn shuffle_empty_fails() {
        let mut c = FadeController::new(FadingTextConfig::default()).unwrap();
        assert_eq!(c.shuffle(), Err(FadeTextError::EmptyTexts));
        assert!(c.texts().is_empty());
    }

    #[test]
    fn shuffle_at_construction_is_deterministic_with_seed() {
        let config = FadingTextConfig::new(["a", "b", "c", "d", "e"]).shuffle(true);
        let first =
            FadeController::with_rng(config.clone(), &mut StdRng::seed_from_u64(42)).unwrap();
        let second = FadeController::with_rng(config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first.texts(), second.texts());
        assert_eq!(first.texts().len(), 5);
    }

    #[test]
    fn edit_mode_renders_nothing() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost {
            edit_mode: true,
            ..RecordingHost::default()
        };
        c.attach(&mut host);
        c.tick(Duration::from_secs(60), &mut host);
        assert!(host.calls.is_empty());
        assert_eq!(c.hold_remaining(), None);
    }

    #[test]
    fn resume_while_cycling_rearms_single_hold() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.tick(Duration::from_millis(1_000), &mut host);
        c.resume(&mut host);
        assert_eq!(c.hold_remaining(), Some(SEC_2));

        host.take();
        c.tick(SEC_2, &mut host);
        assert_eq!(host.take(), vec![Call::Play(FadePhase::Out)]);
        c.tick(SEC_2, &mut host);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn resume_during_fade_out_supersedes_it() {
        let mut c = controller(&["a", "b"]);
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        c.tick(SEC_2, &mut host);
        c.resume(&mut host);
        assert!(!c.awaiting_fade_out());
        c.fade_out_finished(&mut host);
        assert_eq!(c.position(), 0);
    }
}
