#![forbid(unsafe_code)]

//! fadetext public facade crate.
//!
//! Re-exports the controller, the host trait, and the ready-made widget from
//! the internal crates, plus a small prelude for everyday use.

// --- Core re-exports -------------------------------------------------------

pub use fadetext_core::animation::{EasingFn, Fade, ease_in_out, linear};
pub use fadetext_core::timer::HoldTimer;

// --- Widget re-exports -----------------------------------------------------

pub use fadetext_widgets::config::{DEFAULT_TIMEOUT, LONG_ANIMATION_TIME};
pub use fadetext_widgets::{
    CycleState, FadeAnimator, FadeAnimatorConfig, FadeController, FadeHost, FadePhase,
    FadeTextError, FadingText, FadingTextAttrs, FadingTextConfig, Result, TextArrayId, TimeUnit,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CycleState, FadeController, FadeHost, FadePhase, FadeTextError, FadingText,
        FadingTextAttrs, FadingTextConfig, Result, TimeUnit,
    };

    pub use crate::{core, widgets};
}

pub use fadetext_core as core;
pub use fadetext_widgets as widgets;
