#![forbid(unsafe_code)]

//! Cycling fade text: the timing controller, its host trait, and a
//! ready-made widget.

pub mod animator;
pub mod config;
pub mod controller;
pub mod error;
pub mod fading_text;
pub mod host;

pub use animator::{FadeAnimator, FadeAnimatorConfig};
pub use config::{FadingTextAttrs, FadingTextConfig, TimeUnit};
pub use controller::{CycleState, FadeController};
pub use error::{FadeTextError, Result};
pub use fading_text::FadingText;
pub use host::{FadeHost, FadePhase, TextArrayId};
