#![forbid(unsafe_code)]

//! The surface a [`FadeController`](crate::controller::FadeController) drives.
//!
//! Any UI toolkit can host the cycling text by implementing [`FadeHost`]:
//! show a string, play one of the two fades, and drop whatever fade is in
//! flight. The controller never owns its host; it borrows one for the
//! duration of each call that may need to draw.

use std::fmt;

/// Which of the two transitions to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadePhase {
    /// Opacity rises from transparent to fully visible.
    In,
    /// Opacity falls from fully visible to transparent.
    Out,
}

/// Handle to a string-array resource owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextArrayId(pub u32);

impl fmt::Display for TextArrayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rendering and animation capability required by the fade controller.
///
/// When the host finishes playing a [`FadePhase::Out`] it reports back through
/// [`FadeController::fade_out_finished`](crate::controller::FadeController::fade_out_finished).
pub trait FadeHost {
    /// Display `text` as the current content.
    fn render(&mut self, text: &str);

    /// Start playing a fade, replacing any fade already running.
    fn play(&mut self, phase: FadePhase);

    /// Drop the fade currently in flight, if any.
    fn cancel_animation(&mut self);

    /// Request a repaint of the whole surface.
    fn invalidate(&mut self) {}

    /// Design-time previews render nothing and run no cycle.
    fn is_in_edit_mode(&self) -> bool {
        false
    }

    /// Resolve a string-array resource.
    fn resolve_texts(&self, id: TextArrayId) -> Option<Vec<String>> {
        let _ = id;
        None
    }
}
