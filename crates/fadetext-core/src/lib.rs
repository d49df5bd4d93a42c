#![forbid(unsafe_code)]

//! Core: fade animation, the single-slot hold timer, and logging.

pub mod animation;
pub mod logging;
pub mod timer;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, trace_span, warn};
