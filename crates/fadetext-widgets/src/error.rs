#![forbid(unsafe_code)]

//! Errors reported by the fade controller and its configuration.

use std::fmt;

use crate::host::TextArrayId;

/// Reasons a configuration or controller call is rejected.
///
/// Every rejection is synchronous and leaves the controller exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FadeTextError {
    /// A text list was empty where at least one entry is required.
    EmptyTexts,
    /// A hold timeout was zero, negative, or not a finite number.
    NonPositiveTimeout,
    /// `fade_to` was given an index outside the current text list.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the text list at the time of the call.
        len: usize,
    },
    /// The host could not resolve a text array resource.
    UnknownResource(TextArrayId),
    /// An attribute block could not be parsed.
    InvalidAttrs(String),
}

impl FadeTextError {
    /// Whether this is a caller-supplied bad argument, as opposed to a
    /// lookup or parse failure.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyTexts | Self::NonPositiveTimeout | Self::IndexOutOfRange { .. }
        )
    }
}

impl fmt::Display for FadeTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTexts => write!(f, "there must be at least one text"),
            Self::NonPositiveTimeout => write!(f, "timeout must be longer than 0"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "text index {index} out of range for {len} texts")
            }
            Self::UnknownResource(id) => write!(f, "unknown text array resource {id}"),
            Self::InvalidAttrs(msg) => write!(f, "invalid attributes: {msg}"),
        }
    }
}

impl std::error::Error for FadeTextError {}

/// Standard result type for fadetext APIs.
pub type Result<T> = std::result::Result<T, FadeTextError>;
