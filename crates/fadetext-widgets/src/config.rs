#![forbid(unsafe_code)]

//! Construction-time configuration.
//!
//! [`FadingTextConfig`] is the validated, effective configuration a
//! controller is built from. [`FadingTextAttrs`] mirrors what a host layout
//! declares (a timeout in integer milliseconds that may be negative, an
//! optional text list) and converts to a config the way the layout inflater
//! would: `|timeout_ms|` plus [`LONG_ANIMATION_TIME`], so the fade-in has
//! finished before the hold starts counting.

use std::time::Duration;

use crate::error::{FadeTextError, Result};

/// Platform "long animation" duration, added to attribute timeouts.
pub const LONG_ANIMATION_TIME: Duration = Duration::from_millis(500);

/// Hold time in milliseconds when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: i64 = 15_000;

/// Default hold time.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS as u64);

/// Unit for [`FadeController::set_timeout_in`](crate::controller::FadeController::set_timeout_in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Milliseconds.
    #[default]
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
}

impl TimeUnit {
    /// Milliseconds in one unit.
    #[must_use]
    pub const fn millis_per_unit(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
        }
    }

    /// Converts `value` units to a whole-millisecond duration.
    ///
    /// Fractions of a millisecond are truncated and values too large for
    /// `u64` milliseconds (including `+inf`) saturate. Returns `None` for
    /// NaN or when the result is below one millisecond.
    #[must_use]
    pub fn to_duration(self, value: f64) -> Option<Duration> {
        if value.is_nan() {
            return None;
        }
        let millis = (value * self.millis_per_unit() as f64).trunc();
        if millis < 1.0 {
            return None;
        }
        // Float-to-int `as` saturates at u64::MAX.
        Some(Duration::from_millis(millis as u64))
    }
}

/// Effective configuration for a fade controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadingTextConfig {
    /// Initial texts. May be empty; the controller stays idle until texts arrive.
    pub texts: Vec<String>,
    /// Hold time before each fade-out. Must be non-zero.
    pub timeout: Duration,
    /// Shuffle the texts once at construction.
    pub shuffle: bool,
}

impl Default for FadingTextConfig {
    fn default() -> Self {
        Self {
            texts: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            shuffle: false,
        }
    }
}

impl FadingTextConfig {
    /// Creates a config cycling through `texts` with the default timeout.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the hold time.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables shuffling at construction.
    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Checks the config without building anything.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(FadeTextError::NonPositiveTimeout);
        }
        if self.shuffle && self.texts.is_empty() {
            return Err(FadeTextError::EmptyTexts);
        }
        Ok(())
    }
}

/// Attributes as declared by a host layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FadingTextAttrs {
    /// Text array, if the layout declared one.
    pub texts: Option<Vec<String>>,
    /// Declared timeout in milliseconds; the sign is ignored.
    pub timeout_ms: i64,
    /// Shuffle the texts once at construction.
    pub shuffle: bool,
}

impl Default for FadingTextAttrs {
    fn default() -> Self {
        Self {
            texts: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            shuffle: false,
        }
    }
}

impl FadingTextAttrs {
    /// Parses an attribute block such as
    /// `{"texts": ["a", "b"], "timeout_ms": 2000, "shuffle": true}`.
    /// Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| FadeTextError::InvalidAttrs(err.to_string()))
    }

    /// Converts to an effective config.
    #[must_use]
    pub fn into_config(self) -> FadingTextConfig {
        FadingTextConfig {
            texts: self.texts.unwrap_or_default(),
            timeout: Duration::from_millis(self.timeout_ms.unsigned_abs())
                .saturating_add(LONG_ANIMATION_TIME),
            shuffle: self.shuffle,
        }
    }
}

impl From<FadingTextAttrs> for FadingTextConfig {
    fn from(attrs: FadingTextAttrs) -> Self {
        attrs.into_config()
    }
}
