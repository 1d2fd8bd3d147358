//! The request record collected from the form layer.

use serde::{Deserialize, Serialize};

use crate::error::DebateError;
use crate::participant::{Guest, Host};

/// Number of guests every debate has.
pub const GUEST_COUNT: usize = 2;

pub const MIN_LENGTH: u8 = 3;
pub const MAX_LENGTH: u8 = 15;
pub const DEFAULT_LENGTH: u8 = 5;

/// Style toggles offered by the form.
///
/// None of these change the composed turns; they are carried through so a
/// richer generator can pick them up later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebateOptions {
    /// Enhanced generation toggle.
    #[serde(default)]
    pub enhanced: bool,
    /// Audio generation toggle. Audio is not implemented.
    #[serde(default)]
    pub audio: bool,
    /// Requested debate length, bounded to [`MIN_LENGTH`]..=[`MAX_LENGTH`].
    #[serde(default = "default_length")]
    pub length: u8,
    /// Advanced mode toggle.
    #[serde(default)]
    pub advanced: bool,
}

fn default_length() -> u8 {
    DEFAULT_LENGTH
}

impl Default for DebateOptions {
    fn default() -> Self {
        Self {
            enhanced: false,
            audio: false,
            length: DEFAULT_LENGTH,
            advanced: false,
        }
    }
}

impl DebateOptions {
    pub fn validate(&self) -> Result<(), DebateError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(DebateError::InvalidLength {
                min: MIN_LENGTH,
                max: MAX_LENGTH,
                actual: self.length,
            });
        }
        Ok(())
    }

    /// True if any toggle that has no effect on composition is switched on.
    pub fn has_reserved_flags(&self) -> bool {
        self.enhanced || self.audio || self.advanced
    }
}

/// One form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    pub topic: String,
    /// Raw perspective selection; resolved against the template library.
    pub perspective: String,
    pub host: Host,
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub options: DebateOptions,
}

impl InputConfig {
    pub fn new(
        topic: impl Into<String>,
        perspective: impl Into<String>,
        host: Host,
        guests: Vec<Guest>,
    ) -> Self {
        Self {
            topic: topic.into(),
            perspective: perspective.into(),
            host,
            guests,
            options: DebateOptions::default(),
        }
    }

    /// Set the style options.
    pub fn with_options(mut self, options: DebateOptions) -> Self {
        self.options = options;
        self
    }

    /// Topic with surrounding whitespace removed.
    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }

    /// Check presence rules: non-empty topic, two guests, length in range.
    ///
    /// The perspective is checked by the composer, which knows which
    /// template sets are active.
    pub fn validate(&self) -> Result<(), DebateError> {
        self.validate_participants()?;
        self.options.validate()
    }

    /// Check the topic and guest count only.
    pub fn validate_participants(&self) -> Result<(), DebateError> {
        if self.trimmed_topic().is_empty() {
            return Err(DebateError::EmptyTopic);
        }
        if self.guests.len() != GUEST_COUNT {
            return Err(DebateError::InvalidGuestCount {
                expected: GUEST_COUNT,
                actual: self.guests.len(),
            });
        }
        Ok(())
    }
}
