//! The composed debate record.

use serde::{Deserialize, Serialize};

use crate::participant::{GuestProfile, Host, Speaker};
use crate::perspective::Perspective;

/// One spoken line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// A finished debate, ready for rendering or download.
///
/// Turns are in debate order and are never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transcript {
    pub topic: String,
    pub perspective: Perspective,
    pub host: Host,
    pub guests: [GuestProfile; 2],
    pub turns: Vec<Turn>,
}

impl Transcript {
    /// Name of whoever fills `speaker`'s seat.
    pub fn speaker_name(&self, speaker: Speaker) -> &str {
        match speaker.guest_index() {
            Some(i) => &self.guests[i].name,
            None => &self.host.name,
        }
    }

    /// Turns spoken by `speaker`, in order.
    pub fn turns_by(&self, speaker: Speaker) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(move |t| t.speaker == speaker)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
