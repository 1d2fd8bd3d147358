//! Preset casts for each perspective.
//!
//! Used when the form leaves the participant fields blank.

use crate::participant::{Guest, Host};
use crate::perspective::Perspective;

/// A host and two guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    pub host: Host,
    pub guests: [Guest; 2],
}

impl Cast {
    pub fn guests_vec(&self) -> Vec<Guest> {
        self.guests.to_vec()
    }
}

/// Default host shared by every cast.
pub fn default_host() -> Host {
    Host::new("Dr. Sarah Chen", "Balanced and professional")
}

/// The preset cast for a perspective.
pub fn default_cast(perspective: Perspective) -> Cast {
    let guests = match perspective {
        Perspective::Historical => [
            Guest::new("Ada Lovelace", "Visionary").with_company("Analytical Society"),
            Guest::new("Benjamin Franklin", "Pragmatic").with_company("Junto Club"),
        ],
        Perspective::Modern => [
            Guest::new("Alex Progressive", "Optimistic"),
            Guest::new("Jordan Innovation", "Bold"),
        ],
        Perspective::Mixed => [
            Guest::new("Aristotle", "Measured").with_company("The Lyceum"),
            Guest::new("Jordan Innovation", "Bold"),
        ],
    };
    Cast {
        host: default_host(),
        guests,
    }
}
