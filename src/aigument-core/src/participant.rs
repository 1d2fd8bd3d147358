//! Debate participant definitions.
//!
//! Hosts and guests are personas: their text is interpolated into the
//! transcript, it never changes which lines are spoken.

use serde::{Deserialize, Serialize};

/// Rendered in place of an empty guest company.
pub const INDEPENDENT_COMPANY: &str = "independent";

/// Who speaks a turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The moderator who opens and closes the debate.
    Host,
    /// First guest; always speaks before the second guest.
    Guest1,
    /// Second guest.
    Guest2,
}

impl Speaker {
    pub fn display_name(&self) -> &str {
        match self {
            Speaker::Host => "HOST",
            Speaker::Guest1 => "GUEST 1",
            Speaker::Guest2 => "GUEST 2",
        }
    }

    /// Index into the guest pair, `None` for the host.
    pub fn guest_index(&self) -> Option<usize> {
        match self {
            Speaker::Host => None,
            Speaker::Guest1 => Some(0),
            Speaker::Guest2 => Some(1),
        }
    }
}

/// The debate host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    /// Free-text moderation style, e.g. "Balanced and professional".
    pub style: String,
}

impl Host {
    pub fn new(name: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
        }
    }
}

/// A guest as entered on the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub name: String,
    /// Company or affiliation; may be empty.
    #[serde(default)]
    pub company: String,
    pub characteristic: String,
}

impl Guest {
    pub fn new(name: impl Into<String>, characteristic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: String::new(),
            characteristic: characteristic.into(),
        }
    }

    /// Set the guest's company or affiliation.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Company as it appears in spoken lines.
    pub fn company_or_independent(&self) -> &str {
        let company = self.company.trim();
        if company.is_empty() {
            INDEPENDENT_COMPANY
        } else {
            company
        }
    }

    /// Derive the one-line stance shown next to the guest's name.
    pub fn stance(&self, topic: &str) -> String {
        let characteristic = capitalize(self.characteristic.trim());
        let company = self.company.trim();
        if company.is_empty() {
            format!("{} views regarding {}", characteristic, topic)
        } else {
            format!(
                "{} views regarding {}, from the perspective of {}",
                characteristic, topic, company
            )
        }
    }

    /// The guest as it appears in a finished transcript.
    pub fn profile(&self, topic: &str) -> GuestProfile {
        GuestProfile {
            name: self.name.clone(),
            stance: self.stance(topic),
            company: self.company.clone(),
        }
    }
}

/// A guest in a composed transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestProfile {
    pub name: String,
    pub stance: String,
    pub company: String,
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
