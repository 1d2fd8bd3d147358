//! Transcript composition.
//!
//! Turns an [`InputConfig`] into a [`Transcript`] by filling in the template
//! set selected by the perspective. Composition is pure: the same input
//! always gives the same transcript.

use regex::Captures;
use tracing::{debug, warn};

use crate::error::DebateError;
use crate::input::InputConfig;
use crate::participant::{Guest, Speaker};
use crate::perspective::Perspective;
use crate::template::{PLACEHOLDER, TemplateLibrary};
use crate::transcript::{Transcript, Turn};

/// Composes transcripts from a fixed template library.
#[derive(Debug, Clone)]
pub struct Composer {
    library: TemplateLibrary,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(TemplateLibrary::builtin())
    }
}

impl Composer {
    pub fn new(library: TemplateLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Resolve a raw perspective selection against the active library.
    pub fn resolve_perspective(&self, raw: &str) -> Result<Perspective, DebateError> {
        let perspective: Perspective = raw.parse()?;
        if self.library.get(perspective).is_none() {
            return Err(DebateError::UnknownPerspective(raw.to_string()));
        }
        Ok(perspective)
    }

    /// Number of turns a perspective produces.
    pub fn turn_count(&self, perspective: Perspective) -> Option<usize> {
        self.library.get(perspective).map(|set| set.len())
    }

    /// Compose a transcript.
    pub fn compose(&self, config: &InputConfig) -> Result<Transcript, DebateError> {
        config.validate_participants()?;
        let perspective = self.resolve_perspective(&config.perspective)?;
        config.options.validate()?;

        if config.options.has_reserved_flags() {
            warn!(
                enhanced = config.options.enhanced,
                audio = config.options.audio,
                advanced = config.options.advanced,
                "style toggles have no effect on templated debates"
            );
        }

        let set = self
            .library
            .get(perspective)
            .ok_or_else(|| DebateError::UnknownPerspective(config.perspective.clone()))?;

        let topic = config.trimmed_topic();
        let guests = [&config.guests[0], &config.guests[1]];
        let bindings = Bindings {
            topic,
            perspective,
            config,
            guests,
        };

        let turns: Vec<Turn> = set
            .lines()
            .map(|(speaker, template)| Turn {
                speaker,
                text: bindings.interpolate(template, speaker),
            })
            .collect();

        debug!(
            perspective = %perspective,
            turns = turns.len(),
            "composed transcript"
        );

        Ok(Transcript {
            topic: topic.to_string(),
            perspective,
            host: config.host.clone(),
            guests: [guests[0].profile(topic), guests[1].profile(topic)],
            turns,
        })
    }
}

/// Compose with the built-in template library.
pub fn compose(config: &InputConfig) -> Result<Transcript, DebateError> {
    Composer::default().compose(config)
}

/// Values available to templates for one composition.
struct Bindings<'a> {
    topic: &'a str,
    perspective: Perspective,
    config: &'a InputConfig,
    guests: [&'a Guest; 2],
}

impl Bindings<'_> {
    /// Fill every placeholder in `template`. `{guest.*}` refers to the
    /// speaking guest, or guest1 on host lines.
    fn interpolate(&self, template: &str, speaker: Speaker) -> String {
        let current = self.guests[speaker.guest_index().unwrap_or(0)];
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let key = &caps[1];
                match self.lookup(key, current) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    fn lookup<'b>(&'b self, key: &str, current: &'b Guest) -> Option<&'b str> {
        let (scope, field) = match key.split_once('.') {
            Some((scope, field)) => (scope, Some(field)),
            None => (key, None),
        };
        match (scope, field) {
            ("topic", None) => Some(self.topic),
            ("perspective", None) => Some(self.perspective.display_name()),
            ("host", Some("name")) => Some(&self.config.host.name),
            ("host", Some("style")) => Some(&self.config.host.style),
            ("guest", Some(field)) => guest_field(current, field),
            ("guest1", Some(field)) => guest_field(self.guests[0], field),
            ("guest2", Some(field)) => guest_field(self.guests[1], field),
            _ => None,
        }
    }
}

fn guest_field<'a>(guest: &'a Guest, field: &str) -> Option<&'a str> {
    match field {
        "name" => Some(&guest.name),
        "company" => Some(guest.company_or_independent()),
        "characteristic" => Some(&guest.characteristic),
        _ => None,
    }
}
