//! Utterance template tables.
//!
//! A template set is the ordered list of lines spoken in a debate for one
//! perspective. The tables here are plain data; interpolation lives in the
//! composer and the speaker of each line is fixed by [`speaker_for`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DebateError;
use crate::participant::Speaker;
use crate::perspective::Perspective;

/// Matches any brace-delimited token, well-formed or not, so that
/// validation sees every `{...}` a template contains.
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"));

/// Every placeholder a template may reference.
pub const KNOWN_PLACEHOLDERS: &[&str] = &[
    "topic",
    "perspective",
    "host.name",
    "host.style",
    "guest.name",
    "guest.company",
    "guest.characteristic",
    "guest1.name",
    "guest1.company",
    "guest1.characteristic",
    "guest2.name",
    "guest2.company",
    "guest2.characteristic",
];

/// Smallest set that still has an opening, one exchange and a closing.
pub const MIN_TEMPLATES: usize = 4;

/// Speaker of line `index` in a set of `count` lines.
///
/// Host, guest1, guest2, host, guest1, guest2, ..., host. The first and last
/// lines always belong to the host.
pub fn speaker_for(index: usize, count: usize) -> Speaker {
    if index == 0 || index + 1 >= count {
        return Speaker::Host;
    }
    match index % 3 {
        0 => Speaker::Host,
        1 => Speaker::Guest1,
        _ => Speaker::Guest2,
    }
}

/// Whether `count` lines fit the speaker pattern without the closing host
/// line displacing a guest.
pub fn is_valid_count(count: usize) -> bool {
    count >= MIN_TEMPLATES && (count - 1) % 3 == 0
}

/// Placeholder names referenced by a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Ordered utterance templates for one perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    perspective: Perspective,
    templates: Vec<String>,
}

impl TemplateSet {
    /// Build a set, rejecting bad line counts, blank lines and unknown placeholders.
    pub fn new<I, S>(perspective: Perspective, templates: I) -> Result<Self, DebateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();

        if !is_valid_count(templates.len()) {
            return Err(DebateError::InvalidTemplate(format!(
                "{} set has {} lines; expected at least {} and one more than a multiple of 3",
                perspective,
                templates.len(),
                MIN_TEMPLATES
            )));
        }

        for (i, template) in templates.iter().enumerate() {
            if template.trim().is_empty() {
                return Err(DebateError::InvalidTemplate(format!(
                    "{} set line {} is empty",
                    perspective,
                    i + 1
                )));
            }
            if let Some(unknown) = placeholders(template)
                .into_iter()
                .find(|p| !KNOWN_PLACEHOLDERS.contains(p))
            {
                return Err(DebateError::InvalidTemplate(format!(
                    "{} set line {} uses unknown placeholder {{{}}}",
                    perspective,
                    i + 1,
                    unknown
                )));
            }
        }

        Ok(Self {
            perspective,
            templates,
        })
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates paired with their fixed speaker.
    pub fn lines(&self) -> impl Iterator<Item = (Speaker, &str)> {
        let count = self.templates.len();
        self.templates
            .iter()
            .enumerate()
            .map(move |(i, t)| (speaker_for(i, count), t.as_str()))
    }
}

/// The active mapping from perspective to template set.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    sets: BTreeMap<Perspective, TemplateSet>,
}

impl TemplateLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// The library shipped with the binary, covering every perspective.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for perspective in Perspective::ALL {
            let lines = builtin_templates(perspective).iter().copied();
            let set = TemplateSet::new(perspective, lines).expect("built-in template sets are valid");
            library.insert(set);
        }
        library
    }

    /// Add or replace the set for its perspective.
    pub fn insert(&mut self, set: TemplateSet) -> Option<TemplateSet> {
        self.sets.insert(set.perspective(), set)
    }

    pub fn get(&self, perspective: Perspective) -> Option<&TemplateSet> {
        self.sets.get(&perspective)
    }

    /// Perspectives this library can compose.
    pub fn perspectives(&self) -> Vec<Perspective> {
        self.sets.keys().copied().collect()
    }
}

/// Raw built-in lines for a perspective.
pub fn builtin_templates(perspective: Perspective) -> &'static [&'static str] {
    match perspective {
        Perspective::Historical => HISTORICAL,
        Perspective::Modern => MODERN,
        Perspective::Mixed => MIXED,
    }
}

const HISTORICAL: &[&str] = &[
    "Welcome to AIGUMENT. I'm {host.name}, and tonight two voices from history take on a question for the ages: {topic}.",
    "Thank you. Speaking as someone shaped by a very different era, I find my {guest1.characteristic} temperament drawn to {topic} as a test of principle before practice.",
    "With respect to {guest1.name}, history has taught me to be {guest2.characteristic}. Every age believes its version of {topic} is new, and every age is wrong about that.",
    "Let's stay with the lessons of the past. {guest1.name}, what would your contemporaries have made of {topic}?",
    "They would have asked who benefits. Whenever {topic} has come up before, those who moved first set the terms for everyone who followed.",
    "And they would have been too hasty. On {topic}, patience has served civilizations better than boldness, whatever {guest1.name} may claim.",
    "A fitting place to pause. Thank you {guest1.name} and {guest2.name} for carrying the long view of {topic} into the present. I'm {host.name}, and this has been AIGUMENT.",
];

const MODERN: &[&str] = &[
    "Welcome to AIGUMENT. I'm {host.name}, and today's debate asks a question on everyone's mind: {topic}.",
    "Thanks for having me. I'm {guest1.characteristic} about {topic}; the data I see points toward real, measurable gains.",
    "I'd push back on that. Being {guest2.characteristic} means asking hard questions, and on {topic} the second-order effects are where the real story is.",
    "Let's dig into those positions. {guest2.name}, what do you say to the evidence {guest1.name} is pointing to?",
    "The evidence is clear enough that waiting is its own decision. If we get {topic} right, the upside is enormous.",
    "Getting {topic} right means designing it carefully. Speaking as {guest.name}, I would rather be second and correct than first and reckless.",
    "We'll have to leave it there. Thank you {guest1.name} and {guest2.name} for a lively exchange on {topic}. I'm {host.name}, and this has been AIGUMENT.",
];

const MIXED: &[&str] = &[
    "Welcome to AIGUMENT, where historical and modern minds collide. I'm {host.name}, and our topic is {topic}.",
    "It is an honour to speak across the centuries. My {guest1.characteristic} instincts tell me that {topic} is an old question wearing new clothes.",
    "And my {guest2.characteristic} instincts tell me that {topic} really is new. The scale changes everything.",
    "Two eras, two readings. {guest1.name}, does scale change the moral question behind {topic}?",
    "Scale magnifies the question; it does not replace it. The people affected by {topic} are the same people they always were.",
    "But the tools are not the same tools. Today we can measure the effects of {topic} as they happen, and adjust.",
    "Let's turn to consequences. What does each of you fear most about getting {topic} wrong?",
    "I fear that we forget what was learned at great cost. Every generation that ignored history on {topic} paid for it.",
    "I fear paralysis. Treating {topic} as a settled lesson would leave the people who need change waiting for it.",
    "History and the present have both had their say. Thank you {guest1.name} and {guest2.name}. I'm {host.name}, and this has been AIGUMENT on {topic}.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_pattern_seven_lines() {
        let speakers: Vec<Speaker> = (0..7).map(|i| speaker_for(i, 7)).collect();
        assert_eq!(
            speakers,
            vec![
                Speaker::Host,
                Speaker::Guest1,
                Speaker::Guest2,
                Speaker::Host,
                Speaker::Guest1,
                Speaker::Guest2,
                Speaker::Host,
            ]
        );
    }

    #[test]
    fn test_speaker_pattern_host_bookends() {
        for count in [4, 7, 10, 13] {
            assert_eq!(speaker_for(0, count), Speaker::Host);
            assert_eq!(speaker_for(count - 1, count), Speaker::Host);
        }
    }

    #[test]
    fn test_valid_counts() {
        assert!(is_valid_count(4));
        assert!(is_valid_count(7));
        assert!(is_valid_count(10));
        assert!(!is_valid_count(1));
        assert!(!is_valid_count(3));
        assert!(!is_valid_count(5));
        assert!(!is_valid_count(6));
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            placeholders("{host.name} asks {guest1.name} about {topic}"),
            vec!["host.name", "guest1.name", "topic"]
        );
        assert!(placeholders("no placeholders here").is_empty());
    }

    #[test]
    fn test_builtin_counts() {
        let library = TemplateLibrary::builtin();
        assert_eq!(library.get(Perspective::Historical).unwrap().len(), 7);
        assert_eq!(library.get(Perspective::Modern).unwrap().len(), 7);
        assert_eq!(library.get(Perspective::Mixed).unwrap().len(), 10);
        assert_eq!(library.perspectives(), Perspective::ALL.to_vec());
    }

    #[test]
    fn test_builtin_openings_reference_topic() {
        for perspective in Perspective::ALL {
            let lines = builtin_templates(perspective);
            assert!(lines[0].contains("{topic}"));
            assert!(lines[lines.len() - 1].contains("{host.name}"));
        }
    }

    #[test]
    fn test_rejects_bad_count() {
        let err = TemplateSet::new(Perspective::Modern, ["a", "b", "c", "d", "e"]).unwrap_err();
        assert!(matches!(err, DebateError::InvalidTemplate(_)));
    }

    #[test]
    fn test_rejects_unknown_placeholder() {
        let err = TemplateSet::new(
            Perspective::Modern,
            ["Hi {topic}", "{guest1.shoe_size}", "b", "c"],
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown placeholder"));
    }

    #[test]
    fn test_rejects_malformed_placeholders() {
        for bad in ["{Topic}", "{host.Name}", "{ topic }", "{guest1.name.first}", "{}"] {
            let line = format!("Welcome to {}", bad);
            let err = TemplateSet::new(Perspective::Modern, [line.as_str(), "a", "b", "Bye"])
                .unwrap_err();
            assert!(
                err.to_string().contains(&format!("unknown placeholder {}", bad)),
                "{} was accepted: {}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_placeholders_sees_malformed_tokens() {
        assert_eq!(
            placeholders("{Topic} and { topic } and {guest1.name.first}"),
            vec!["Topic", " topic ", "guest1.name.first"]
        );
    }

    #[test]
    fn test_rejects_blank_line() {
        let err = TemplateSet::new(Perspective::Mixed, ["Hi {topic}", "  ", "b", "c"]).unwrap_err();
        assert!(err.to_string().contains("line 2 is empty"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut library = TemplateLibrary::builtin();
        let short = TemplateSet::new(Perspective::Modern, ["{topic}", "a", "b", "c"]).unwrap();
        let previous = library.insert(short);
        assert_eq!(previous.map(|s| s.len()), Some(7));
        assert_eq!(library.get(Perspective::Modern).unwrap().len(), 4);
    }

    #[test]
    fn test_lines_assign_speakers() {
        let set = TemplateSet::new(Perspective::Modern, ["{topic}", "a", "b", "c"]).unwrap();
        let speakers: Vec<Speaker> = set.lines().map(|(s, _)| s).collect();
        assert_eq!(
            speakers,
            vec![Speaker::Host, Speaker::Guest1, Speaker::Guest2, Speaker::Host]
        );
    }
}
