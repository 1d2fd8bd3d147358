//! Caller-owned session state.
//!
//! Holds the last composed transcript between renders. A new transcript
//! replaces the old one only once composition has succeeded.

use tracing::info;

use crate::composer::Composer;
use crate::error::DebateError;
use crate::input::InputConfig;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Option<Transcript>,
    generations: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose and keep the result. On error the previous transcript stays.
    pub fn generate(
        &mut self,
        composer: &Composer,
        config: &InputConfig,
    ) -> Result<&Transcript, DebateError> {
        let transcript = composer.compose(config)?;
        self.generations += 1;
        info!(
            generation = self.generations,
            topic = %transcript.topic,
            "new transcript"
        );
        Ok(&*self.current.insert(transcript))
    }

    /// Discard the current transcript ("generate new").
    pub fn reset(&mut self) -> Option<Transcript> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Transcript> {
        self.current.as_ref()
    }

    /// Successful generations in this session.
    pub fn generations(&self) -> u32 {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::{Guest, Host};

    fn config(topic: &str) -> InputConfig {
        InputConfig::new(
            topic,
            "Historical",
            Host::new("Host", "Calm"),
            vec![Guest::new("A", "Bold"), Guest::new("B", "Wary")],
        )
    }

    #[test]
    fn test_generate_replaces() {
        let composer = Composer::default();
        let mut session = SessionState::new();
        session.generate(&composer, &config("Tariffs")).unwrap();
        session.generate(&composer, &config("Taxes")).unwrap();
        assert_eq!(session.current().unwrap().topic, "Taxes");
        assert_eq!(session.generations(), 2);
    }

    #[test]
    fn test_failed_generate_keeps_previous() {
        let composer = Composer::default();
        let mut session = SessionState::new();
        session.generate(&composer, &config("Tariffs")).unwrap();
        assert!(session.generate(&composer, &config("")).is_err());
        assert_eq!(session.current().unwrap().topic, "Tariffs");
        assert_eq!(session.generations(), 1);
    }

    #[test]
    fn test_reset_discards() {
        let composer = Composer::default();
        let mut session = SessionState::new();
        session.generate(&composer, &config("Tariffs")).unwrap();
        let previous = session.reset();
        assert_eq!(previous.map(|t| t.topic), Some("Tariffs".to_string()));
        assert!(session.current().is_none());
    }
}
