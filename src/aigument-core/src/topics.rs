//! Sample debate topics.

use rand::Rng;
use rand::seq::SliceRandom;

pub const SAMPLE_TOPICS: &[&str] = &[
    "Should AI be open-sourced?",
    "Universal Basic Income",
    "Should space exploration be privatized?",
    "Is social media good for democracy?",
    "Should college education be free?",
    "Remote work versus the office",
    "Should nuclear power lead the energy transition?",
    "Is economic growth compatible with sustainability?",
];

/// Pick a topic for the "random topic" button.
pub fn random_topic<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_TOPICS
        .choose(rng)
        .copied()
        .unwrap_or(SAMPLE_TOPICS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_topic_is_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(SAMPLE_TOPICS.contains(&random_topic(&mut rng)));
        }
    }

    #[test]
    fn test_random_topic_is_seeded() {
        let a = random_topic(&mut StdRng::seed_from_u64(42));
        let b = random_topic(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
