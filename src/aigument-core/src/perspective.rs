//! Debate perspectives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DebateError;

/// Framing of a debate; selects which template set is used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    /// Figures from history.
    Historical,
    /// Contemporary voices.
    Modern,
    /// One historical and one modern guest.
    Mixed,
}

impl Perspective {
    pub const ALL: [Perspective; 3] = [
        Perspective::Historical,
        Perspective::Modern,
        Perspective::Mixed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Perspective::Historical => "historical",
            Perspective::Modern => "modern",
            Perspective::Mixed => "mixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Perspective::Historical => "Historical",
            Perspective::Modern => "Modern",
            Perspective::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Perspective {
    type Err = DebateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "historical" => Ok(Perspective::Historical),
            "modern" => Ok(Perspective::Modern),
            "mixed" => Ok(Perspective::Mixed),
            _ => Err(DebateError::UnknownPerspective(s.to_string())),
        }
    }
}

/// List all perspective names.
pub fn available_perspectives() -> Vec<&'static str> {
    Perspective::ALL.iter().map(|p| p.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Modern".parse::<Perspective>().unwrap(), Perspective::Modern);
        assert_eq!(" HISTORICAL ".parse::<Perspective>().unwrap(), Perspective::Historical);
        assert_eq!("mixed".parse::<Perspective>().unwrap(), Perspective::Mixed);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Futuristic".parse::<Perspective>().unwrap_err();
        assert!(matches!(err, DebateError::UnknownPerspective(ref p) if p == "Futuristic"));
    }

    #[test]
    fn test_available_perspectives() {
        assert_eq!(available_perspectives(), vec!["historical", "modern", "mixed"]);
    }
}
