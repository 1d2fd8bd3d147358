//! Configuration module for loading TOML config files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::DebateError;
use crate::input::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::persona::default_host;
use crate::perspective::Perspective;
use crate::template::{TemplateLibrary, TemplateSet};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Form defaults used when the caller leaves a field out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub perspective: String,
    pub host_name: String,
    pub host_style: String,
    pub length: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let host = default_host();
        Self {
            perspective: Perspective::Modern.name().to_string(),
            host_name: host.name,
            host_style: host.style,
            length: DEFAULT_LENGTH,
        }
    }
}

/// Template sets replacing the built-in ones; absent keys keep the built-in set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatesConfig {
    pub historical: Option<Vec<String>>,
    pub modern: Option<Vec<String>>,
    pub mixed: Option<Vec<String>>,
}

impl TemplatesConfig {
    fn get(&self, perspective: Perspective) -> Option<&Vec<String>> {
        match perspective {
            Perspective::Historical => self.historical.as_ref(),
            Perspective::Modern => self.modern.as_ref(),
            Perspective::Mixed => self.mixed.as_ref(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DebateError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| DebateError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_str(&content)
    }

    /// Load configuration from string content.
    pub fn from_str(content: &str) -> Result<Self, DebateError> {
        let config: Config = toml::from_str(content)
            .map_err(|e| DebateError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DebateError> {
        self.defaults
            .perspective
            .parse::<Perspective>()
            .map_err(|_| {
                DebateError::ConfigError(format!(
                    "Unknown default perspective: {}",
                    self.defaults.perspective
                ))
            })?;
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.defaults.length) {
            return Err(DebateError::ConfigError(format!(
                "Default length must be {}-{}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.defaults.length
            )));
        }
        Ok(())
    }

    /// Default perspective as an enum.
    pub fn default_perspective(&self) -> Perspective {
        self.defaults
            .perspective
            .parse()
            .unwrap_or(Perspective::Modern)
    }

    /// Build the active template library: built-in sets with overrides applied.
    pub fn template_library(&self) -> Result<TemplateLibrary, DebateError> {
        let mut library = TemplateLibrary::builtin();
        for perspective in Perspective::ALL {
            if let Some(lines) = self.templates.get(perspective) {
                library.insert(TemplateSet::new(perspective, lines.iter().cloned())?);
            }
        }
        Ok(library)
    }
}

/// Default configuration embedded in the binary.
pub fn default_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.default_perspective(), Perspective::Modern);
        assert_eq!(config.defaults.host_name, "Dr. Sarah Chen");
        assert_eq!(config.defaults.length, DEFAULT_LENGTH);
        assert_eq!(config.template_library().unwrap().perspectives().len(), 3);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.defaults.perspective, "modern");
        assert!(config.templates.modern.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_str(
            r#"
[defaults]
perspective = "Historical"
host_name = "Walter"

[templates]
modern = [
    "Hello and welcome, the topic is {topic}.",
    "{guest1.name} agrees.",
    "{guest2.name} disagrees.",
    "Goodnight from {host.name}.",
]
"#,
        )
        .unwrap();

        assert_eq!(config.default_perspective(), Perspective::Historical);
        assert_eq!(config.defaults.host_name, "Walter");
        assert_eq!(config.defaults.host_style, "Balanced and professional");

        let library = config.template_library().unwrap();
        assert_eq!(library.get(Perspective::Modern).unwrap().len(), 4);
        assert_eq!(library.get(Perspective::Mixed).unwrap().len(), 10);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let config = Config::from_str(
            r#"
[templates]
mixed = ["only {topic}", "two"]
"#,
        )
        .unwrap();
        assert!(matches!(
            config.template_library(),
            Err(DebateError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_bad_default_perspective() {
        let err = Config::from_str("[defaults]\nperspective = \"Futuristic\"\n").unwrap_err();
        assert!(matches!(err, DebateError::ConfigError(_)));
    }

    #[test]
    fn test_bad_default_length() {
        for length in [0, 2, 16, 200] {
            let err = Config::from_str(&format!("[defaults]\nlength = {}\n", length)).unwrap_err();
            assert!(matches!(err, DebateError::ConfigError(ref msg) if msg.contains("length")));
        }
        assert!(Config::from_str("[defaults]\nlength = 15\n").is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("aigument.toml");
        fs::write(&path, "[defaults]\nlength = 9\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.defaults.length, 9);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/aigument.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
