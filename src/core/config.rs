//! Session configuration.
//!
//! Consumers configure a session at startup either through the builder
//! methods or from a TOML document:
//!
//! ```
//! use syllable_memory::core::{ExhaustionPolicy, SessionConfig};
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     seed = 7
//!     exhaustion = "stop"
//!     resource_dir = "assets/words"
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.exhaustion, ExhaustionPolicy::Stop);
//! assert_eq!(config.resolve_delay_ms, 300);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// What a session does when fewer than three unused words remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Reshuffle the whole pool and start again from its beginning.
    #[default]
    Reshuffle,
    /// Refuse to start another round.
    Stop,
}

/// Configuration for a [`Session`](crate::session::Session).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for pool and board shuffling. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Behaviour once the pool runs out.
    pub exhaustion: ExhaustionPolicy,

    /// Directory holding `vocabulary.txt` plus the audio and picture files.
    pub resource_dir: PathBuf,

    /// Cap on the number of words taken from the vocabulary. `None` for all.
    pub max_words: Option<usize>,

    /// Delay the presentation layer waits between a complete selection and
    /// resolving it. The core never sleeps.
    pub resolve_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            exhaustion: ExhaustionPolicy::default(),
            resource_dir: PathBuf::from("vocabulary"),
            max_words: None,
            resolve_delay_ms: 300,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the exhaustion policy.
    #[must_use]
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Set the resource directory.
    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Cap the number of vocabulary words.
    #[must_use]
    pub fn with_max_words(mut self, max: usize) -> Self {
        self.max_words = Some(max);
        self
    }

    /// Set the resolve delay hint.
    #[must_use]
    pub fn with_resolve_delay_ms(mut self, delay: u64) -> Self {
        self.resolve_delay_ms = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Reshuffle);
        assert_eq!(config.resource_dir, PathBuf::from("vocabulary"));
        assert_eq!(config.max_words, None);
        assert_eq!(config.resolve_delay_ms, 300);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_seed(9)
            .with_exhaustion(ExhaustionPolicy::Stop)
            .with_resource_dir("words")
            .with_max_words(350)
            .with_resolve_delay_ms(0);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.exhaustion, ExhaustionPolicy::Stop);
        assert_eq!(config.resource_dir, PathBuf::from("words"));
        assert_eq!(config.max_words, Some(350));
        assert_eq!(config.resolve_delay_ms, 0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = SessionConfig::from_toml_str("exhaustion = \"sometimes\"").unwrap_err();
        assert!(matches!(err, crate::core::SyllableMemoryError::Config(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SessionConfig::new().with_seed(3).with_max_words(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
