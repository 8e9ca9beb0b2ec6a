//! Arcade configuration.
//!
//! Everything tunable about a session lives in `ArcadeConfig`. Front-ends
//! build one from defaults, an optional TOML file and command-line flags.
//! Game rules themselves (coin sides, die faces, the difficulty table) are
//! fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// When the current streak is broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// Only a lost round (stopped or aborted) breaks the streak.
    #[default]
    OnRoundLoss,
    /// Every missed attempt breaks the streak.
    OnEveryMiss,
}

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    /// The same seed replays the same draws for the same inputs.
    pub seed: Option<u64>,

    /// Number of grand-total attempt samples kept for the trend history.
    pub history_capacity: usize,

    /// Upper bound of the daily challenge (lower bound is 1).
    pub daily_bound: u32,

    /// Streak length between celebrated milestones.
    pub streak_milestone: u32,

    /// When a miss breaks the current streak.
    pub streak_policy: StreakPolicy,

    /// Decorative frames shown before a coin flip result.
    pub coin_frames: usize,

    /// Decorative frames shown before a dice roll result.
    pub dice_frames: usize,

    /// Delay between decorative frames (milliseconds).
    pub frame_delay_ms: u64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: 30,
            daily_bound: 100,
            streak_milestone: 3,
            streak_policy: StreakPolicy::OnRoundLoss,
            coin_frames: 10,
            dice_frames: 12,
            frame_delay_ms: 70,
        }
    }
}

impl ArcadeConfig {
    /// Parse a TOML document. Missing keys take their default.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be at least 1");
        self.history_capacity = capacity;
        self
    }

    /// Create a new config with a custom streak policy.
    #[must_use]
    pub fn with_streak_policy(mut self, policy: StreakPolicy) -> Self {
        self.streak_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArcadeConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.history_capacity, 30);
        assert_eq!(config.daily_bound, 100);
        assert_eq!(config.streak_policy, StreakPolicy::OnRoundLoss);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArcadeConfig::default()
            .with_seed(123)
            .with_history_capacity(5)
            .with_streak_policy(StreakPolicy::OnEveryMiss);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.streak_policy, StreakPolicy::OnEveryMiss);
    }

    #[test]
    fn test_partial_toml() {
        let config = ArcadeConfig::from_toml_str(
            "seed = 7\nstreak_policy = \"on_every_miss\"\n",
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.streak_policy, StreakPolicy::OnEveryMiss);
        assert_eq!(config.history_capacity, 30);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ArcadeConfig::from_toml_str("history_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    #[should_panic(expected = "History capacity must be at least 1")]
    fn test_zero_history_capacity() {
        let _ = ArcadeConfig::default().with_history_capacity(0);
    }

    #[test]
    fn test_serialization() {
        let config = ArcadeConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ArcadeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
