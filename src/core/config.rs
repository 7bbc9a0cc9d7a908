//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the deal. `None` seeds from OS entropy.
    /// Same seed produces the same deal and the same restarts.
    pub seed: Option<u64>,

    /// Number of undo snapshots retained (0 = undo disabled).
    /// The oldest snapshot is evicted first.
    pub history_capacity: usize,

    /// Maximum number of entries kept in a score book.
    pub max_high_scores: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: 50,
            max_high_scores: 50,
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the undo history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the score book size.
    #[must_use]
    pub fn with_max_high_scores(mut self, max: usize) -> Self {
        self.max_high_scores = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.max_high_scores, 50);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_history_capacity(5)
            .with_max_high_scores(10);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.max_high_scores, 10);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 4}"#).unwrap();
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.history_capacity, 50);
    }
}
