//! Hill-climbing configuration.

use crate::error::ConfigError;

/// Configuration for steepest-ascent hill climbing with random restarts.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Number of random restarts before giving up.
    pub restarts: usize,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    /// Sets the restart bound.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(ConfigError::ZeroBound { name: "restarts" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbingConfig::default();
        assert_eq!(config.restarts, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_restarts() {
        let config = HillClimbingConfig::default().with_restarts(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroBound { name: "restarts" })
        );
    }
}
