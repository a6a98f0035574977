//! SA configuration and cooling schedules.

use crate::error::ConfigError;

/// Cooling schedule for temperature reduction, applied once per step.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) decay: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.9–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear decay from the initial to the minimum temperature over the
    /// step budget.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for the simulated-annealing solver.
///
/// The defaults reproduce the textbook schedule
/// `T(t) = max(0.01, 100 * 0.95^t)` with a 1000-step budget.
///
/// # Examples
///
/// ```
/// use nqueens_search::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The run stops once the temperature falls to this threshold.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum neighbor evaluations (hard budget).
    pub max_steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.01,
            cooling: CoolingSchedule::default(),
            max_steps: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the minimum temperature.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the step budget.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature {
                name: "initial_temperature",
                value: self.initial_temperature,
            });
        }
        if self.min_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature {
                name: "min_temperature",
                value: self.min_temperature,
            });
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                initial: self.initial_temperature,
                min: self.min_temperature,
            });
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(ConfigError::CoolingFactor { alpha });
            }
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroBound { name: "max_steps" });
        }
        Ok(())
    }
}
