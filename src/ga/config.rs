//! GA configuration.

use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the hybrid genetic solver.
///
/// # Examples
///
/// ```
/// use nqueens_search::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_selection(Selection::Roulette)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of boards in the population.
    pub population_size: usize,

    /// Maximum generations before termination.
    pub max_generations: usize,

    /// Probability of recombining two parents (0.0–1.0); otherwise a
    /// clone of the first parent is used.
    pub crossover_rate: f64,

    /// Per-column probability of reassigning an offspring's queen to a
    /// uniformly random row (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent-selection strategy.
    pub selection: Selection,

    /// Carry the fittest board unchanged into the next generation.
    pub elitism: bool,

    /// Hill-climbing passes applied to each offspring (the hybrid step);
    /// 0 disables refinement.
    pub refinement_steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            selection: Selection::default(),
            elitism: true,
            refinement_steps: 2,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the crossover rate, clamped to [0, 1].
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-column mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the refinement budget per offspring (0 disables the hybrid
    /// step).
    pub fn with_refinement_steps(mut self, steps: usize) -> Self {
        self.refinement_steps = steps;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroBound {
                name: "max_generations",
            });
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!(config.elitism);
        assert_eq!(config.refinement_steps, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(120)
            .with_max_generations(250)
            .with_selection(Selection::Roulette)
            .with_elitism(false)
            .with_refinement_steps(0)
            .with_seed(42);

        assert_eq!(config.population_size, 120);
        assert_eq!(config.max_generations, 250);
        assert_eq!(config.selection, Selection::Roulette);
        assert!(!config.elitism);
        assert_eq!(config.refinement_steps, 0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_rates_are_clamped() {
        let config = GaConfig::default()
            .with_crossover_rate(1.5)
            .with_mutation_rate(-0.5);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PopulationTooSmall { size: 1 })
        );
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_tournament() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert_eq!(config.validate(), Err(ConfigError::EmptyTournament));
    }
}
