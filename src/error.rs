//! Error types for configuration validation and the solve facade.
//!
//! Invalid parameters are rejected before any search starts; exhausting a
//! step, restart, or generation bound is a normal outcome, not an error
//! (see [`Outcome`](crate::solve::Outcome)).

use thiserror::Error;

/// An invalid solver parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Board size below 1.
    #[error("board size must be at least 1, got {n}")]
    BoardSize { n: usize },

    /// A step, restart, or generation bound of zero.
    #[error("{name} must be at least 1")]
    ZeroBound { name: &'static str },

    /// A population too small to select two parents from.
    #[error("population_size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },

    /// A tournament nobody can enter.
    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// A temperature that is not strictly positive.
    #[error("{name} must be positive, got {value}")]
    NonPositiveTemperature { name: &'static str, value: f64 },

    /// Minimum temperature at or above the initial temperature.
    #[error("min_temperature {min} must be below initial_temperature {initial}")]
    TemperatureOrder { initial: f64, min: f64 },

    /// A geometric cooling factor outside (0, 1).
    #[error("geometric cooling alpha must be in (0, 1), got {alpha}")]
    CoolingFactor { alpha: f64 },
}

/// Why [`solve`](crate::solve::solve) refused to run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The board size or the selected algorithm's configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
