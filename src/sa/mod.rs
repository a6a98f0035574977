//! Simulated Annealing (SA).
//!
//! A single-solution trajectory search inspired by the physical annealing
//! process. Worsening single-queen moves are accepted with a probability
//! that shrinks as the temperature cools, letting the search escape local
//! optima early and settle later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
