//! Core-facing facade: pick an algorithm, hand over options, get back a
//! statistics record.
//!
//! The external driver (menu, reporter, benchmark) is expected to call
//! [`solve`] with an [`Algorithm`] and [`SolveOptions`] and render the
//! returned [`SearchStats`] itself; nothing in this module prints.

mod engine;
mod types;

pub use engine::solve;
pub use types::{Algorithm, Outcome, SearchStats, SolveOptions};
