//! GA evolutionary loop with local-search refinement.

use super::config::GaConfig;
use super::types::Individual;
use crate::board::Board;
use crate::random::rng_from_seed;
use log::debug;
use rand::Rng;

/// Result of a genetic run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest board found during the entire run.
    pub board: Board,
    /// Conflict count of that board; zero exactly when `solved`.
    pub conflicts: usize,
    /// Generations executed.
    pub generations: usize,
    /// Best conflict count in the population at the end of each
    /// generation, starting with the initial population. Non-increasing
    /// when elitism is enabled.
    pub best_history: Vec<usize>,
    /// Whether a zero-conflict board appeared. A false value marks a
    /// partial result.
    pub solved: bool,
}

/// Executes the evolutionary loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the hybrid genetic algorithm.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(n: usize, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");
        let mut rng = rng_from_seed(config.seed);

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::new(Board::random(n, &mut rng)))
            .collect();

        let mut best = find_best(&population).clone();
        let mut best_history = vec![best.conflicts];
        let mut generations = 0;

        for _ in 0..config.max_generations {
            if best.conflicts == 0 {
                break;
            }
            generations += 1;

            let mut next_gen: Vec<Individual> =
                Vec::with_capacity(config.population_size);
            if config.elitism {
                next_gen.push(best.clone());
            }

            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&population, &mut rng);
                let p2 = config.selection.select(&population, &mut rng);

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    crossover(&population[p1].board, &population[p2].board, &mut rng)
                } else {
                    population[p1].board.clone()
                };

                mutate(&mut child, config.mutation_rate, &mut rng);
                refine(&mut child, config.refinement_steps);
                next_gen.push(Individual::new(child));
            }

            population = next_gen;

            let generation_best = find_best(&population);
            if generation_best.conflicts < best.conflicts {
                best = generation_best.clone();
            }
            best_history.push(generation_best.conflicts);
        }

        debug!(
            "genetic n={n}: generations={generations} conflicts={}",
            best.conflicts
        );
        GaResult {
            conflicts: best.conflicts,
            solved: best.conflicts == 0,
            board: best.board,
            generations,
            best_history,
        }
    }
}

/// Single-point crossover over the column-indexed row sequence.
fn crossover<R: Rng>(parent1: &Board, parent2: &Board, rng: &mut R) -> Board {
    let n = parent1.n();
    if n < 2 {
        return parent1.clone();
    }
    let point = rng.random_range(1..n);
    let rows = parent1.rows()[..point]
        .iter()
        .chain(&parent2.rows()[point..])
        .copied()
        .collect();
    Board::new(rows)
}

/// Reassigns each column to a uniformly random row with the per-column
/// mutation probability.
fn mutate<R: Rng>(board: &mut Board, rate: f64, rng: &mut R) {
    let n = board.n();
    for col in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            board.set(col, rng.random_range(0..n));
        }
    }
}

/// The hybrid step: up to `steps` rounds of steepest descent, each taking
/// the single best queen move, stopping early at a local optimum or a
/// solution.
fn refine(board: &mut Board, steps: usize) {
    for _ in 0..steps {
        let current = board.conflicts();
        if current == 0 {
            return;
        }

        let mut best_move = None;
        let mut best_conflicts = current;
        for (neighbor, mv) in board.neighbors() {
            let conflicts = neighbor.conflicts();
            if conflicts < best_conflicts {
                best_conflicts = conflicts;
                best_move = Some(mv);
            }
        }

        match best_move {
            Some(mv) => *board = board.apply(&mv),
            None => return,
        }
    }
}

/// Fittest individual, ties broken by position.
fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .min_by_key(|ind| ind.conflicts)
        .expect("population must not be empty")
}
