//! # Engine Entry Points
//!
//! [`run_ga`] and [`run_gjo`] are the narrow interface the outer layers (UI,
//! batch harness, reporting) consume: hand in a configuration, get back the
//! best individual, the elapsed wall-clock time, and the full per-iteration
//! fitness history.
//!
//! ## Example
//!
//! ```rust
//! use evopt::config::SearchConfig;
//! use evopt::engine::run_ga;
//!
//! let config = SearchConfig::builder()
//!     .population_size(20)
//!     .epochs(10)
//!     .seed(42)
//!     .build();
//!
//! let outcome = run_ga(&config).unwrap();
//! assert_eq!(outcome.history.len(), 11);
//! assert!(outcome.best.fitness.is_finite());
//! ```

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::gjo::JackalSwarm;
use crate::history::FitnessHistory;
use crate::individual::Individual;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// The result of one optimization run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The best individual of the run, with decoded values and fitness.
    pub best: Individual,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Best and average fitness per iteration, including the initial state.
    pub history: FitnessHistory,
}

fn make_rng(config: &SearchConfig) -> RandomNumberGenerator {
    match config.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

/// Runs the genetic algorithm with the given configuration.
///
/// # Errors
///
/// Returns a `Configuration` error for an invalid configuration or an
/// operator combination the strict dispatch paths reject (selection,
/// crossover).
pub fn run_ga(config: &SearchConfig) -> Result<RunOutcome> {
    let mut rng = make_rng(config);
    let start = Instant::now();

    let mut population = Population::new(config.clone(), &mut rng)?;
    let best = population.run(&config.objective, &mut rng)?;

    let elapsed = start.elapsed();
    info!(
        best_fitness = best.fitness,
        elapsed_secs = elapsed.as_secs_f64(),
        "GA run complete"
    );
    Ok(RunOutcome {
        best,
        elapsed,
        history: population.history().clone(),
    })
}

/// Runs golden jackal optimization with the given configuration.
///
/// The GA-specific fields (selection, crossover, mutation, elitism) are
/// ignored; only bounds, variable count, swarm size, epochs, direction, and
/// seed apply.
pub fn run_gjo(config: &SearchConfig) -> Result<RunOutcome> {
    let mut rng = make_rng(config);
    let start = Instant::now();

    let mut swarm = JackalSwarm::new(config.clone(), &mut rng)?;
    let best = swarm.run(&config.objective, &mut rng)?;

    let elapsed = start.elapsed();
    info!(
        best_fitness = best.fitness,
        elapsed_secs = elapsed.as_secs_f64(),
        "GJO run complete"
    );
    Ok(RunOutcome {
        best,
        elapsed,
        history: swarm.history().clone(),
    })
}
