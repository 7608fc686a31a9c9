//! # Golden Jackal Optimization Engine
//!
//! The alternate optimizer: a swarm of position vectors ("jackals") driven by
//! prey-encircling pulls toward the two best swarm members and Levy-flight
//! exploration steps. The swarm is re-sorted by fitness after every
//! evaluation pass; the leader positions are snapshotted before an update
//! pass so every jackal sees the leaders as of this iteration's evaluation,
//! not the update in progress.
//!
//! The Levy step uses the Mantegna algorithm at exponent `β = 1.5`, with the
//! stable-distribution scale `σ` derived from the Gamma function.

use statrs::function::gamma::gamma;
use std::f64::consts::PI;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::fitness::FitnessFunction;
use crate::history::FitnessHistory;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

const LEVY_BETA: f64 = 1.5;

/// One swarm member: a position vector clipped to the search bounds after
/// every update, plus the fitness of its last evaluation.
#[derive(Debug, Clone)]
pub struct GoldenJackal {
    position: Vec<f64>,
    /// Fitness of the last evaluation; `f64::INFINITY` until evaluated.
    pub fitness: f64,
}

impl GoldenJackal {
    /// Creates a jackal at a uniformly random position within the bounds.
    pub fn random(num_variables: usize, bounds: (f64, f64), rng: &mut RandomNumberGenerator) -> Self {
        Self {
            position: (0..num_variables)
                .map(|_| rng.uniform(bounds.0, bounds.1))
                .collect(),
            fitness: f64::INFINITY,
        }
    }

    /// The current position.
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Evaluates the jackal's position through the shared fitness contract.
    pub fn evaluate<F: FitnessFunction + ?Sized>(&mut self, fitness_fn: &F) -> f64 {
        let proxy = Individual::from_values(self.position.clone());
        self.fitness = fitness_fn.evaluate(&proxy);
        self.fitness
    }

    /// Replaces the position, clamping every element into the bounds.
    pub fn update_position(&mut self, new_position: Vec<f64>, bounds: (f64, f64)) {
        self.position = new_position
            .into_iter()
            .map(|x| x.clamp(bounds.0, bounds.1))
            .collect();
    }
}

/// The swarm and its iteration state.
#[derive(Debug, Clone)]
pub struct JackalSwarm {
    config: SearchConfig,
    jackals: Vec<GoldenJackal>,
    history: FitnessHistory,
}

impl JackalSwarm {
    /// Creates a randomly initialized swarm.
    ///
    /// Only the search-space fields are validated; the GA-specific fields
    /// (operators, probabilities, elitism) are ignored by this engine.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the configuration fails
    /// [`SearchConfig::validate_search_space`].
    pub fn new(config: SearchConfig, rng: &mut RandomNumberGenerator) -> Result<Self> {
        config.validate_search_space()?;
        let bounds = config.bounds();
        let jackals = (0..config.population_size)
            .map(|_| GoldenJackal::random(config.num_variables, bounds, rng))
            .collect();
        Ok(Self {
            config,
            jackals,
            history: FitnessHistory::new(),
        })
    }

    /// The swarm members, sorted best-first after each evaluation pass.
    pub fn jackals(&self) -> &[GoldenJackal] {
        &self.jackals
    }

    /// The per-iteration fitness history.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// The current best jackal (index 0 after an evaluation pass).
    pub fn best(&self) -> Option<&GoldenJackal> {
        self.jackals.first()
    }

    /// Evaluates every jackal, sorts the swarm best-first under the
    /// optimization direction, and records history.
    pub fn evaluate_all<F: FitnessFunction + ?Sized>(&mut self, fitness_fn: &F) -> Result<()> {
        if self.jackals.len() < 2 {
            return Err(SearchError::Configuration(
                "GJO requires at least 2 jackals for its two leaders".to_string(),
            ));
        }
        for jackal in &mut self.jackals {
            jackal.evaluate(fitness_fn);
        }
        let direction = self.config.optimization;
        self.jackals
            .sort_by(|a, b| direction.compare(a.fitness, b.fitness));

        let avg = self.jackals.iter().map(|j| j.fitness).sum::<f64>() / self.jackals.len() as f64;
        self.history.record(self.jackals[0].fitness, avg);
        Ok(())
    }

    /// Moves every non-leader jackal per the GJO update rules for the given
    /// iteration (1-based), then clamps all positions into the bounds.
    pub fn update_positions(&mut self, iteration: usize, rng: &mut RandomNumberGenerator) {
        // Energy coefficient, decays linearly 2 -> 0 over the run.
        let a = 2.0 - 2.0 * iteration as f64 / self.config.epochs.max(1) as f64;
        let bounds = self.config.bounds();
        let num_variables = self.config.num_variables;

        // Leader snapshots: every jackal in this pass sees the leaders as of
        // the last evaluation, not the update in progress.
        let best = self.jackals[0].position.clone();
        let second = self.jackals[1].position.clone();

        for i in 2..self.jackals.len() {
            let mut new_position = vec![0.0; num_variables];
            for j in 0..num_variables {
                let current = self.jackals[i].position[j];
                new_position[j] = if rng.chance(0.5) {
                    if rng.chance(0.5) {
                        // Levy flight toward the best leader.
                        let step = levy_flight(rng);
                        best[j] + step * (best[j] - current).abs()
                    } else {
                        // Averaged prey-encircling pulls toward both leaders.
                        let x1 = encircle(best[j], current, a, rng);
                        let x2 = encircle(second[j], current, a, rng);
                        (x1 + x2) / 2.0
                    }
                } else if a.abs() < 1.0 {
                    // Late phase: small random walk around the leaders' midpoint.
                    (best[j] + second[j]) / 2.0 + 0.05 * rng.normal(0.0, 1.0)
                } else {
                    // Early phase: long-range jump referencing a random swarm
                    // member (read from the live swarm, possibly already moved).
                    let other = self.jackals[rng.index(self.jackals.len())].position[j];
                    other + rng.uniform(-1.0, 1.0) * (other - current).abs()
                };
            }
            self.jackals[i].update_position(new_position, bounds);
        }
    }

    /// Runs the full configured number of iterations.
    ///
    /// History ends up with `epochs + 1` entries, the first being the initial
    /// evaluation. Returns the best jackal converted to an [`Individual`].
    pub fn run<F: FitnessFunction + ?Sized>(
        &mut self,
        fitness_fn: &F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        self.evaluate_all(fitness_fn)?;
        for iteration in 1..=self.config.epochs {
            self.update_positions(iteration, rng);
            self.evaluate_all(fitness_fn)?;
            if iteration % 10 == 0 {
                debug!(
                    iteration,
                    best_fitness = self.jackals[0].fitness,
                    "GJO progress"
                );
            }
        }

        let best = self.best().ok_or(SearchError::EmptyPopulation)?;
        let mut individual = Individual::from_values(best.position.clone());
        individual.fitness = best.fitness;
        Ok(individual)
    }
}

/// One prey-encircling pull toward a leader with randomized coefficients
/// `A = 2a·r − a` and `C = 2r`.
fn encircle(leader: f64, current: f64, a: f64, rng: &mut RandomNumberGenerator) -> f64 {
    let r1 = rng.uniform(0.0, 1.0);
    let r2 = rng.uniform(0.0, 1.0);
    let coeff_a = 2.0 * a * r1 - a;
    let coeff_c = 2.0 * r2;
    let distance = (coeff_c * leader - current).abs();
    leader - coeff_a * distance
}

/// A Levy-flight step per the Mantegna algorithm at `β = 1.5`.
pub fn levy_flight(rng: &mut RandomNumberGenerator) -> f64 {
    let beta = LEVY_BETA;
    let sigma = (gamma(1.0 + beta) * (PI * beta / 2.0).sin()
        / (gamma((1.0 + beta) / 2.0) * beta * 2f64.powf((beta - 1.0) / 2.0)))
    .powf(1.0 / beta);

    let u = rng.normal(0.0, sigma);
    let v = rng.normal(0.0, 1.0);
    u / v.abs().powf(1.0 / beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Objective;

    fn small_config() -> SearchConfig {
        SearchConfig::builder()
            .bounds(-20.0, 20.0)
            .num_variables(2)
            .population_size(15)
            .epochs(10)
            .seed(11)
            .build()
    }

    #[test]
    fn test_swarm_initializes_within_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let swarm = JackalSwarm::new(small_config(), &mut rng).unwrap();
        assert_eq!(swarm.jackals().len(), 15);
        for jackal in swarm.jackals() {
            for &x in jackal.position() {
                assert!((-20.0..20.0).contains(&x));
            }
        }
    }

    #[test]
    fn test_positions_stay_within_bounds_after_updates() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut swarm = JackalSwarm::new(small_config(), &mut rng).unwrap();
        swarm.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        for iteration in 1..=10 {
            swarm.update_positions(iteration, &mut rng);
            for jackal in swarm.jackals() {
                for &x in jackal.position() {
                    assert!((-20.0..=20.0).contains(&x), "position {} escaped", x);
                }
            }
            swarm.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        }
    }

    #[test]
    fn test_swarm_sorted_best_first_after_evaluation() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let mut swarm = JackalSwarm::new(small_config(), &mut rng).unwrap();
        swarm.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        let fitness: Vec<f64> = swarm.jackals().iter().map(|j| j.fitness).collect();
        for pair in fitness.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_history_includes_initial_iteration() {
        let mut rng = RandomNumberGenerator::from_seed(10);
        let mut swarm = JackalSwarm::new(small_config(), &mut rng).unwrap();
        swarm.run(&Objective::MartinAndGaddy, &mut rng).unwrap();
        assert_eq!(swarm.history().len(), 11); // epochs + 1
    }

    #[test]
    fn test_run_returns_best_as_individual() {
        let mut rng = RandomNumberGenerator::from_seed(12);
        let mut swarm = JackalSwarm::new(small_config(), &mut rng).unwrap();
        let best = swarm.run(&Objective::MartinAndGaddy, &mut rng).unwrap();
        assert_eq!(best.decoded_values.len(), 2);
        assert_eq!(best.fitness, swarm.best().unwrap().fitness);
    }

    #[test]
    fn test_two_jackals_is_the_minimum_swarm() {
        // Both members become leaders; no jackal is left to update, but the
        // run is still well-formed.
        let config = SearchConfig::builder().population_size(2).build();
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut swarm = JackalSwarm::new(config, &mut rng).unwrap();
        assert!(swarm.evaluate_all(&Objective::MartinAndGaddy).is_ok());
    }

    #[test]
    fn test_levy_flight_steps_are_usable() {
        let mut rng = RandomNumberGenerator::from_seed(14);
        for _ in 0..100 {
            let step = levy_flight(&mut rng);
            assert!(!step.is_nan());
        }
    }

    #[test]
    fn test_gjo_improves_on_martin_and_gaddy() {
        let config = SearchConfig::builder()
            .bounds(-20.0, 20.0)
            .num_variables(2)
            .population_size(30)
            .epochs(50)
            .seed(15)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(15);
        let mut swarm = JackalSwarm::new(config, &mut rng).unwrap();
        let best = swarm.run(&Objective::MartinAndGaddy, &mut rng).unwrap();
        let initial = swarm.history().best()[0];
        assert!(best.fitness <= initial);
    }
}
