//! # Population / GA Engine
//!
//! The [`Population`] owns one generation of individuals and drives the
//! evolution loop: evaluate, select a mating pool, carry the elites, breed
//! offspring through crossover/mutation/inversion, and replace the
//! generation. The population size is constant: elites plus offspring always
//! sum to exactly `population_size`.
//!
//! Per-generation telemetry (generation-best and average fitness) is appended
//! to a [`FitnessHistory`], index 0 being the initial evaluation before any
//! evolution step. The running best-of-all-time individual is updated by
//! strict improvement only: ties keep the incumbent.

use tracing::debug;

use crate::chromosome::Chromosome;
use crate::config::{CrossoverMethod, Encoding, OptimizationType, SearchConfig, SelectionMethod};
use crate::error::{Result, SearchError};
use crate::fitness::FitnessFunction;
use crate::history::FitnessHistory;
use crate::individual::Individual;
use crate::operators::{crossover, inversion, selection};
use crate::rng::RandomNumberGenerator;

/// One generation of individuals plus the evolution-loop state.
#[derive(Debug, Clone)]
pub struct Population {
    config: SearchConfig,
    individuals: Vec<Individual>,
    generation: usize,
    best_individual: Option<Individual>,
    history: FitnessHistory,
}

impl Population {
    /// Creates a randomly initialized population.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the configuration fails
    /// [`SearchConfig::validate`].
    pub fn new(config: SearchConfig, rng: &mut RandomNumberGenerator) -> Result<Self> {
        config.validate()?;
        let individuals = (0..config.population_size)
            .map(|_| Individual::random(&config, rng))
            .collect();
        Ok(Self {
            config,
            individuals,
            generation: 0,
            best_individual: None,
            history: FitnessHistory::new(),
        })
    }

    /// The current generation counter.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current individuals.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// The best individual seen so far across all generations.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.best_individual.as_ref()
    }

    /// The per-generation fitness history.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Evaluates every individual, records history, and updates the running
    /// best-of-all-time.
    pub fn evaluate_all<F: FitnessFunction + ?Sized>(&mut self, fitness_fn: &F) -> Result<()> {
        if self.individuals.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        let bounds = self.config.bounds();
        for individual in &mut self.individuals {
            individual.evaluate(fitness_fn, bounds);
        }

        let direction = self.config.optimization;
        let generation_best = self
            .individuals
            .iter()
            .min_by(|a, b| direction.compare(a.fitness, b.fitness))
            .ok_or(SearchError::EmptyPopulation)?
            .clone();

        let avg = self.individuals.iter().map(|ind| ind.fitness).sum::<f64>()
            / self.individuals.len() as f64;
        self.history.record(generation_best.fitness, avg);

        let improved = match &self.best_individual {
            Some(incumbent) => direction.is_improvement(generation_best.fitness, incumbent.fitness),
            None => true,
        };
        if improved {
            self.best_individual = Some(generation_best);
        }
        Ok(())
    }

    /// Selects the mating pool with the configured method.
    ///
    /// Roulette selection is minimization-only: it is rejected under
    /// maximization and with non-positive fitness values in the pool.
    fn select_parents(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<Individual>> {
        let direction = self.config.optimization;
        match self.config.selection {
            SelectionMethod::Best { amount } => Ok(selection::best_selection(
                &self.individuals,
                amount,
                direction,
            )),
            SelectionMethod::Roulette => {
                if direction == OptimizationType::Maximize {
                    return Err(SearchError::Configuration(
                        "Roulette selection supports minimization only".to_string(),
                    ));
                }
                selection::roulette_selection(&self.individuals, self.individuals.len(), rng)
            }
            SelectionMethod::Tournament { size } => {
                selection::tournament_selection(&self.individuals, size, direction, rng)
            }
        }
    }

    /// Recombines a parent pair into two offspring with the configured
    /// crossover method.
    ///
    /// Binary operators that degrade (mismatched or too-short chromosomes)
    /// fall back to cloning the parents' chromosomes.
    fn crossover_pair(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        match self.config.encoding {
            Encoding::Real => {
                let v1 = &parent1.decoded_values;
                let v2 = &parent2.decoded_values;
                let (genes1, genes2) = match self.config.crossover {
                    CrossoverMethod::Arithmetic => crossover::arithmetic(v1, v2, rng),
                    CrossoverMethod::Linear => crossover::linear(v1, v2),
                    CrossoverMethod::BlendAlpha => crossover::blend_alpha(v1, v2, 0.5, rng),
                    CrossoverMethod::BlendAlphaBeta => {
                        crossover::blend_alpha_beta(v1, v2, 0.75, 0.25, rng)
                    }
                    CrossoverMethod::Averaging => crossover::averaging(v1, v2),
                    other => {
                        return Err(SearchError::Configuration(format!(
                            "Crossover method {:?} is incompatible with Real encoding",
                            other
                        )))
                    }
                };
                let mut child1 = Individual::offspring_shell(&self.config);
                let mut child2 = Individual::offspring_shell(&self.config);
                set_real_genes(&mut child1, genes1)?;
                set_real_genes(&mut child2, genes2)?;
                Ok((child1, child2))
            }
            Encoding::Binary => {
                let mut chromosomes1 = Vec::with_capacity(parent1.chromosomes().len());
                let mut chromosomes2 = Vec::with_capacity(parent2.chromosomes().len());
                for (a, b) in parent1.chromosomes().iter().zip(parent2.chromosomes()) {
                    let (Chromosome::Binary(bits1), Chromosome::Binary(bits2)) = (a, b) else {
                        return Err(SearchError::Configuration(
                            "Binary crossover on a non-binary chromosome".to_string(),
                        ));
                    };
                    let pair = match self.config.crossover {
                        CrossoverMethod::SinglePoint => crossover::single_point(bits1, bits2, rng),
                        CrossoverMethod::TwoPoint => crossover::two_point(bits1, bits2, rng),
                        CrossoverMethod::Uniform => crossover::uniform(bits1, bits2, rng),
                        other => {
                            return Err(SearchError::Configuration(format!(
                                "Crossover method {:?} is incompatible with Binary encoding",
                                other
                            )))
                        }
                    };
                    match pair {
                        Some((c1, c2)) => {
                            chromosomes1.push(Chromosome::Binary(c1));
                            chromosomes2.push(Chromosome::Binary(c2));
                        }
                        // Degraded operator: fall back to the parents' material.
                        None => {
                            chromosomes1.push(a.clone());
                            chromosomes2.push(b.clone());
                        }
                    }
                }
                Ok((
                    Individual::from_chromosomes(chromosomes1),
                    Individual::from_chromosomes(chromosomes2),
                ))
            }
        }
    }

    /// Runs one generation: selection, elitism, breeding, replacement.
    ///
    /// Requires an evaluated population (fitness values current).
    pub fn evolve(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        let parents = self.select_parents(rng)?;
        if parents.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }

        let elites = selection::best_selection(
            &self.individuals,
            self.config.elite_size,
            self.config.optimization,
        );
        let num_offspring = self.config.population_size - elites.len();

        let mut offspring: Vec<Individual> = Vec::with_capacity(num_offspring);
        while offspring.len() < num_offspring {
            let parent1 = &parents[rng.index(parents.len())];
            let parent2 = &parents[rng.index(parents.len())];

            let (mut child1, mut child2) = if rng.chance(self.config.crossover_probability) {
                self.crossover_pair(parent1, parent2, rng)?
            } else {
                (parent1.clone(), parent2.clone())
            };

            for child in [&mut child1, &mut child2] {
                child.apply_mutation(
                    self.config.mutation_probability,
                    self.config.mutation,
                    self.config.mutation_sigma,
                    self.config.bounds(),
                    rng,
                );
                if self.config.encoding == Encoding::Binary {
                    for chromosome in child.chromosomes_mut() {
                        if let Chromosome::Binary(bits) = chromosome {
                            inversion::invert_segment(
                                bits,
                                self.config.inversion_probability,
                                rng,
                            );
                        }
                    }
                }
            }

            offspring.push(child1);
            if offspring.len() < num_offspring {
                offspring.push(child2);
            }
        }

        offspring.extend(elites);
        debug_assert_eq!(offspring.len(), self.config.population_size);
        self.individuals = offspring;
        self.generation += 1;
        Ok(())
    }

    /// Runs the full configured number of generations.
    ///
    /// History ends up with `epochs + 1` entries, the first being the initial
    /// evaluation. Returns the best individual of the run.
    pub fn run<F: FitnessFunction + ?Sized>(
        &mut self,
        fitness_fn: &F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        self.evaluate_all(fitness_fn)?;
        for epoch in 0..self.config.epochs {
            self.evolve(rng)?;
            self.evaluate_all(fitness_fn)?;
            if epoch % 10 == 0 {
                if let Some(best) = &self.best_individual {
                    debug!(epoch, best_fitness = best.fitness, "GA progress");
                }
            }
        }
        self.best_individual
            .clone()
            .ok_or(SearchError::EmptyPopulation)
    }
}

fn set_real_genes(individual: &mut Individual, genes: Vec<f64>) -> Result<()> {
    match individual.chromosomes_mut().first_mut() {
        Some(Chromosome::Real(real)) => real.set_genes(genes),
        _ => Err(SearchError::Configuration(
            "Expected a real-valued chromosome".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MutationMethod, OptimizationType};
    use crate::fitness::Objective;

    fn small_config() -> SearchConfig {
        SearchConfig::builder()
            .bounds(-20.0, 20.0)
            .num_variables(2)
            .population_size(20)
            .epochs(5)
            .elite_size(2)
            .seed(42)
            .build()
    }

    #[test]
    fn test_population_size_constant_across_generations() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut population = Population::new(small_config(), &mut rng).unwrap();
        population.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        for _ in 0..3 {
            population.evolve(&mut rng).unwrap();
            assert_eq!(population.individuals().len(), 20);
            population.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        }
        assert_eq!(population.generation(), 3);
    }

    #[test]
    fn test_elites_survive_unmodified() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut population = Population::new(small_config(), &mut rng).unwrap();
        population.evaluate_all(&Objective::MartinAndGaddy).unwrap();

        let elites = selection::best_selection(
            population.individuals(),
            2,
            OptimizationType::Minimize,
        );
        population.evolve(&mut rng).unwrap();
        population.evaluate_all(&Objective::MartinAndGaddy).unwrap();

        for elite in &elites {
            let survived = population.individuals().iter().any(|ind| {
                ind.fitness == elite.fitness && ind.decoded_values == elite.decoded_values
            });
            assert!(survived, "elite with fitness {} lost", elite.fitness);
        }
    }

    #[test]
    fn test_history_grows_by_one_per_evaluation() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut population = Population::new(small_config(), &mut rng).unwrap();
        population.run(&Objective::MartinAndGaddy, &mut rng).unwrap();
        assert_eq!(population.history().len(), 6); // epochs + 1
    }

    #[test]
    fn test_best_of_run_never_worsens() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut population = Population::new(small_config(), &mut rng).unwrap();
        population.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        let mut best_so_far = population.best_individual().unwrap().fitness;
        for _ in 0..5 {
            population.evolve(&mut rng).unwrap();
            population.evaluate_all(&Objective::MartinAndGaddy).unwrap();
            let best = population.best_individual().unwrap().fitness;
            assert!(best <= best_so_far);
            best_so_far = best;
        }
    }

    #[test]
    fn test_roulette_rejected_for_maximization() {
        let config = SearchConfig::builder()
            .selection(SelectionMethod::Roulette)
            .optimization(OptimizationType::Maximize)
            .population_size(10)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut population = Population::new(config, &mut rng).unwrap();
        population.evaluate_all(&Objective::MartinAndGaddy).unwrap();
        assert!(population.evolve(&mut rng).is_err());
    }

    #[test]
    fn test_binary_population_evolves() {
        let config = SearchConfig::builder()
            .bounds(-20.0, 20.0)
            .num_variables(2)
            .population_size(16)
            .epochs(3)
            .encoding(Encoding::Binary)
            .precision(8)
            .crossover(CrossoverMethod::TwoPoint, 0.8)
            .mutation(MutationMethod::SinglePoint, 0.1)
            .inversion_probability(0.2)
            .seed(6)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut population = Population::new(config, &mut rng).unwrap();
        let best = population.run(&Objective::MartinAndGaddy, &mut rng).unwrap();
        assert!(best.fitness.is_finite());
        assert_eq!(best.decoded_values.len(), 2);
        for &value in &best.decoded_values {
            assert!((-20.0..=20.0).contains(&value));
        }
    }
}
