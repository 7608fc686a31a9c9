//! # Individual
//!
//! One candidate solution. Under the binary encoding an individual owns one
//! [`BinaryChromosome`] per decision variable; under the real encoding it
//! owns a single [`RealChromosome`] carrying all variables. `decode` refreshes
//! the decoded value vector from the chromosomes; `evaluate` decodes and then
//! scores through the fitness contract.
//!
//! Fitness starts at `f64::INFINITY` and is only meaningful after
//! [`Individual::evaluate`]; any structural change (mutation, inversion)
//! requires a re-evaluation before the fitness can be trusted.

use tracing::warn;

use crate::chromosome::{BinaryChromosome, Chromosome, RealChromosome};
use crate::config::{Encoding, MutationMethod, SearchConfig};
use crate::fitness::FitnessFunction;
use crate::operators::mutation;
use crate::rng::RandomNumberGenerator;

/// A candidate solution: chromosomes, their decoded values, and the fitness
/// assigned by the last evaluation.
#[derive(Debug, Clone)]
pub struct Individual {
    chromosomes: Vec<Chromosome>,
    /// Decoded decision-variable values, refreshed by [`Individual::decode`].
    pub decoded_values: Vec<f64>,
    /// Fitness of the last evaluation; `f64::INFINITY` until evaluated.
    pub fitness: f64,
}

impl Individual {
    /// Creates a randomly initialized individual for the configured encoding.
    pub fn random(config: &SearchConfig, rng: &mut RandomNumberGenerator) -> Self {
        let (low, high) = config.bounds();
        let chromosomes = match config.encoding {
            Encoding::Binary => (0..config.num_variables)
                .map(|_| Chromosome::Binary(BinaryChromosome::random(config.precision, rng)))
                .collect(),
            Encoding::Real => vec![Chromosome::Real(RealChromosome::random(
                config.num_variables,
                low,
                high,
                rng,
            ))],
        };
        Self {
            chromosomes,
            decoded_values: Vec::new(),
            fitness: f64::INFINITY,
        }
    }

    /// Creates an offspring shell for the configured encoding, with midpoint
    /// genes (real) or all-zero bits (binary), to be filled by crossover.
    pub fn offspring_shell(config: &SearchConfig) -> Self {
        let (low, high) = config.bounds();
        let chromosomes = match config.encoding {
            Encoding::Binary => (0..config.num_variables)
                .map(|_| Chromosome::Binary(BinaryChromosome::zeros(config.precision)))
                .collect(),
            Encoding::Real => vec![Chromosome::Real(RealChromosome::midpoint(
                config.num_variables,
                low,
                high,
            ))],
        };
        Self {
            chromosomes,
            decoded_values: Vec::new(),
            fitness: f64::INFINITY,
        }
    }

    /// Creates an individual from explicit chromosomes, e.g. crossover
    /// offspring assembled by the GA engine.
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self {
            chromosomes,
            decoded_values: Vec::new(),
            fitness: f64::INFINITY,
        }
    }

    /// Creates an individual directly from decoded values, bypassing the
    /// encoding layer.
    ///
    /// Used by the GJO engine (whose jackals live in value space) and by
    /// tests.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            chromosomes: Vec::new(),
            decoded_values: values,
            fitness: f64::INFINITY,
        }
    }

    /// The owned chromosomes.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Mutable access to the owned chromosomes, for operators applied to
    /// exclusively-owned offspring.
    pub fn chromosomes_mut(&mut self) -> &mut [Chromosome] {
        &mut self.chromosomes
    }

    /// Refreshes `decoded_values` from the chromosomes.
    ///
    /// Binary chromosomes decode onto `bounds`; real chromosomes copy their
    /// genes verbatim. Idempotent. Individuals built with
    /// [`Individual::from_values`] keep their values as-is.
    pub fn decode(&mut self, bounds: (f64, f64)) {
        if self.chromosomes.is_empty() {
            return;
        }
        let mut values = Vec::new();
        for chromosome in &mut self.chromosomes {
            match chromosome {
                Chromosome::Binary(binary) => values.push(binary.decode(bounds.0, bounds.1)),
                Chromosome::Real(real) => values.extend_from_slice(real.genes()),
            }
        }
        self.decoded_values = values;
    }

    /// Decodes, scores through `fitness_fn`, stores and returns the fitness.
    pub fn evaluate<F: FitnessFunction + ?Sized>(
        &mut self,
        fitness_fn: &F,
        bounds: (f64, f64),
    ) -> f64 {
        self.decode(bounds);
        self.fitness = fitness_fn.evaluate(self);
        self.fitness
    }

    /// Applies the configured mutation method.
    ///
    /// Real encoding: one Bernoulli trial per gene at `rate`. Binary
    /// encoding: one Bernoulli trial per chromosome at `rate`. A method that
    /// does not apply to this individual's encoding logs a warning and leaves
    /// the chromosome unchanged; this leniency is deliberate and mirrors the
    /// strictness split between the operator families.
    pub fn apply_mutation(
        &mut self,
        rate: f64,
        method: MutationMethod,
        sigma: f64,
        bounds: (f64, f64),
        rng: &mut RandomNumberGenerator,
    ) {
        for chromosome in &mut self.chromosomes {
            match chromosome {
                Chromosome::Real(real) => {
                    for position in 0..real.len() {
                        if !rng.chance(rate) {
                            continue;
                        }
                        match method {
                            MutationMethod::Uniform => mutation::mutate_uniform(
                                real.genes_mut(),
                                position,
                                bounds.0,
                                bounds.1,
                                rng,
                            ),
                            MutationMethod::Gaussian => mutation::mutate_gaussian(
                                real.genes_mut(),
                                position,
                                sigma,
                                bounds.0,
                                bounds.1,
                                rng,
                            ),
                            other => {
                                warn!(
                                    method = ?other,
                                    "mutation method does not apply to real encoding, skipping"
                                );
                            }
                        }
                    }
                }
                Chromosome::Binary(binary) => {
                    if !rng.chance(rate) {
                        continue;
                    }
                    match method {
                        MutationMethod::SinglePoint => mutation::flip_single(binary, rng),
                        MutationMethod::TwoPoint => mutation::flip_two(binary, rng),
                        MutationMethod::Edge => mutation::flip_edges(binary),
                        other => {
                            warn!(
                                method = ?other,
                                "mutation method does not apply to binary encoding, skipping"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CrossoverMethod, Encoding, SearchConfig};
    use crate::fitness::Objective;

    fn real_config() -> SearchConfig {
        SearchConfig::builder()
            .bounds(-20.0, 20.0)
            .num_variables(2)
            .build()
    }

    fn binary_config() -> SearchConfig {
        SearchConfig::builder()
            .bounds(-20.0, 20.0)
            .num_variables(2)
            .encoding(Encoding::Binary)
            .precision(8)
            .crossover(CrossoverMethod::SinglePoint, 0.8)
            .mutation(MutationMethod::SinglePoint, 0.05)
            .build()
    }

    #[test]
    fn test_random_real_individual_shape() {
        let config = real_config();
        let mut rng = RandomNumberGenerator::from_seed(107);
        let mut individual = Individual::random(&config, &mut rng);
        assert_eq!(individual.chromosomes().len(), 1);
        assert_eq!(individual.fitness, f64::INFINITY);

        individual.decode(config.bounds());
        assert_eq!(individual.decoded_values.len(), 2);
        for &value in &individual.decoded_values {
            assert!((-20.0..20.0).contains(&value));
        }
    }

    #[test]
    fn test_random_binary_individual_decodes_per_variable() {
        let config = binary_config();
        let mut rng = RandomNumberGenerator::from_seed(109);
        let mut individual = Individual::random(&config, &mut rng);
        assert_eq!(individual.chromosomes().len(), 2);

        individual.decode(config.bounds());
        assert_eq!(individual.decoded_values.len(), 2);
        for &value in &individual.decoded_values {
            assert!((-20.0..=20.0).contains(&value));
        }
    }

    #[test]
    fn test_evaluate_stores_fitness() {
        let config = real_config();
        let mut rng = RandomNumberGenerator::from_seed(113);
        let mut individual = Individual::random(&config, &mut rng);
        let fitness = individual.evaluate(&Objective::Hypersphere, config.bounds());
        assert!(fitness.is_finite());
        assert_eq!(fitness, individual.fitness);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let config = real_config();
        let mut rng = RandomNumberGenerator::from_seed(127);
        let mut individual = Individual::random(&config, &mut rng);
        individual.decode(config.bounds());
        let first = individual.decoded_values.clone();
        individual.decode(config.bounds());
        assert_eq!(individual.decoded_values, first);
    }

    #[test]
    fn test_apply_mutation_rate_one_changes_real_genes() {
        let config = real_config();
        let mut rng = RandomNumberGenerator::from_seed(131);
        let mut individual = Individual::random(&config, &mut rng);
        individual.decode(config.bounds());
        let before = individual.decoded_values.clone();

        individual.apply_mutation(
            1.0,
            MutationMethod::Uniform,
            1.0,
            config.bounds(),
            &mut rng,
        );
        individual.decode(config.bounds());
        assert_ne!(individual.decoded_values, before);
    }

    #[test]
    fn test_apply_mutation_incompatible_method_is_noop() {
        let config = binary_config();
        let mut rng = RandomNumberGenerator::from_seed(137);
        let mut individual = Individual::random(&config, &mut rng);
        individual.decode(config.bounds());
        let before = individual.decoded_values.clone();

        // Gaussian mutation does not apply to binary chromosomes.
        individual.apply_mutation(
            1.0,
            MutationMethod::Gaussian,
            1.0,
            config.bounds(),
            &mut rng,
        );
        individual.decode(config.bounds());
        assert_eq!(individual.decoded_values, before);
    }

    #[test]
    fn test_from_values_keeps_values_through_decode() {
        let mut individual = Individual::from_values(vec![5.0, 5.0]);
        individual.decode((-20.0, 20.0));
        assert_eq!(individual.decoded_values, vec![5.0, 5.0]);
    }
}
