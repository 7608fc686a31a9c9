//! # SearchConfig
//!
//! The `SearchConfig` struct carries every parameter of an optimization run:
//! the objective, the search bounds, the encoding, the operator choices for
//! each family, and the run length. A configuration is an explicit value
//! passed into the engine constructors; it is never mutated during a run.
//!
//! Operator families are closed enums, so an unsupported method name is a
//! compile-time error rather than a runtime warning. Combinations that are
//! structurally invalid (a bit-level crossover on a real-valued encoding) are
//! rejected by [`SearchConfig::validate`].
//!
//! ## Example
//!
//! ```rust
//! use evopt::config::{CrossoverMethod, SearchConfig, SelectionMethod};
//! use evopt::fitness::Objective;
//!
//! let config = SearchConfig::builder()
//!     .objective(Objective::MartinAndGaddy)
//!     .bounds(-20.0, 20.0)
//!     .num_variables(2)
//!     .population_size(30)
//!     .epochs(50)
//!     .selection(SelectionMethod::Tournament { size: 3 })
//!     .crossover(CrossoverMethod::Arithmetic, 0.8)
//!     .seed(7)
//!     .build();
//!
//! assert!(config.validate().is_ok());
//! ```

use std::cmp::Ordering;

use crate::error::{Result, SearchError};
use crate::fitness::Objective;

/// Direction of the optimization: whether lower or higher fitness wins.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationType {
    Minimize,
    Maximize,
}

impl OptimizationType {
    /// Returns `true` if `candidate` is a strict improvement over `incumbent`
    /// under this direction. Ties are not improvements.
    pub fn is_improvement(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            OptimizationType::Minimize => candidate < incumbent,
            OptimizationType::Maximize => candidate > incumbent,
        }
    }

    /// Total ordering over fitness values with the better value first.
    ///
    /// NaN sorts last regardless of direction, so degenerate individuals can
    /// never become leaders. Two NaNs compare equal, keeping the ordering
    /// consistent for `sort_by`.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            OptimizationType::Minimize => ord,
            OptimizationType::Maximize => ord.reverse(),
        }
    }
}

/// How individuals encode their decision variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One fixed-width bit string per decision variable, decoded linearly
    /// onto the search bounds. The bit width is `SearchConfig::precision`.
    Binary,
    /// A single chromosome of real-valued genes, one per decision variable.
    Real,
}

/// Selection methods for choosing the mating pool.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    /// Top-`amount` individuals by fitness (stable, deterministic).
    Best { amount: usize },
    /// Fitness-reciprocal roulette wheel. Minimization with strictly positive
    /// fitness only.
    Roulette,
    /// `population_size` independent tournaments of `size` distinct
    /// participants each.
    Tournament { size: usize },
}

/// Crossover methods. The first five operate on real-valued chromosomes, the
/// last three on binary chromosomes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverMethod {
    Arithmetic,
    Linear,
    BlendAlpha,
    BlendAlphaBeta,
    Averaging,
    SinglePoint,
    TwoPoint,
    Uniform,
}

impl CrossoverMethod {
    /// Whether this method recombines real-valued gene vectors (as opposed to
    /// bit strings).
    pub fn is_real_valued(&self) -> bool {
        matches!(
            self,
            CrossoverMethod::Arithmetic
                | CrossoverMethod::Linear
                | CrossoverMethod::BlendAlpha
                | CrossoverMethod::BlendAlphaBeta
                | CrossoverMethod::Averaging
        )
    }
}

/// Mutation methods. `Uniform` and `Gaussian` operate on real-valued genes;
/// the bit-flip variants operate on binary chromosomes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationMethod {
    Uniform,
    Gaussian,
    SinglePoint,
    TwoPoint,
    Edge,
}

impl MutationMethod {
    /// Whether this method mutates real-valued genes (as opposed to bits).
    pub fn is_real_valued(&self) -> bool {
        matches!(self, MutationMethod::Uniform | MutationMethod::Gaussian)
    }
}

/// The full parameter set of one optimization run.
///
/// Defaults mirror a sensible Martin–Gaddy minimization setup; use
/// [`SearchConfig::builder`] to override individual fields.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Objective function to optimize.
    pub objective: Objective,
    /// Lower search bound for every decision variable.
    pub range_start: f64,
    /// Upper search bound for every decision variable.
    pub range_end: f64,
    /// Number of decision variables.
    pub num_variables: usize,
    /// Number of individuals (GA) or jackals (GJO).
    pub population_size: usize,
    /// Number of generations/iterations to run.
    pub epochs: usize,
    /// Bit width of each binary chromosome. Ignored by the real encoding.
    pub precision: usize,
    /// Chromosome encoding strategy.
    pub encoding: Encoding,
    /// Number of elites carried unmodified into the next generation.
    pub elite_size: usize,
    /// Parent-selection method.
    pub selection: SelectionMethod,
    /// Crossover method.
    pub crossover: CrossoverMethod,
    /// Probability of applying crossover to a parent pair.
    pub crossover_probability: f64,
    /// Mutation method.
    pub mutation: MutationMethod,
    /// Per-gene (real) or per-chromosome (binary) mutation probability.
    pub mutation_probability: f64,
    /// Standard deviation of the gaussian mutation.
    pub mutation_sigma: f64,
    /// Probability of segment inversion on binary chromosomes.
    pub inversion_probability: f64,
    /// Optimization direction.
    pub optimization: OptimizationType,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Returns a builder for constructing a `SearchConfig` with a fluent
    /// interface.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// The search bounds as a `(low, high)` pair.
    pub fn bounds(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if:
    /// - the bounds are not finite and strictly ordered
    /// - the population has fewer than 2 members
    /// - there are no decision variables
    /// - any probability is outside `[0, 1]`
    /// - the elite set does not leave room for offspring
    /// - the binary bit width is outside `1..=64`
    /// - the crossover family does not match the encoding
    ///
    /// A mutation method that does not match the encoding is deliberately
    /// *not* rejected: mutation dispatch warns and skips at application time,
    /// which is part of the per-family contract (only selection and crossover
    /// are strict).
    pub fn validate(&self) -> Result<()> {
        self.validate_search_space()?;
        for (name, p) in [
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
            ("inversion_probability", self.inversion_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(SearchError::Configuration(format!(
                    "{} must be in [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.elite_size >= self.population_size {
            return Err(SearchError::Configuration(format!(
                "Elite size ({}) must be smaller than the population size ({})",
                self.elite_size, self.population_size
            )));
        }
        if self.encoding == Encoding::Binary && !(1..=64).contains(&self.precision) {
            return Err(SearchError::Configuration(format!(
                "Binary precision must be in 1..=64, got {}",
                self.precision
            )));
        }
        match self.selection {
            SelectionMethod::Best { amount } if amount == 0 => {
                return Err(SearchError::Configuration(
                    "Best selection amount must be at least 1".to_string(),
                ));
            }
            SelectionMethod::Tournament { size } if size == 0 => {
                return Err(SearchError::Configuration(
                    "Tournament size must be at least 1".to_string(),
                ));
            }
            SelectionMethod::Tournament { size } if size > self.population_size => {
                return Err(SearchError::Configuration(format!(
                    "Tournament size ({}) exceeds the population size ({})",
                    size, self.population_size
                )));
            }
            _ => {}
        }
        if self.crossover.is_real_valued() != (self.encoding == Encoding::Real) {
            return Err(SearchError::Configuration(format!(
                "Crossover method {:?} is incompatible with {:?} encoding",
                self.crossover, self.encoding
            )));
        }
        Ok(())
    }

    /// Validates only the fields every engine reads: bounds, variable count,
    /// and population size.
    ///
    /// The swarm engine uses this instead of [`SearchConfig::validate`], since
    /// the GA-specific fields (operators, probabilities, elitism, precision)
    /// do not apply to it.
    pub fn validate_search_space(&self) -> Result<()> {
        if !self.range_start.is_finite() || !self.range_end.is_finite() {
            return Err(SearchError::InvalidNumericValue(
                "Search bounds must be finite".to_string(),
            ));
        }
        if self.range_start >= self.range_end {
            return Err(SearchError::Configuration(format!(
                "Invalid search bounds: [{}, {}]",
                self.range_start, self.range_end
            )));
        }
        if self.population_size < 2 {
            return Err(SearchError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.num_variables == 0 {
            return Err(SearchError::Configuration(
                "Number of variables must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            objective: Objective::MartinAndGaddy,
            range_start: -20.0,
            range_end: 20.0,
            num_variables: 2,
            population_size: 100,
            epochs: 100,
            precision: 16,
            encoding: Encoding::Real,
            elite_size: 2,
            selection: SelectionMethod::Tournament { size: 3 },
            crossover: CrossoverMethod::Arithmetic,
            crossover_probability: 0.8,
            mutation: MutationMethod::Uniform,
            mutation_probability: 0.05,
            mutation_sigma: 1.0,
            inversion_probability: 0.0,
            optimization: OptimizationType::Minimize,
            seed: None,
        }
    }
}

/// Builder for [`SearchConfig`].
///
/// Unset fields fall back to the defaults of [`SearchConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: Option<SearchConfig>,
}

impl SearchConfigBuilder {
    fn config(&mut self) -> &mut SearchConfig {
        self.config.get_or_insert_with(SearchConfig::default)
    }

    /// Sets the objective function.
    pub fn objective(mut self, objective: Objective) -> Self {
        self.config().objective = objective;
        self
    }

    /// Sets the search bounds for every decision variable.
    pub fn bounds(mut self, low: f64, high: f64) -> Self {
        let config = self.config();
        config.range_start = low;
        config.range_end = high;
        self
    }

    /// Sets the number of decision variables.
    pub fn num_variables(mut self, value: usize) -> Self {
        self.config().num_variables = value;
        self
    }

    /// Sets the population/swarm size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.config().population_size = value;
        self
    }

    /// Sets the number of generations/iterations.
    pub fn epochs(mut self, value: usize) -> Self {
        self.config().epochs = value;
        self
    }

    /// Sets the bit width used by the binary encoding.
    pub fn precision(mut self, value: usize) -> Self {
        self.config().precision = value;
        self
    }

    /// Sets the chromosome encoding.
    pub fn encoding(mut self, value: Encoding) -> Self {
        self.config().encoding = value;
        self
    }

    /// Sets the number of elites.
    pub fn elite_size(mut self, value: usize) -> Self {
        self.config().elite_size = value;
        self
    }

    /// Sets the selection method.
    pub fn selection(mut self, value: SelectionMethod) -> Self {
        self.config().selection = value;
        self
    }

    /// Sets the crossover method and its application probability.
    pub fn crossover(mut self, method: CrossoverMethod, probability: f64) -> Self {
        let config = self.config();
        config.crossover = method;
        config.crossover_probability = probability;
        self
    }

    /// Sets the mutation method and its application probability.
    pub fn mutation(mut self, method: MutationMethod, probability: f64) -> Self {
        let config = self.config();
        config.mutation = method;
        config.mutation_probability = probability;
        self
    }

    /// Sets the standard deviation of the gaussian mutation.
    pub fn mutation_sigma(mut self, value: f64) -> Self {
        self.config().mutation_sigma = value;
        self
    }

    /// Sets the inversion probability (binary encoding only).
    pub fn inversion_probability(mut self, value: f64) -> Self {
        self.config().inversion_probability = value;
        self
    }

    /// Sets the optimization direction.
    pub fn optimization(mut self, value: OptimizationType) -> Self {
        self.config().optimization = value;
        self
    }

    /// Sets the RNG seed for a reproducible run.
    pub fn seed(mut self, value: u64) -> Self {
        self.config().seed = Some(value);
        self
    }

    /// Builds the `SearchConfig`.
    pub fn build(self) -> SearchConfig {
        self.config.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_fields() {
        let config = SearchConfig::builder()
            .bounds(-5.0, 5.0)
            .population_size(30)
            .epochs(50)
            .elite_size(4)
            .seed(123)
            .build();

        assert_eq!(config.bounds(), (-5.0, 5.0));
        assert_eq!(config.population_size, 30);
        assert_eq!(config.epochs, 50);
        assert_eq!(config.elite_size, 4);
        assert_eq!(config.seed, Some(123));
        // Untouched fields keep their defaults.
        assert_eq!(config.num_variables, 2);
    }

    #[test]
    fn test_validate_rejects_reversed_bounds() {
        let config = SearchConfig::builder().bounds(20.0, -20.0).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let config = SearchConfig::builder()
            .crossover(CrossoverMethod::Arithmetic, 1.5)
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_search_space_skips_ga_fields() {
        // Fails the full GA validation (elite overflow) but is a perfectly
        // good search space for the swarm engine.
        let config = SearchConfig::builder()
            .population_size(2)
            .elite_size(2)
            .build();
        assert!(config.validate().is_err());
        assert!(config.validate_search_space().is_ok());

        let config = SearchConfig::builder().bounds(1.0, -1.0).build();
        assert!(config.validate_search_space().is_err());
    }

    #[test]
    fn test_validate_rejects_elite_overflow() {
        let config = SearchConfig::builder()
            .population_size(10)
            .elite_size(10)
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_crossover_encoding_mismatch() {
        // Bit-level crossover on a real-valued encoding.
        let config = SearchConfig::builder()
            .encoding(Encoding::Real)
            .crossover(CrossoverMethod::SinglePoint, 0.8)
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tolerates_mutation_encoding_mismatch() {
        // Mutation dispatch is lenient: a mismatched method warns and skips
        // at application time instead of failing validation.
        let config = SearchConfig::builder()
            .encoding(Encoding::Binary)
            .precision(8)
            .crossover(CrossoverMethod::SinglePoint, 0.8)
            .mutation(MutationMethod::Gaussian, 0.05)
            .build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_binary_setup() {
        let config = SearchConfig::builder()
            .encoding(Encoding::Binary)
            .precision(8)
            .crossover(CrossoverMethod::TwoPoint, 0.8)
            .mutation(MutationMethod::SinglePoint, 0.05)
            .inversion_probability(0.1)
            .build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optimization_type_improvement() {
        assert!(OptimizationType::Minimize.is_improvement(1.0, 2.0));
        assert!(!OptimizationType::Minimize.is_improvement(2.0, 2.0));
        assert!(OptimizationType::Maximize.is_improvement(3.0, 2.0));
        assert!(!OptimizationType::Maximize.is_improvement(2.0, 2.0));
    }

    #[test]
    fn test_optimization_type_compare_nan_sorts_last() {
        let mut values = [f64::NAN, 2.0, 1.0];
        values.sort_by(|a, b| OptimizationType::Minimize.compare(*a, *b));
        assert_eq!(values[0], 1.0);
        assert!(values[2].is_nan());

        let mut values = [f64::NAN, 2.0, 3.0];
        values.sort_by(|a, b| OptimizationType::Maximize.compare(*a, *b));
        assert_eq!(values[0], 3.0);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_optimization_type_compare_two_nans_are_equal() {
        for direction in [OptimizationType::Minimize, OptimizationType::Maximize] {
            assert_eq!(direction.compare(f64::NAN, f64::NAN), Ordering::Equal);
        }
        // A consistent order: sorting a NaN-heavy slice must not panic.
        let mut values = [f64::NAN, 1.0, f64::NAN, 2.0, f64::NAN];
        values.sort_by(|a, b| OptimizationType::Minimize.compare(*a, *b));
        assert_eq!(values[0], 1.0);
        assert_eq!(values[1], 2.0);
        assert!(values[2..].iter().all(|v| v.is_nan()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_round_trip() {
        let config = SearchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.population_size, config.population_size);
        assert_eq!(back.crossover, config.crossover);
    }
}
