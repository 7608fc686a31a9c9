//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! provides the draw primitives the engines need: uniform floats, uniform
//! indices, Bernoulli trials, and normal deviates.
//!
//! Every engine takes the generator explicitly, so a run seeded with
//! [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use evopt::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let x = rng.uniform(0.0, 1.0);
//! assert!((0.0..1.0).contains(&x));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// A wrapper around the `rand` crate's `StdRng` that provides the random draw
/// primitives used throughout the engine.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a uniform random float in `[low, high)`.
    ///
    /// Returns `low` when the interval is empty, so degenerate bounds do not
    /// panic.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    /// Generates a uniform random index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Performs a Bernoulli trial: returns `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Generates a random boolean with probability 0.5.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Draws from a normal distribution with the given mean and standard
    /// deviation.
    ///
    /// Falls back to the mean when `std_dev` is not a valid parameter
    /// (negative or non-finite). The guard is explicit: `Normal::new` itself
    /// accepts a negative standard deviation.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    /// Generates `num` uniform random floats in `[from, to)`.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> Vec<f64> {
        (0..num).map(|_| self.uniform(from, to)).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
