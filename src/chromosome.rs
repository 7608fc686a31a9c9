//! # Chromosome Encodings
//!
//! Two mutually exclusive encoding strategies, selected by configuration:
//!
//! - [`BinaryChromosome`]: a fixed-width bit string encoding a single
//!   decision variable, decoded linearly onto the search bounds.
//! - [`RealChromosome`]: a vector of real-valued genes carrying all decision
//!   variables of an individual directly.
//!
//! Both are value-like: cloning a chromosome never shares backing storage, so
//! offspring can be mutated in place without touching their parents.

use tracing::warn;

use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

/// A fixed-length bit-string encoding of one decision variable.
///
/// The bit sequence is interpreted as an unsigned integer (first bit most
/// significant) and mapped linearly onto `[a, b]`:
///
/// `x = a + int_value * (b - a) / (2^num_bits - 1)`
///
/// The all-zero string decodes to exactly `a` and the all-one string to
/// exactly `b`. Decoding is cached; any in-place mutation invalidates the
/// cache.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryChromosome {
    bits: Vec<bool>,
    decoded: Option<(f64, f64, f64)>,
}

impl BinaryChromosome {
    /// Creates a chromosome with uniformly random bits.
    pub fn random(num_bits: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            bits: (0..num_bits).map(|_| rng.coin_flip()).collect(),
            decoded: None,
        }
    }

    /// Creates an all-zero chromosome.
    pub fn zeros(num_bits: usize) -> Self {
        Self {
            bits: vec![false; num_bits],
            decoded: None,
        }
    }

    /// Creates an all-one chromosome.
    pub fn ones(num_bits: usize) -> Self {
        Self {
            bits: vec![true; num_bits],
            decoded: None,
        }
    }

    /// Creates a chromosome from explicit bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self {
            bits,
            decoded: None,
        }
    }

    /// The number of bits. Constant after construction.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<bool> {
        self.bits.get(position).copied()
    }

    /// The unsigned integer value of the bit sequence, first bit most
    /// significant.
    pub fn int_value(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    /// Decodes the chromosome onto `[a, b]`.
    ///
    /// The result is cached per bounds pair and recomputed only after a
    /// mutation or a bounds change.
    pub fn decode(&mut self, a: f64, b: f64) -> f64 {
        if let Some((ca, cb, value)) = self.decoded {
            if ca == a && cb == b {
                return value;
            }
        }
        let max = if self.bits.len() >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits.len()) - 1
        };
        let value = if max == 0 {
            a
        } else {
            a + (self.int_value() as f64 / max as f64) * (b - a)
        };
        self.decoded = Some((a, b, value));
        value
    }

    /// Flips the bit at `position`.
    ///
    /// An out-of-range position is a logged warning and a no-op, never a
    /// panic. This leniency is part of the operator contract.
    pub fn flip_bit(&mut self, position: usize) {
        match self.bits.get_mut(position) {
            Some(bit) => {
                *bit = !*bit;
                self.decoded = None;
            }
            None => {
                warn!(
                    position,
                    len = self.bits.len(),
                    "flip_bit: position out of range, skipping"
                );
            }
        }
    }

    /// Replaces the bits wholesale. Fails on length mismatch.
    pub fn set_bits(&mut self, bits: Vec<bool>) -> Result<()> {
        if bits.len() != self.bits.len() {
            return Err(SearchError::Configuration(format!(
                "Bit length mismatch: expected {}, got {}",
                self.bits.len(),
                bits.len()
            )));
        }
        self.bits = bits;
        self.decoded = None;
        Ok(())
    }

    /// Read-only view of the bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

/// A real-valued chromosome: one gene per decision variable, each nominally
/// in `[low, high]`.
///
/// Crossover offspring may temporarily carry genes outside the bounds
/// (linear and blend operators legitimately overshoot); only
/// [`RealChromosome::set_from_values`] enforces the range.
#[derive(Debug, Clone, PartialEq)]
pub struct RealChromosome {
    genes: Vec<f64>,
    low: f64,
    high: f64,
}

impl RealChromosome {
    /// Creates a chromosome with genes drawn uniformly from `[low, high)`.
    pub fn random(num_genes: usize, low: f64, high: f64, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            genes: (0..num_genes).map(|_| rng.uniform(low, high)).collect(),
            low,
            high,
        }
    }

    /// Creates a chromosome with every gene at the interval midpoint.
    ///
    /// Used as the shell for offspring whose genes are filled in by
    /// crossover.
    pub fn midpoint(num_genes: usize, low: f64, high: f64) -> Self {
        Self {
            genes: vec![(low + high) / 2.0; num_genes],
            low,
            high,
        }
    }

    /// The number of genes. Constant after construction.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The nominal gene bounds.
    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Replaces all genes, enforcing both length and range.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` on length mismatch and `OutOfBounds` if any
    /// value lies outside `[low, high]`.
    pub fn set_from_values(&mut self, values: Vec<f64>) -> Result<()> {
        if values.len() != self.genes.len() {
            return Err(SearchError::Configuration(format!(
                "Gene count mismatch: expected {}, got {}",
                self.genes.len(),
                values.len()
            )));
        }
        for &value in &values {
            if value < self.low || value > self.high {
                return Err(SearchError::OutOfBounds(format!(
                    "Value {} outside [{}, {}]",
                    value, self.low, self.high
                )));
            }
        }
        self.genes = values;
        Ok(())
    }

    /// Replaces all genes with a length check only.
    ///
    /// Crossover children go through here, since several operators produce
    /// genes outside the nominal bounds.
    pub fn set_genes(&mut self, values: Vec<f64>) -> Result<()> {
        if values.len() != self.genes.len() {
            return Err(SearchError::Configuration(format!(
                "Gene count mismatch: expected {}, got {}",
                self.genes.len(),
                values.len()
            )));
        }
        self.genes = values;
        Ok(())
    }

    /// Read-only view of the genes.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable view of the genes, for the in-place mutation operators.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }
}

/// One chromosome slot of an individual, branching on the configured
/// encoding strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Chromosome {
    Binary(BinaryChromosome),
    Real(RealChromosome),
}

impl Chromosome {
    pub fn len(&self) -> usize {
        match self {
            Chromosome::Binary(c) => c.len(),
            Chromosome::Real(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
