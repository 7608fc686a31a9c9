//! Mutation operators.
//!
//! The real-valued operators perturb a single gene; the bit-level operators
//! flip bits of a whole binary chromosome. Probability gating (one Bernoulli
//! trial per gene or per chromosome) is the caller's responsibility.
//!
//! Out-of-range positions and too-short chromosomes are logged warnings and
//! no-ops, never panics.

use tracing::warn;

use crate::chromosome::BinaryChromosome;
use crate::rng::RandomNumberGenerator;

/// Replaces the gene at `position` with a fresh uniform draw from `[a, b)`.
pub fn mutate_uniform(
    genes: &mut [f64],
    position: usize,
    a: f64,
    b: f64,
    rng: &mut RandomNumberGenerator,
) {
    match genes.get_mut(position) {
        Some(gene) => *gene = rng.uniform(a, b),
        None => warn!(
            position,
            len = genes.len(),
            "uniform mutation: position out of range, skipping"
        ),
    }
}

/// Adds `N(0, sigma)` noise to the gene at `position`, then clamps it into
/// `[a, b]`.
pub fn mutate_gaussian(
    genes: &mut [f64],
    position: usize,
    sigma: f64,
    a: f64,
    b: f64,
    rng: &mut RandomNumberGenerator,
) {
    match genes.get_mut(position) {
        Some(gene) => {
            let noise = rng.normal(0.0, sigma);
            *gene = (*gene + noise).clamp(a, b);
        }
        None => warn!(
            position,
            len = genes.len(),
            "gaussian mutation: position out of range, skipping"
        ),
    }
}

/// Flips one uniformly chosen bit.
pub fn flip_single(chromosome: &mut BinaryChromosome, rng: &mut RandomNumberGenerator) {
    if chromosome.is_empty() {
        warn!("single-point bit flip: empty chromosome, skipping");
        return;
    }
    let position = rng.index(chromosome.len());
    chromosome.flip_bit(position);
}

/// Flips two distinct uniformly chosen bits, sampled without replacement.
///
/// Chromosomes shorter than 2 bits are left unchanged.
pub fn flip_two(chromosome: &mut BinaryChromosome, rng: &mut RandomNumberGenerator) {
    let len = chromosome.len();
    if len < 2 {
        warn!(len, "two-point bit flip: chromosome too short, skipping");
        return;
    }
    let first = rng.index(len);
    let mut second = rng.index(len - 1);
    if second >= first {
        second += 1;
    }
    chromosome.flip_bit(first);
    chromosome.flip_bit(second);
}

/// Flips exactly the first and last bit.
pub fn flip_edges(chromosome: &mut BinaryChromosome) {
    let len = chromosome.len();
    if len == 0 {
        warn!("edge bit flip: empty chromosome, skipping");
        return;
    }
    chromosome.flip_bit(0);
    if len > 1 {
        chromosome.flip_bit(len - 1);
    }
}
