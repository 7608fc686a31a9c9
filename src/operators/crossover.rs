//! Crossover operators.
//!
//! Two families:
//!
//! - Real-valued: children are linear/affine combinations of the parents'
//!   gene vectors. These always succeed and may produce genes outside the
//!   nominal bounds (linear and blend variants overshoot by design).
//! - Binary: recombination of bit strings at randomly chosen interior
//!   points. Mismatched or too-short parents yield `None` with a logged
//!   warning; callers fall back to cloning the parents.
//!
//! No operator mutates its inputs.

use tracing::warn;

use crate::chromosome::BinaryChromosome;
use crate::rng::RandomNumberGenerator;

/// Arithmetic crossover: one shared mixing coefficient `alpha ∈ [0, 1)` for
/// the whole pair.
///
/// `child1 = α·p1 + (1−α)·p2`, `child2 = (1−α)·p1 + α·p2`.
pub fn arithmetic(
    parent1: &[f64],
    parent2: &[f64],
    rng: &mut RandomNumberGenerator,
) -> (Vec<f64>, Vec<f64>) {
    let alpha = rng.uniform(0.0, 1.0);
    let child1 = parent1
        .iter()
        .zip(parent2)
        .map(|(p1, p2)| alpha * p1 + (1.0 - alpha) * p2)
        .collect();
    let child2 = parent1
        .iter()
        .zip(parent2)
        .map(|(p1, p2)| (1.0 - alpha) * p1 + alpha * p2)
        .collect();
    (child1, child2)
}

/// Linear crossover: midpoint child and an extrapolated child
/// `1.5·p1 − 0.5·p2`.
pub fn linear(parent1: &[f64], parent2: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let child1 = parent1
        .iter()
        .zip(parent2)
        .map(|(p1, p2)| 0.5 * (p1 + p2))
        .collect();
    let child2 = parent1
        .iter()
        .zip(parent2)
        .map(|(p1, p2)| 1.5 * p1 - 0.5 * p2)
        .collect();
    (child1, child2)
}

/// Blend-alpha (BLX-α) crossover: each child gene drawn independently from
/// `[min − α·d, max + α·d]` where `d = |p1 − p2|`.
pub fn blend_alpha(
    parent1: &[f64],
    parent2: &[f64],
    alpha: f64,
    rng: &mut RandomNumberGenerator,
) -> (Vec<f64>, Vec<f64>) {
    blend(parent1, parent2, alpha, alpha, rng)
}

/// Blend-alpha-beta (BLX-αβ) crossover: the extension below the smaller
/// parent is scaled by `alpha`, the extension above the larger by `beta`.
pub fn blend_alpha_beta(
    parent1: &[f64],
    parent2: &[f64],
    alpha: f64,
    beta: f64,
    rng: &mut RandomNumberGenerator,
) -> (Vec<f64>, Vec<f64>) {
    blend(parent1, parent2, alpha, beta, rng)
}

fn blend(
    parent1: &[f64],
    parent2: &[f64],
    below: f64,
    above: f64,
    rng: &mut RandomNumberGenerator,
) -> (Vec<f64>, Vec<f64>) {
    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent1.len());
    for (&p1, &p2) in parent1.iter().zip(parent2) {
        let d = (p1 - p2).abs();
        let lower = p1.min(p2) - below * d;
        let upper = p1.max(p2) + above * d;
        child1.push(rng.uniform(lower, upper));
        child2.push(rng.uniform(lower, upper));
    }
    (child1, child2)
}

/// Averaging crossover: both children sit at the parents' midpoint.
pub fn averaging(parent1: &[f64], parent2: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let child: Vec<f64> = parent1
        .iter()
        .zip(parent2)
        .map(|(p1, p2)| (p1 + p2) / 2.0)
        .collect();
    (child.clone(), child)
}

/// Single-point crossover on bit strings.
///
/// The cut point is drawn from the interior `1..len`, so each child always
/// carries material from both parents. Returns `None` (with a warning) on
/// mismatched lengths or parents shorter than 2 bits.
pub fn single_point(
    parent1: &BinaryChromosome,
    parent2: &BinaryChromosome,
    rng: &mut RandomNumberGenerator,
) -> Option<(BinaryChromosome, BinaryChromosome)> {
    let len = check_bit_parents(parent1, parent2, 2)?;
    let cut = 1 + rng.index(len - 1);

    let mut child1 = parent1.bits().to_vec();
    let mut child2 = parent2.bits().to_vec();
    child1[cut..].copy_from_slice(&parent2.bits()[cut..]);
    child2[cut..].copy_from_slice(&parent1.bits()[cut..]);
    Some((
        BinaryChromosome::from_bits(child1),
        BinaryChromosome::from_bits(child2),
    ))
}

/// Two-point crossover on bit strings: the segment between two interior cut
/// points is swapped.
///
/// Returns `None` (with a warning) on mismatched lengths or parents shorter
/// than 3 bits.
pub fn two_point(
    parent1: &BinaryChromosome,
    parent2: &BinaryChromosome,
    rng: &mut RandomNumberGenerator,
) -> Option<(BinaryChromosome, BinaryChromosome)> {
    let len = check_bit_parents(parent1, parent2, 3)?;
    let first = 1 + rng.index(len - 2);
    let second = first + 1 + rng.index(len - first - 1);

    let mut child1 = parent1.bits().to_vec();
    let mut child2 = parent2.bits().to_vec();
    child1[first..second].copy_from_slice(&parent2.bits()[first..second]);
    child2[first..second].copy_from_slice(&parent1.bits()[first..second]);
    Some((
        BinaryChromosome::from_bits(child1),
        BinaryChromosome::from_bits(child2),
    ))
}

/// Uniform crossover on bit strings: each position swaps with probability
/// 0.5.
///
/// Returns `None` (with a warning) on mismatched lengths or empty parents.
pub fn uniform(
    parent1: &BinaryChromosome,
    parent2: &BinaryChromosome,
    rng: &mut RandomNumberGenerator,
) -> Option<(BinaryChromosome, BinaryChromosome)> {
    let len = check_bit_parents(parent1, parent2, 1)?;
    let mut child1 = parent1.bits().to_vec();
    let mut child2 = parent2.bits().to_vec();
    for i in 0..len {
        if rng.coin_flip() {
            std::mem::swap(&mut child1[i], &mut child2[i]);
        }
    }
    Some((
        BinaryChromosome::from_bits(child1),
        BinaryChromosome::from_bits(child2),
    ))
}

fn check_bit_parents(
    parent1: &BinaryChromosome,
    parent2: &BinaryChromosome,
    min_len: usize,
) -> Option<usize> {
    if parent1.len() != parent2.len() {
        warn!(
            len1 = parent1.len(),
            len2 = parent2.len(),
            "bit crossover: parent length mismatch, skipping"
        );
        return None;
    }
    if parent1.len() < min_len {
        warn!(
            len = parent1.len(),
            min_len, "bit crossover: parents too short, skipping"
        );
        return None;
    }
    Some(parent1.len())
}
