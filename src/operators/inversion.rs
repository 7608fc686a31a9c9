//! Inversion operator.
//!
//! Reverses a randomly chosen contiguous segment of a binary chromosome.
//! Applies only to the binary encoding; the real encoding has no inversion.

use tracing::warn;

use crate::chromosome::BinaryChromosome;
use crate::rng::RandomNumberGenerator;

/// With probability `probability`, reverses the bits of a random segment
/// `[p1, p2]` with `p1 < p2`.
///
/// Chromosomes shorter than 2 bits are left unchanged with a warning.
pub fn invert_segment(
    chromosome: &mut BinaryChromosome,
    probability: f64,
    rng: &mut RandomNumberGenerator,
) {
    if !rng.chance(probability) {
        return;
    }

    let len = chromosome.len();
    if len < 2 {
        warn!(len, "inversion: chromosome too short, skipping");
        return;
    }

    let p1 = rng.index(len - 1);
    let p2 = p1 + 1 + rng.index(len - p1 - 1);

    let mut bits = chromosome.bits().to_vec();
    bits[p1..=p2].reverse();
    // Length is preserved, so this cannot fail.
    let _ = chromosome.set_bits(bits);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_preserves_length_and_bit_counts() {
        let mut rng = RandomNumberGenerator::from_seed(89);
        for _ in 0..50 {
            let mut chromosome = BinaryChromosome::random(16, &mut rng);
            let ones_before = chromosome.bits().iter().filter(|&&b| b).count();
            invert_segment(&mut chromosome, 1.0, &mut rng);
            assert_eq!(chromosome.len(), 16);
            let ones_after = chromosome.bits().iter().filter(|&&b| b).count();
            assert_eq!(ones_before, ones_after);
        }
    }

    #[test]
    fn test_inversion_zero_probability_is_noop() {
        let mut rng = RandomNumberGenerator::from_seed(97);
        let mut chromosome = BinaryChromosome::random(16, &mut rng);
        let original = chromosome.clone();
        invert_segment(&mut chromosome, 0.0, &mut rng);
        assert_eq!(chromosome, original);
    }

    #[test]
    fn test_inversion_on_short_chromosome_is_noop() {
        let mut rng = RandomNumberGenerator::from_seed(101);
        let mut chromosome = BinaryChromosome::zeros(1);
        invert_segment(&mut chromosome, 1.0, &mut rng);
        assert_eq!(chromosome.bits(), &[false]);
    }

    #[test]
    fn test_inversion_reverses_some_segment() {
        let mut rng = RandomNumberGenerator::from_seed(103);
        // One-hot pattern: most segment choices move the set bit.
        let mut moved = 0;
        for _ in 0..50 {
            let mut chromosome = BinaryChromosome::zeros(8);
            chromosome.flip_bit(0);
            invert_segment(&mut chromosome, 1.0, &mut rng);
            if chromosome.get(0) == Some(false) {
                moved += 1;
            }
        }
        assert!(moved > 0);
    }
}
